use crate::{BuildArgs, build::Generator, commands::working_dir, config::Config};

pub async fn run(args: &BuildArgs) -> Result<(), anyhow::Error> {
    let dir = working_dir(args.dir.as_deref())?;

    let mut config = Config::load_from_arg(args.config_file.as_deref(), &dir)?;
    if let Some(template) = &args.template {
        config.template = template.clone();
    }
    tracing::debug!(?config, "loaded config");

    let generator = Generator::new(config, dir);
    let result = generator.build()?;

    tracing::info!(
        "Generated {} page(s) in {}",
        result.pages.len(),
        generator.dir().display()
    );

    Ok(())
}
