use crate::{
    CleanArgs,
    build::{discover_documents, resolve, same_path},
    commands::working_dir,
    config::Config,
};

pub async fn run(args: &CleanArgs) -> Result<(), anyhow::Error> {
    let dir = working_dir(args.dir.as_deref())?;
    let config = Config::load_from_arg(args.config_file.as_deref(), &dir)?;

    let documents = discover_documents(&dir, &config.source_suffix(), &config.output_suffix())?;
    let template_path = resolve(&dir, &config.template);

    // Only pages that have a source next to them are ours to delete
    let mut removed = 0;
    for doc in documents {
        if !tokio::fs::try_exists(&doc.output_path).await? {
            continue;
        }

        if same_path(&doc.output_path, &template_path) {
            tracing::warn!(
                "Keeping {}: it is the layout template, not a generated page",
                doc.output_path.display()
            );
            continue;
        }

        if args.dry_run {
            println!("Would delete {}", doc.output_path.display());
        } else {
            tokio::fs::remove_file(&doc.output_path).await?;
            println!("Deleted {}", doc.output_path.display());
        }
        removed += 1;
    }

    tracing::debug!(removed, dry_run = args.dry_run, "clean finished");

    Ok(())
}
