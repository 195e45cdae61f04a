use std::path::Path;

use crate::{
    InitArgs,
    commands::working_dir,
    config::{CONFIG_FILE_NAME, Config},
};

const STARTER_LAYOUT: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
</head>
<body>
{{ content }}
</body>
</html>
"#;

pub async fn run(args: &InitArgs) -> Result<(), anyhow::Error> {
    let path = working_dir(Some(args.path.as_path()))?;

    if !path.exists() {
        if args.create {
            tokio::fs::create_dir_all(&path).await?;
            println!("Created directory {path}", path = path.display());
        } else {
            return Err(anyhow::anyhow!(
                "Directory does not exist: {path}",
                path = path.display()
            ));
        }
    }

    println!("Initializing project in {}", path.display());

    let config = Config::default();
    let config_text = serde_yaml::to_string(&config)?;

    write_new(&path.join(CONFIG_FILE_NAME), &config_text, args.force).await?;
    write_new(&path.join(&config.template), STARTER_LAYOUT, args.force).await?;

    Ok(())
}

/// Write `contents` to `path`, refusing to replace an existing file unless
/// `force` is set.
async fn write_new(path: &Path, contents: &str, force: bool) -> Result<(), anyhow::Error> {
    if !force && tokio::fs::try_exists(path).await? {
        return Err(anyhow::anyhow!(
            "{path} already exists (use --force to overwrite)",
            path = path.display()
        ));
    }

    tokio::fs::write(path, contents).await?;
    println!("Created {path}", path = path.display());

    Ok(())
}
