//! Configuration loading from files and the environment.

use std::path::{Path, PathBuf};

use super::{CONFIG_FILE_NAME, Config, ConfigError, RendererKind};

/// Prefix for environment overrides, e.g. `MDWRAP_TEMPLATE=page.html` or
/// `MDWRAP_RENDERER__KIND=builtin`.
const ENV_PREFIX: &str = "MDWRAP";

impl Config {
    /// Load the config for a run in `dir`.
    ///
    /// An explicit `config_file` must exist. Without one, `mdwrap.yaml` in
    /// `dir` is used when present and defaults apply otherwise.
    pub fn load_from_arg(config_file: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        match config_file {
            Some(path) => {
                let path = if path.is_relative() {
                    dir.join(path)
                } else {
                    path.to_path_buf()
                };
                Self::load_from_file(&path, true)
            }
            None => Self::load_from_file(&dir.join(CONFIG_FILE_NAME), false),
        }
    }

    /// Load the config from a YAML file layered with `MDWRAP_*` variables.
    pub(crate) fn load_from_file(path: &Path, required: bool) -> Result<Self, ConfigError> {
        let path_str = path
            .as_os_str()
            .to_str()
            .ok_or_else(|| ConfigError::EncodePath(PathBuf::from(path)))?;

        let config = config::Config::builder()
            .add_source(config::File::new(path_str, config::FileFormat::Yaml).required(required))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(" ")
                    .with_list_parse_key("renderer.command"),
            )
            .build()?
            .try_deserialize::<Config>()?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make extension substitution ambiguous.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, ext) in [
            ("source_extension", &self.source_extension),
            ("output_extension", &self.output_extension),
        ] {
            if ext.is_empty() {
                return Err(ConfigError::Validation(format!("{field} must not be empty")));
            }
            if ext.starts_with('.') || ext.contains(['/', '\\']) {
                return Err(ConfigError::Validation(format!(
                    "{field} must be a bare extension like \"html\", got {ext:?}"
                )));
            }
        }

        if self.source_extension == self.output_extension {
            return Err(ConfigError::Validation(
                "source_extension and output_extension must differ".to_string(),
            ));
        }

        if self.renderer.kind == RendererKind::Command && self.renderer.command.is_empty() {
            return Err(ConfigError::Validation(
                "renderer.command must name a program when renderer.kind is 'command'".to_string(),
            ));
        }

        Ok(())
    }
}
