//! Configuration loading and types for mdwrap.
//!
//! - Type definitions for config structures (`types`)
//! - Loading configs from files and the environment (`load`)

mod load;
mod types;

pub use types::{Config, MarkdownConfig, RendererKind};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "mdwrap.yaml";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to deserialize config: {0}")]
    Deserialize(#[from] config::ConfigError),

    #[error("config path is not valid UTF-8: {0}")]
    EncodePath(std::path::PathBuf),

    #[error("{0}")]
    Validation(String),
}
