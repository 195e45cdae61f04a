use std::path::{Path, PathBuf};

use crate::build::resolve;

pub mod build;
pub mod clean;
pub mod init;
pub mod letters;

/// The directory a command operates on: `dir` resolved against the current
/// directory, or the current directory itself.
pub(crate) fn working_dir(dir: Option<&Path>) -> std::io::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(match dir {
        Some(dir) => resolve(&cwd, dir),
        None => cwd,
    })
}
