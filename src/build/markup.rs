//! Markup renderers: turn a source document into an HTML fragment file.
//!
//! The generator treats Markdown conversion as a collaborator. By default
//! that is an external program (`Markdown.pl`), run with an argument vector
//! and its stdout captured into the destination file. A pulldown-cmark
//! renderer is available for machines without the external tool.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use pulldown_cmark::{Options, Parser, html};

use crate::config::{Config, MarkdownConfig, RendererKind};

#[derive(thiserror::Error, Debug)]
pub enum MarkupError {
    #[error("renderer command is empty")]
    EmptyCommand,

    #[error("failed to start renderer '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("renderer '{program}' failed on {} ({status}): {stderr}", path.display())]
    Failed {
        program: String,
        path: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid markdown extension: {0}")]
    InvalidExtension(String),
}

/// Something that renders a source document into an HTML fragment.
///
/// Implementations write the fragment to `dest`, creating or truncating it.
pub trait MarkupRenderer: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn render(&self, source: &Path, dest: &Path) -> Result<(), MarkupError>;
}

/// Build the renderer selected by the config.
pub fn renderer_from_config(config: &Config) -> Result<Box<dyn MarkupRenderer>, MarkupError> {
    Ok(match config.renderer.kind {
        RendererKind::Command => Box::new(CommandRenderer::new(config.renderer.command.clone())?),
        RendererKind::Builtin => Box::new(BuiltinRenderer::new(&config.markdown)?),
    })
}

// =============================================================================
// External command
// =============================================================================

/// Runs an external program: `argv[0] argv[1..] <source> > <dest>`.
///
/// No shell is involved, so paths are passed through untouched.
#[derive(Debug, Clone)]
pub struct CommandRenderer {
    argv: Vec<String>,
}

impl CommandRenderer {
    pub fn new(argv: Vec<String>) -> Result<Self, MarkupError> {
        if argv.is_empty() {
            return Err(MarkupError::EmptyCommand);
        }
        Ok(Self { argv })
    }

    pub fn program(&self) -> &str {
        &self.argv[0]
    }
}

impl MarkupRenderer for CommandRenderer {
    fn name(&self) -> &'static str {
        "command"
    }

    fn render(&self, source: &Path, dest: &Path) -> Result<(), MarkupError> {
        let program = self.program();

        let stdout = File::create(dest).map_err(|e| MarkupError::Write {
            path: dest.to_path_buf(),
            source: e,
        })?;

        let output = Command::new(program)
            .args(&self.argv[1..])
            .arg(source)
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| MarkupError::Spawn {
                program: program.to_string(),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MarkupError::Failed {
                program: program.to_string(),
                path: source.to_path_buf(),
                status: output.status,
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(())
    }
}

// =============================================================================
// pulldown-cmark
// =============================================================================

/// Renders Markdown in-process with pulldown-cmark.
#[derive(Debug, Clone)]
pub struct BuiltinRenderer {
    options: Options,
}

impl BuiltinRenderer {
    pub fn new(markdown_config: &MarkdownConfig) -> Result<Self, MarkupError> {
        let mut options = Options::empty();
        for extension in &markdown_config.extensions {
            match extension.as_str() {
                "definition_lists" => options.insert(Options::ENABLE_DEFINITION_LIST),
                "footnotes" => options.insert(Options::ENABLE_FOOTNOTES),
                "gfm" => options.insert(Options::ENABLE_GFM),
                "heading_attributes" => options.insert(Options::ENABLE_HEADING_ATTRIBUTES),
                "smart_punctuation" => options.insert(Options::ENABLE_SMART_PUNCTUATION),
                "strikethrough" => options.insert(Options::ENABLE_STRIKETHROUGH),
                "tables" => options.insert(Options::ENABLE_TABLES),
                "tasklists" => options.insert(Options::ENABLE_TASKLISTS),
                other => return Err(MarkupError::InvalidExtension(other.to_string())),
            }
        }
        Ok(Self { options })
    }

    /// Render a Markdown string to an HTML fragment.
    pub fn render_str(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    }
}

impl MarkupRenderer for BuiltinRenderer {
    fn name(&self) -> &'static str {
        "builtin"
    }

    fn render(&self, source: &Path, dest: &Path) -> Result<(), MarkupError> {
        let markdown = std::fs::read_to_string(source).map_err(|e| MarkupError::Read {
            path: source.to_path_buf(),
            source: e,
        })?;

        std::fs::write(dest, self.render_str(&markdown)).map_err(|e| MarkupError::Write {
            path: dest.to_path_buf(),
            source: e,
        })
    }
}
