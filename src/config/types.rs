//! Configuration type definitions.
//!
//! These types are pure data - no I/O or complex logic.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Settings for a page generation run, read from `mdwrap.yaml`.
///
/// Every field has a default, so an empty (or missing) config file
/// reproduces the conventional layout: `*.markdown` sources rendered with
/// `Markdown.pl` into `*.html`, wrapped in `layout.html`.
///
/// ```yaml
/// source_extension: markdown
/// output_extension: html
/// template: layout.html
/// renderer:
///   kind: command
///   command: ["Markdown.pl"]
/// markdown:
///   extensions: []
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Extension of source documents, without the leading dot
    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    /// Extension substituted for the source extension on output pages
    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    /// Layout template, relative to the working directory
    #[serde(default = "default_template")]
    pub template: PathBuf,

    #[serde(default)]
    pub renderer: RendererConfig,

    /// Only consulted by the builtin renderer
    #[serde(default)]
    pub markdown: MarkdownConfig,
}

fn default_source_extension() -> String {
    "markdown".to_string()
}

fn default_output_extension() -> String {
    "html".to_string()
}

fn default_template() -> PathBuf {
    PathBuf::from("layout.html")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_extension: default_source_extension(),
            output_extension: default_output_extension(),
            template: default_template(),
            renderer: RendererConfig::default(),
            markdown: MarkdownConfig::default(),
        }
    }
}

impl Config {
    /// Suffix matched against directory entry names, e.g. `.markdown`.
    pub fn source_suffix(&self) -> String {
        format!(".{}", self.source_extension)
    }

    /// Suffix substituted into output page names, e.g. `.html`.
    pub fn output_suffix(&self) -> String {
        format!(".{}", self.output_extension)
    }
}

/// Which markup renderer turns source documents into HTML fragments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// Run an external program
    #[default]
    Command,
    /// Render in-process with pulldown-cmark
    Builtin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RendererConfig {
    #[serde(default)]
    pub kind: RendererKind,

    /// Program and leading arguments. The source path is appended as the
    /// final argument; the program's stdout becomes the rendered fragment.
    #[serde(default = "default_command")]
    pub command: Vec<String>,
}

fn default_command() -> Vec<String> {
    vec!["Markdown.pl".to_string()]
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            kind: RendererKind::default(),
            command: default_command(),
        }
    }
}

/// Markdown processing configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkdownConfig {
    /// pulldown-cmark extensions to enable (e.g. `tables`, `footnotes`)
    #[serde(default)]
    pub extensions: Vec<String>,
}
