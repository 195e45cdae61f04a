use std::path::{Path, PathBuf};

use serde::Serialize;
use tera::{Context, Tera};

/// Name the layout is registered under inside Tera.
const LAYOUT_TEMPLATE_NAME: &str = "layout";

#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    #[error("failed to read layout {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("template error in {}: {source}", path.display())]
    Template {
        path: PathBuf,
        source: tera::Error,
    },
}

/// The values a layout may reference. Nothing else is visible to it.
#[derive(Debug, Serialize)]
pub struct LayoutContext<'a> {
    /// The rendered HTML fragment, available as `{{ content }}`
    pub content: &'a str,
}

/// The page layout, wrapping Tera.
///
/// Autoescaping is off: the fragment is already HTML and must land in the
/// page verbatim.
pub struct Layout {
    tera: Tera,
    path: PathBuf,
}

impl Layout {
    /// Read and parse the layout at `path`.
    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        let source = std::fs::read_to_string(path).map_err(|e| LayoutError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_source(path, &source)
    }

    /// Parse layout text; `path` is only used in error messages.
    pub fn from_source(path: &Path, source: &str) -> Result<Self, LayoutError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(LAYOUT_TEMPLATE_NAME, source)
            .map_err(|e| LayoutError::Template {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(Self {
            tera,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render the layout with the given context.
    pub fn render(&self, context: &LayoutContext) -> Result<String, LayoutError> {
        let template_error = |e: tera::Error| LayoutError::Template {
            path: self.path.clone(),
            source: e,
        };

        let tera_context = Context::from_serialize(context).map_err(template_error)?;
        self.tera
            .render(LAYOUT_TEMPLATE_NAME, &tera_context)
            .map_err(template_error)
    }
}
