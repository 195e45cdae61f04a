//! Document types for pipeline processing.

use std::path::Path;

use crate::build::document::Document;

/// A document being processed through the pipeline.
///
/// State evolves through the stages:
///
/// 1. Initially: `content` is empty, `output_html` is `None`
/// 2. After render: `content` = HTML fragment read back from the output path
/// 3. After template: `output_html` = final page HTML
#[derive(Debug)]
pub struct ProcessingDocument {
    /// The discovered document (source and output paths)
    pub doc: Document,

    /// The rendered HTML fragment.
    pub content: String,

    /// Final HTML output after template rendering.
    pub output_html: Option<String>,
}

impl ProcessingDocument {
    pub fn new(doc: Document) -> Self {
        Self {
            doc,
            content: String::new(),
            output_html: None,
        }
    }

    pub fn source_path(&self) -> &Path {
        &self.doc.source_path
    }

    pub fn output_path(&self) -> &Path {
        &self.doc.output_path
    }
}
