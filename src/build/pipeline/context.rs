//! Pipeline context for sharing state across stages.

use std::path::Path;

use crate::build::markup::MarkupRenderer;

/// Shared context for pipeline stages.
///
/// Holds only what stages read; there is no state carried from one
/// document to the next.
pub struct PipelineContext<'a> {
    /// Renders source documents into fragment files
    pub renderer: &'a dyn MarkupRenderer,

    /// Layout template, loaded fresh for every document
    pub template_path: &'a Path,
}

impl<'a> PipelineContext<'a> {
    pub fn new(renderer: &'a dyn MarkupRenderer, template_path: &'a Path) -> Self {
        Self {
            renderer,
            template_path,
        }
    }
}
