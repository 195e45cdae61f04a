//! Page template rendering stage.
//!
//! Wraps the rendered fragment in the layout.

use crate::build::layout::{Layout, LayoutContext};
use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that applies the layout to rendered content.
///
/// The layout is read from disk for every document, so edits made to it
/// during a run are picked up by the documents that follow.
///
/// After this stage, `doc.output_html` contains the complete HTML page.
pub struct TemplateStage;

impl Stage for TemplateStage {
    fn name(&self) -> &'static str {
        "template"
    }

    fn process(
        &self,
        docs: &mut [ProcessingDocument],
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        for doc in docs {
            let layout = Layout::load(ctx.template_path)?;
            tracing::debug!(layout = %layout.path().display(), page = %doc.doc.name, "applying layout");

            let html = layout.render(&LayoutContext {
                content: &doc.content,
            })?;

            doc.output_html = Some(html);
        }

        Ok(())
    }
}
