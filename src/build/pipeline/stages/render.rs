//! Markup rendering stage.
//!
//! The renderer writes its fragment straight to the output path; the
//! fragment is then read back into the document.

use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that renders each source document into an HTML fragment.
///
/// After this stage, the output page holds the bare fragment and
/// `doc.content` holds a copy of it.
pub struct RenderStage;

impl Stage for RenderStage {
    fn name(&self) -> &'static str {
        "render"
    }

    fn process(
        &self,
        docs: &mut [ProcessingDocument],
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        for doc in docs {
            tracing::debug!(
                source = %doc.source_path().display(),
                renderer = ctx.renderer.name(),
                "rendering"
            );
            ctx.renderer.render(doc.source_path(), doc.output_path())?;

            doc.content = std::fs::read_to_string(doc.output_path())
                .map_err(|e| PipelineError::io(doc.output_path(), e))?;
        }

        Ok(())
    }
}
