//! Default pipeline stages.
//!
//! 1. **RenderStage** - Run the markup renderer and read the fragment back
//! 2. **TemplateStage** - Bind the fragment into the layout
//! 3. **WriteStage** - Overwrite the output page with the final HTML

mod render;
mod template;
mod write;

pub use render::RenderStage;
pub use template::TemplateStage;
pub use write::WriteStage;
