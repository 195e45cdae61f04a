mod document;
mod generator;
mod layout;
mod markup;
mod paths;
mod pipeline;

pub use document::discover_documents;
pub use generator::Generator;
pub use paths::{resolve, same_path};
