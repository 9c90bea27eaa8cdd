//! Application use cases (conversion orchestration).

mod convert_document;
mod merge_documents;

pub use convert_document::*;
pub use merge_documents::*;
