//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the conversion engine and the
//! filesystem. Each port is a trait implemented by adapters in the
//! infrastructure layer.

mod collection_writer;
mod source_loader;

pub use collection_writer::{CollectionWriter, WriteError};
pub use source_loader::{LoadedSource, SourceLoadError, SourceLoader};
