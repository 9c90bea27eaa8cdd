//! Collection writer port

use std::path::{Path, PathBuf};

use postie_domain::PostmanCollection;

/// Errors that can occur while writing a collection.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The collection could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Persists a Postman collection.
pub trait CollectionWriter {
    /// Writes `collection` at `path`, or at a free sibling path when `path`
    /// is taken.
    ///
    /// Returns the path actually written.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    fn write(&self, path: &Path, collection: &PostmanCollection) -> Result<PathBuf, WriteError>;
}
