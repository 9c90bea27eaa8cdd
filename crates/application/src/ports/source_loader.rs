//! Source loader port

use std::path::{Path, PathBuf};

use postie_domain::{DomainError, SourceDocument};

/// Errors that can occur while loading a source document.
#[derive(Debug, thiserror::Error)]
pub enum SourceLoadError {
    /// The file does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exceeds the configured size limit.
    #[error("File too large: {size} bytes (limit {limit})")]
    TooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: u64,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes are not JSON.
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// The JSON is not a recognized HTTPie export.
    #[error("Invalid format: {0}")]
    InvalidFormat(#[from] DomainError),
}

/// A decoded source document and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSource {
    /// Path the document was read from.
    pub path: PathBuf,
    /// The decoded document.
    pub document: SourceDocument,
}

impl LoadedSource {
    /// Pairs a document with its path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, document: SourceDocument) -> Self {
        Self {
            path: path.into(),
            document,
        }
    }
}

/// Reads and decodes source documents.
pub trait SourceLoader {
    /// Loads the document at `path`, detecting its format.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not an HTTPie export.
    fn load(&self, path: &Path) -> Result<LoadedSource, SourceLoadError>;
}
