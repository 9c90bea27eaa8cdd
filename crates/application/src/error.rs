//! Application error types

use std::path::PathBuf;

use thiserror::Error;

use crate::ports::{SourceLoadError, WriteError};

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// An input document could not be loaded.
    #[error("cannot load {}: {source}", path.display())]
    Load {
        /// The input path.
        path: PathBuf,
        /// What went wrong.
        source: SourceLoadError,
    },

    /// The output collection could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        /// The requested output path.
        path: PathBuf,
        /// What went wrong.
        source: WriteError,
    },
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
