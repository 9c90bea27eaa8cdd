//! Domain error types

use thiserror::Error;

/// Domain-level errors raised while interpreting a source document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The JSON value matches neither the workspace nor the legacy collection shape.
    #[error("unknown source format: {0}")]
    UnknownSourceFormat(String),

    /// The shape was recognised but its fields could not be decoded.
    #[error("invalid source document: {0}")]
    InvalidSource(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
