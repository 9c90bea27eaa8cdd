//! Postie Domain - Schema types
//!
//! This crate defines both sides of the conversion: the HTTPie export
//! schema ([`source`]) and the Postman Collection v2.1.0 schema
//! ([`target`]). All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod id;
pub mod source;
pub mod target;
pub mod warning;

pub use error::{DomainError, DomainResult};
pub use id::generate_id;
pub use source::{SourceDocument, SourceFormat};
pub use target::PostmanCollection;
pub use warning::{ConversionWarning, WarningKind, WarningSeverity, WarningStats};
