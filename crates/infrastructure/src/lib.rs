//! Postie Infrastructure - Filesystem adapters
//!
//! This crate provides the concrete implementations of the ports defined
//! in the application layer.

pub mod loader;
pub mod serialization;
pub mod writer;

pub use loader::{FileSourceLoader, LoaderConfig};
pub use serialization::{
    SerializationError, from_json_bytes, to_json_stable, to_json_stable_bytes,
};
pub use writer::{FileCollectionWriter, unique_output_path};
