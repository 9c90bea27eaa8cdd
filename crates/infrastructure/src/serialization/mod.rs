//! JSON serialization for converter output.
//!
//! Output is stable from run to run:
//! - fields in declaration order, variables in key order
//! - 2-space indentation
//! - trailing newline
//! - UTF-8 without BOM

mod json;

pub use json::*;
