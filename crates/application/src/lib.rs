//! Postie Application - Schema mapping engine
//!
//! Translates HTTPie exports into Postman collections. The pure mapping
//! lives in [`translate`], [`variables`] and [`assembler`]; [`use_cases`]
//! wire it to the [`ports`] the infrastructure layer implements.

pub mod assembler;
pub mod config;
pub mod error;
pub mod ports;
pub mod report;
pub mod translate;
pub mod use_cases;
pub mod variables;

pub use assembler::{Conversion, DocumentAssembler};
pub use config::ConversionOptions;
pub use error::{ApplicationError, ApplicationResult};
pub use report::{ConversionReport, SkippedSource};
