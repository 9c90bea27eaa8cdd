//! Convert document use case

use std::path::{Path, PathBuf};

use crate::assembler::DocumentAssembler;
use crate::config::ConversionOptions;
use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::{CollectionWriter, SourceLoader};
use crate::report::ConversionReport;

/// Result of a successful conversion or merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    /// Where the collection was written; differs from the requested path
    /// when that one was taken.
    pub output_path: PathBuf,
    /// What was converted.
    pub report: ConversionReport,
}

/// Converts one HTTPie export into one Postman collection file.
pub struct ConvertDocument<L, W> {
    loader: L,
    writer: W,
    assembler: DocumentAssembler,
}

impl<L: SourceLoader, W: CollectionWriter> ConvertDocument<L, W> {
    /// Creates a new `ConvertDocument` use case.
    #[must_use]
    pub const fn new(loader: L, writer: W, options: ConversionOptions) -> Self {
        Self {
            loader,
            writer,
            assembler: DocumentAssembler::new(options),
        }
    }

    /// Executes the use case.
    ///
    /// # Errors
    /// Returns [`ApplicationError::Load`] if the input cannot be loaded, in
    /// which case nothing is written, and [`ApplicationError::Write`] if the
    /// output cannot be written.
    pub fn execute(&self, input: &Path, output: &Path) -> ApplicationResult<ConversionOutcome> {
        let source = self
            .loader
            .load(input)
            .map_err(|source| ApplicationError::Load {
                path: input.to_path_buf(),
                source,
            })?;

        let conversion = self.assembler.convert(&source.document);

        let output_path = self
            .writer
            .write(output, &conversion.collection)
            .map_err(|source| ApplicationError::Write {
                path: output.to_path_buf(),
                source,
            })?;

        tracing::info!(
            input = %input.display(),
            output = %output_path.display(),
            summary = %conversion.report,
            "conversion complete"
        );

        Ok(ConversionOutcome {
            output_path,
            report: conversion.report,
        })
    }
}
