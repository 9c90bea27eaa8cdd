//! Merge documents use case

use std::path::{Path, PathBuf};

use crate::assembler::DocumentAssembler;
use crate::config::ConversionOptions;
use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::{CollectionWriter, SourceLoader};
use crate::use_cases::ConversionOutcome;

/// Merges several HTTPie exports into one Postman collection file.
///
/// Inputs that fail to load are skipped and listed in the report; only a
/// failed write aborts the merge.
pub struct MergeDocuments<L, W> {
    loader: L,
    writer: W,
    assembler: DocumentAssembler,
}

impl<L: SourceLoader, W: CollectionWriter> MergeDocuments<L, W> {
    /// Creates a new `MergeDocuments` use case.
    #[must_use]
    pub const fn new(loader: L, writer: W, options: ConversionOptions) -> Self {
        Self {
            loader,
            writer,
            assembler: DocumentAssembler::new(options),
        }
    }

    /// Executes the use case over `inputs`, in order.
    ///
    /// # Errors
    /// Returns [`ApplicationError::Write`] if the output cannot be written.
    pub fn execute(&self, output: &Path, inputs: &[PathBuf]) -> ApplicationResult<ConversionOutcome> {
        let mut sources = Vec::with_capacity(inputs.len());
        let mut skipped = Vec::new();

        for input in inputs {
            match self.loader.load(input) {
                Ok(source) => sources.push(source),
                Err(e) => {
                    tracing::warn!(input = %input.display(), error = %e, "skipping input");
                    skipped.push((input.clone(), e.to_string()));
                }
            }
        }

        let mut conversion = self.assembler.merge(&sources);
        for (path, reason) in skipped {
            conversion.report.skip(path, reason);
        }

        let output_path = self
            .writer
            .write(output, &conversion.collection)
            .map_err(|source| ApplicationError::Write {
                path: output.to_path_buf(),
                source,
            })?;

        tracing::info!(
            inputs = inputs.len(),
            merged = sources.len(),
            output = %output_path.display(),
            summary = %conversion.report,
            "merge complete"
        );

        Ok(ConversionOutcome {
            output_path,
            report: conversion.report,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::use_cases::testing::{MockLoader, MockWriter};
    use postie_domain::SourceDocument;
    use postie_domain::source::{HttpieCollection, HttpieRequest};
    use pretty_assertions::assert_eq;

    fn legacy(name: &str, requests: usize) -> SourceDocument {
        let mut collection = HttpieCollection::new(name);
        for i in 0..requests {
            collection.requests.push(HttpieRequest {
                name: format!("{name} {i}"),
                method: "GET".to_string(),
                url: format!("https://api.example.com/{i}"),
                ..HttpieRequest::default()
            });
        }
        SourceDocument::LegacyCollection(collection)
    }

    #[test]
    fn test_merge_skips_unloadable_inputs() {
        let loader = MockLoader::default()
            .with("a.json", legacy("A", 2))
            .with("c.json", legacy("C", 1));
        let use_case = MergeDocuments::new(loader, MockWriter::default(), ConversionOptions::default());

        let inputs = vec![
            PathBuf::from("a.json"),
            PathBuf::from("broken.json"),
            PathBuf::from("c.json"),
        ];
        let outcome = use_case
            .execute(Path::new("merged.json"), &inputs)
            .expect("Should succeed");

        assert_eq!(outcome.report.requests_seen, 3);
        assert_eq!(outcome.report.requests_converted, 3);
        assert_eq!(outcome.report.skipped_sources.len(), 1);
        assert_eq!(outcome.report.skipped_sources[0].path, PathBuf::from("broken.json"));

        let written = use_case.writer.written.lock().unwrap();
        let folders: Vec<_> = written[0].1.item.iter().map(|i| i.name().to_string()).collect();
        assert_eq!(folders, vec!["A", "C"]);
    }

    #[test]
    fn test_merge_write_failure_is_fatal() {
        let loader = MockLoader::default().with("a.json", legacy("A", 1));
        let use_case = MergeDocuments::new(loader, MockWriter::failing(), ConversionOptions::default());

        let result = use_case.execute(Path::new("merged.json"), &[PathBuf::from("a.json")]);
        assert!(matches!(result, Err(ApplicationError::Write { .. })));
    }
}
