//! Document assembler
//!
//! Builds a Postman collection from one or more source documents. Each
//! document becomes one top-level folder; nested collections become
//! sub-folders down to [`ConversionOptions::nesting_depth`] levels and are
//! flattened into their deepest kept ancestor below that.

use std::path::Path;

use postie_domain::source::{HttpieCollection, HttpieRequest};
use postie_domain::target::{PostmanFolder, PostmanItem};
use postie_domain::{PostmanCollection, SourceDocument, SourceFormat};

use crate::config::ConversionOptions;
use crate::ports::LoadedSource;
use crate::report::ConversionReport;
use crate::translate::convert_request;
use crate::variables::{VariableTable, extract_variables};

/// Name of a merged collection.
pub const MERGED_NAME: &str = "Merged HTTPie Collections";
/// Description of a merged collection.
pub const MERGED_DESCRIPTION: &str = "Merged from multiple HTTPie collections";

const UNTITLED: &str = "Untitled";

/// An assembled collection and its report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The collection to serialize.
    pub collection: PostmanCollection,
    /// What happened along the way.
    pub report: ConversionReport,
}

/// Assembles Postman collections.
#[derive(Debug, Clone, Default)]
pub struct DocumentAssembler {
    options: ConversionOptions,
}

impl DocumentAssembler {
    /// Creates an assembler with the given options.
    #[must_use]
    pub const fn new(options: ConversionOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    #[must_use]
    pub const fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Converts a single document.
    #[must_use]
    pub fn convert(&self, document: &SourceDocument) -> Conversion {
        let description = match document.format() {
            SourceFormat::Workspace => "Converted from HTTPie workspace",
            SourceFormat::LegacyCollection | SourceFormat::Unknown => {
                "Converted from HTTPie collection"
            }
        };
        let mut collection = PostmanCollection::new(document.name(), description);
        let mut report = ConversionReport::default();

        self.append_document(&mut collection, document, document.name(), &mut report);
        collection.variable = extract_variables(document, &self.options).to_postman_variables();

        Self::finish(collection, report)
    }

    /// Merges several loaded documents into one collection, in order.
    ///
    /// Each document gets a folder named after its entry, or after the file
    /// stem when the entry is unnamed. A variable defined by more than one
    /// document keeps the value of the first.
    #[must_use]
    pub fn merge(&self, sources: &[LoadedSource]) -> Conversion {
        let mut collection = PostmanCollection::new(MERGED_NAME, MERGED_DESCRIPTION);
        let mut report = ConversionReport::default();
        let mut variables = VariableTable::new();

        for source in sources {
            let name = folder_name(&source.document, &source.path);
            self.append_document(&mut collection, &source.document, &name, &mut report);
            variables.merge_first_wins(extract_variables(&source.document, &self.options));
        }
        collection.variable = variables.to_postman_variables();

        Self::finish(collection, report)
    }

    fn append_document(
        &self,
        collection: &mut PostmanCollection,
        document: &SourceDocument,
        folder_name: &str,
        report: &mut ConversionReport,
    ) {
        report.requests_seen += document.request_count();

        let mut folder = PostmanFolder::new(folder_name);
        self.fill_folder(
            &mut folder,
            document.requests(),
            document.collections(),
            0,
            folder_name,
            report,
        );

        tracing::info!(
            document = folder_name,
            format = %document.format(),
            requests = document.request_count(),
            "assembled document"
        );

        if !folder.item.is_empty() {
            collection.item.push(PostmanItem::Folder(folder));
        }
    }

    fn fill_folder(
        &self,
        folder: &mut PostmanFolder,
        requests: &[HttpieRequest],
        collections: &[HttpieCollection],
        level: usize,
        path: &str,
        report: &mut ConversionReport,
    ) {
        for request in requests {
            let converted = convert_request(request, path);
            report.warnings.extend(converted.warnings);
            folder.item.push(PostmanItem::Request(converted.item));
        }

        for child in collections {
            if level < self.options.nesting_depth {
                let child_path = format!("{path}/{}", child.name);
                let mut sub = PostmanFolder::new(&child.name);
                self.fill_folder(
                    &mut sub,
                    &child.requests,
                    &child.collections,
                    level + 1,
                    &child_path,
                    report,
                );
                if !sub.item.is_empty() {
                    folder.item.push(PostmanItem::Folder(sub));
                }
            } else {
                self.fill_folder(
                    folder,
                    &child.requests,
                    &child.collections,
                    level + 1,
                    path,
                    report,
                );
            }
        }
    }

    fn finish(collection: PostmanCollection, mut report: ConversionReport) -> Conversion {
        report.requests_converted = collection.request_count();
        report.folders_emitted = collection.folder_count();
        report.variables_emitted = collection.variable.len();

        if report.has_mismatch() {
            tracing::warn!(
                seen = report.requests_seen,
                converted = report.requests_converted,
                "request count mismatch"
            );
        }

        Conversion { collection, report }
    }
}

fn folder_name(document: &SourceDocument, path: &Path) -> String {
    if !document.name().is_empty() {
        return document.name().to_string();
    }
    path.file_stem()
        .map_or_else(|| UNTITLED.to_string(), |s| s.to_string_lossy().into_owned())
}
