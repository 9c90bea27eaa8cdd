//! Variable extraction
//!
//! Discovery and resolution are two separate passes: first every placeholder
//! name used anywhere in the document is collected, then each name is
//! resolved exactly once against the environment table. The result does not
//! depend on the order requests are visited in.

use std::collections::BTreeSet;

use postie_domain::SourceDocument;
use postie_domain::source::HttpieRequest;

use super::environment_table::EnvironmentTable;
use super::parser::parse_variables;
use super::table::VariableTable;
use crate::config::ConversionOptions;

/// Placeholder names used by one request, in order of appearance.
///
/// Scans the URL, every header value (enabled or not) and the body text when
/// it is non-empty.
#[must_use]
pub fn request_variable_names(request: &HttpieRequest) -> Vec<String> {
    let mut sources: Vec<&str> = Vec::with_capacity(request.headers.len() + 2);
    sources.push(&request.url);
    sources.extend(request.headers.iter().map(|h| h.value.as_str()));
    if !request.body.text.value.is_empty() {
        sources.push(&request.body.text.value);
    }

    sources
        .into_iter()
        .flat_map(parse_variables)
        .map(str::to_string)
        .collect()
}

/// Every placeholder name used by any request of the document.
#[must_use]
pub fn discover_variable_names(document: &SourceDocument) -> BTreeSet<String> {
    document
        .all_requests()
        .into_iter()
        .flat_map(request_variable_names)
        .collect()
}

/// Builds the variable table of a single document.
///
/// Names found in requests take their value from the environment table and
/// fall back to an empty string. With
/// [`ConversionOptions::include_environment_variables`] set, environment
/// variables nobody references are emitted as well.
#[must_use]
pub fn extract_variables(document: &SourceDocument, options: &ConversionOptions) -> VariableTable {
    let environment = EnvironmentTable::from_environments(document.environments());
    let names = discover_variable_names(document);

    let mut table = VariableTable::new();
    if options.include_environment_variables {
        for (name, value) in environment.iter() {
            table.insert_if_absent(name, value);
        }
    }

    let mut unresolved = 0usize;
    for name in names {
        let value = environment.get(&name).unwrap_or_else(|| {
            unresolved += 1;
            ""
        });
        table.insert_if_absent(name, value);
    }

    tracing::debug!(
        document = document.name(),
        environment = environment.seeded_from().unwrap_or("-"),
        variables = table.len(),
        unresolved,
        "extracted variables"
    );

    table
}
