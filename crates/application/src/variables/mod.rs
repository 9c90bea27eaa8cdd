//! Variable extraction and merging
//!
//! Finds `{{variable}}` placeholders in a source document, resolves them
//! against the document's environments and produces the deduplicated
//! `variable` list of the Postman collection.
//!
//! # Usage
//!
//! ```
//! use postie_application::config::ConversionOptions;
//! use postie_application::variables::extract_variables;
//! use postie_domain::SourceDocument;
//! use postie_domain::source::{HttpieEnvironment, HttpieRequest, HttpieWorkspace};
//!
//! let mut workspace = HttpieWorkspace::default();
//! workspace.entry.requests.push(HttpieRequest {
//!     url: "{{base}}/users".to_string(),
//!     ..HttpieRequest::default()
//! });
//! workspace
//!     .environments
//!     .push(HttpieEnvironment::new("Prod").with_variable("base", "https://api.example.com"));
//!
//! let table = extract_variables(&SourceDocument::Workspace(workspace), &ConversionOptions::default());
//! assert_eq!(table.get("base"), Some("https://api.example.com"));
//! ```

mod environment_table;
mod extractor;
mod parser;
mod table;

pub use environment_table::EnvironmentTable;
pub use extractor::{discover_variable_names, extract_variables, request_variable_names};
pub use parser::parse_variables;
pub use table::VariableTable;
