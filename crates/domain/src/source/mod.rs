//! HTTPie source schema
//!
//! Types describing the documents HTTPie exports, in both the current
//! workspace format and the older collection format.

mod document;
mod environment;
mod nullable;
mod request;
mod workspace;

pub use document::{SourceDocument, SourceFormat};
pub use environment::{HttpieEnvironment, HttpieEnvironmentVariable};
pub use request::{
    AuthKind, BodyKind, HttpieAuth, HttpieBody, HttpieCredentials, HttpieFile, HttpieForm,
    HttpieGraphql, HttpieHeader, HttpieParam, HttpieRequest, HttpieText,
};
pub use workspace::{
    HttpieCollection, HttpieEntry, HttpieIcon, HttpieMeta, HttpieWorkspace, count_requests,
};
