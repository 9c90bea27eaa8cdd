//! Field translators
//!
//! Each submodule maps one part of an HTTPie request onto its Postman
//! counterpart; [`convert_request`] composes them.

mod auth;
mod body;
mod headers;
mod request;
mod url;

pub use auth::{AuthTranslation, translate_auth};
pub use body::{BodyTranslation, translate_body};
pub use headers::{has_header, translate_headers};
pub use request::{RequestConversion, convert_request};
pub use url::{UrlDecomposition, decompose_url};
