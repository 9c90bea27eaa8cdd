//! Authentication translation
//!
//! HTTPie stores every credential in a `username`/`password` pair whatever
//! the auth type; Postman keys a parameter list by type. Types Postman has no
//! equivalent for are dropped, and the request falls back to whatever
//! headers it carries.

use postie_domain::source::{AuthKind, HttpieAuth};
use postie_domain::target::{PostmanAuth, PostmanAuthParam};

/// Outcome of translating one auth descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthTranslation {
    /// Translated auth block.
    Mapped(PostmanAuth),
    /// No auth configured (`none` or empty type).
    NoAuth,
    /// The type has no Postman counterpart and was dropped.
    Unsupported(String),
}

impl AuthTranslation {
    /// The auth block, if any.
    #[must_use]
    pub fn into_auth(self) -> Option<PostmanAuth> {
        match self {
            Self::Mapped(auth) => Some(auth),
            Self::NoAuth | Self::Unsupported(_) => None,
        }
    }
}

/// Translates an HTTPie auth descriptor.
#[must_use]
pub fn translate_auth(auth: &HttpieAuth) -> AuthTranslation {
    let credentials = &auth.credentials;
    match auth.kind() {
        AuthKind::None => AuthTranslation::NoAuth,
        AuthKind::Bearer => {
            let mut mapped = PostmanAuth::new("bearer");
            mapped
                .bearer
                .push(PostmanAuthParam::string("token", &credentials.password));
            AuthTranslation::Mapped(mapped)
        }
        AuthKind::Basic => {
            let mut mapped = PostmanAuth::new("basic");
            mapped.basic = vec![
                PostmanAuthParam::string("username", &credentials.username),
                PostmanAuthParam::string("password", &credentials.password),
            ];
            AuthTranslation::Mapped(mapped)
        }
        AuthKind::ApiKey => {
            let mut mapped = PostmanAuth::new("apikey");
            mapped.apikey = vec![
                PostmanAuthParam::string("key", &credentials.username),
                PostmanAuthParam::string("value", &credentials.password),
            ];
            AuthTranslation::Mapped(mapped)
        }
        AuthKind::Other => AuthTranslation::Unsupported(auth.auth_type.clone()),
    }
}
