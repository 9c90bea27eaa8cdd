//! HTTPie request type definitions
//!
//! Every field defaults when missing or `null` so partially populated exports
//! still load.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;

/// A single HTTPie request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpieRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub method: String,
    #[serde(deserialize_with = "null_as_default")]
    pub headers: Vec<HttpieHeader>,
    #[serde(deserialize_with = "null_as_default")]
    pub query_params: Vec<HttpieParam>,
    #[serde(deserialize_with = "null_as_default")]
    pub path_params: Vec<HttpieParam>,
    #[serde(deserialize_with = "null_as_default")]
    pub auth: HttpieAuth,
    #[serde(deserialize_with = "null_as_default")]
    pub body: HttpieBody,
}

impl HttpieRequest {
    /// Display name, synthesized as `"<METHOD> <URL>"` when the request is unnamed.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            format!("{} {}", self.method, self.url)
        } else {
            self.name.clone()
        }
    }
}

/// Request header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpieHeader {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub enabled: bool,
}

impl HttpieHeader {
    /// Creates an enabled header.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            enabled: true,
        }
    }

    /// Returns the same header marked disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Query or path parameter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpieParam {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub enabled: bool,
}

/// Authentication descriptor
///
/// HTTPie reuses the `username`/`password` slots for every auth type: a
/// bearer token travels in `password`, an API key name in `username`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpieAuth {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub auth_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub target: String,
    #[serde(deserialize_with = "null_as_default")]
    pub credentials: HttpieCredentials,
}

impl HttpieAuth {
    /// Classifies the free-form `type` tag.
    #[must_use]
    pub fn kind(&self) -> AuthKind {
        match self.auth_type.as_str() {
            "" | "none" => AuthKind::None,
            "bearer" => AuthKind::Bearer,
            "basic" => AuthKind::Basic,
            "apiKey" => AuthKind::ApiKey,
            _ => AuthKind::Other,
        }
    }

    /// Creates an auth descriptor of the given type.
    #[must_use]
    pub fn new(
        auth_type: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            auth_type: auth_type.into(),
            target: String::new(),
            credentials: HttpieCredentials {
                username: username.into(),
                password: password.into(),
            },
        }
    }
}

/// Known HTTPie auth types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    None,
    Bearer,
    Basic,
    ApiKey,
    /// Any type tag Postman cannot express.
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpieCredentials {
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub password: String,
}

/// Request body; `type` selects which of the payload fields is meaningful
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpieBody {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub body_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub file: HttpieFile,
    #[serde(deserialize_with = "null_as_default")]
    pub text: HttpieText,
    #[serde(deserialize_with = "null_as_default")]
    pub form: HttpieForm,
    #[serde(deserialize_with = "null_as_default")]
    pub graphql: HttpieGraphql,
}

impl HttpieBody {
    /// Creates a text body with a content format such as `application/json`.
    #[must_use]
    pub fn text(value: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            body_type: "text".to_string(),
            text: HttpieText {
                value: value.into(),
                format: format.into(),
            },
            ..Self::default()
        }
    }

    /// Classifies the `type` tag.
    #[must_use]
    pub fn kind(&self) -> BodyKind {
        match self.body_type.as_str() {
            "" | "none" => BodyKind::None,
            "text" => BodyKind::Text,
            "form" => BodyKind::Form,
            "file" => BodyKind::File,
            "graphql" => BodyKind::Graphql,
            _ => BodyKind::Other,
        }
    }
}

/// Known HTTPie body types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    None,
    Text,
    Form,
    File,
    Graphql,
    Other,
}

impl std::fmt::Display for BodyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::None => "none",
            Self::Text => "text",
            Self::Form => "form",
            Self::File => "file",
            Self::Graphql => "graphql",
            Self::Other => "unknown",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpieFile {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpieText {
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpieForm {
    #[serde(deserialize_with = "null_as_default")]
    pub is_multipart: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub fields: Vec<HttpieParam>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpieGraphql {
    #[serde(deserialize_with = "null_as_default")]
    pub query: String,
    #[serde(deserialize_with = "null_as_default")]
    pub variables: String,
}
