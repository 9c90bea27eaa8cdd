//! HTTPie Environment Type Definitions

use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;

/// A named set of variable bindings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpieEnvironment {
    /// Environment name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Display color
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
    /// Whether this environment resolves unqualified variables
    #[serde(deserialize_with = "null_as_default")]
    pub is_default: bool,
    /// Whether the environment is kept out of sync
    #[serde(deserialize_with = "null_as_default")]
    pub is_local_only: bool,
    /// Environment variables
    #[serde(deserialize_with = "null_as_default")]
    pub variables: Vec<HttpieEnvironmentVariable>,
}

impl HttpieEnvironment {
    /// Creates an empty, non-default environment.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Marks the environment as the default one.
    #[must_use]
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Adds a variable binding.
    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.push(HttpieEnvironmentVariable {
            name: name.into(),
            value: value.into(),
            is_secret: false,
        });
        self
    }
}

/// HTTPie environment variable
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpieEnvironmentVariable {
    /// Variable name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Variable value
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    /// Whether the value is a secret
    #[serde(deserialize_with = "null_as_default")]
    pub is_secret: bool,
}
