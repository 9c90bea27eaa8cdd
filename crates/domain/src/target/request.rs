//! Postman request type definitions

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

/// Postman Request definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanRequest {
    pub method: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub header: Vec<PostmanHeader>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<PostmanBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<PostmanAuth>,
    pub url: PostmanUrl,
}

/// Request header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanHeader {
    pub key: String,
    pub value: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub header_type: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
}

impl PostmanHeader {
    /// Creates an enabled text header.
    #[must_use]
    pub fn text(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            header_type: "text".to_string(),
            disabled: false,
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

/// Request body; only raw mode is produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanBody {
    pub mode: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub raw: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<PostmanBodyOptions>,
}

impl PostmanBody {
    /// Creates a raw-mode body without a language hint.
    #[must_use]
    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            mode: "raw".to_string(),
            raw: content.into(),
            options: None,
        }
    }

    /// Returns the syntax-highlighting language hint, if any.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.options
            .as_ref()
            .map(|o| o.raw.language.as_str())
    }
}

/// Body options (raw language)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanBodyOptions {
    pub raw: PostmanRawOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanRawOptions {
    pub language: String,
}

/// Authentication configuration
///
/// Postman keys the parameter list by the auth type, so exactly one of the
/// lists is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanAuth {
    #[serde(rename = "type")]
    pub auth_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bearer: Vec<PostmanAuthParam>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub basic: Vec<PostmanAuthParam>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub apikey: Vec<PostmanAuthParam>,
}

impl PostmanAuth {
    /// Creates an auth block of `auth_type` with no parameters.
    #[must_use]
    pub fn new(auth_type: impl Into<String>) -> Self {
        Self {
            auth_type: auth_type.into(),
            bearer: Vec::new(),
            basic: Vec::new(),
            apikey: Vec::new(),
        }
    }
}

/// Auth parameter (key-value pair)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanAuthParam {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub param_type: String,
}

impl PostmanAuthParam {
    /// Creates a string-typed parameter.
    #[must_use]
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            param_type: "string".to_string(),
        }
    }
}

/// Structured URL object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanUrl {
    pub raw: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub host: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query: Vec<PostmanQueryParam>,
}

/// Query parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanQueryParam {
    pub key: String,
    pub value: String,
}

impl PostmanQueryParam {
    /// Creates a query parameter.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_enabled_header_omits_disabled_flag() {
        let value = serde_json::to_value(PostmanHeader::text("Accept", "*/*")).unwrap();
        assert_eq!(value, json!({"key": "Accept", "value": "*/*", "type": "text"}));
    }

    #[test]
    fn test_disabled_header_serializes_flag() {
        let mut header = PostmanHeader::text("X-Debug", "1");
        header.disabled = true;
        let value = serde_json::to_value(header).unwrap();
        assert_eq!(value["disabled"], json!(true));
    }

    #[test]
    fn test_auth_serializes_only_its_list() {
        let mut auth = PostmanAuth::new("bearer");
        auth.bearer.push(PostmanAuthParam::string("token", "abc"));
        let value = serde_json::to_value(&auth).unwrap();
        assert_eq!(
            value,
            json!({"type": "bearer", "bearer": [{"key": "token", "value": "abc", "type": "string"}]})
        );
    }

    #[test]
    fn test_url_omits_empty_parts() {
        let url = PostmanUrl {
            raw: "{{host}}/x".to_string(),
            host: vec!["{{host}}".to_string()],
            ..PostmanUrl::default()
        };
        let value = serde_json::to_value(url).unwrap();
        assert_eq!(value, json!({"raw": "{{host}}/x", "host": ["{{host}}"]}));
    }
}
