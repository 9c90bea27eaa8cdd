//! HTTPie workspace and collection type definitions

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

use super::environment::HttpieEnvironment;
use super::nullable::null_as_default;
use super::request::{HttpieAuth, HttpieRequest};

/// Root structure of a current-format HTTPie workspace export
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpieWorkspace {
    #[serde(deserialize_with = "null_as_default")]
    pub meta: HttpieMeta,
    #[serde(deserialize_with = "null_as_default")]
    pub entry: HttpieEntry,
    #[serde(deserialize_with = "null_as_default")]
    pub environments: Vec<HttpieEnvironment>,
}

/// Export metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpieMeta {
    #[serde(deserialize_with = "null_as_default")]
    pub format: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub schema: String,
    #[serde(deserialize_with = "null_as_default")]
    pub docs: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
}

/// Workspace entry point holding direct requests and collections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpieEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: HttpieIcon,
    #[serde(deserialize_with = "null_as_default")]
    pub auth: HttpieAuth,
    #[serde(deserialize_with = "null_as_default")]
    pub requests: Vec<HttpieRequest>,
    #[serde(deserialize_with = "null_as_default")]
    pub collections: Vec<HttpieCollection>,
}

/// A named group of requests
///
/// Also the top-level shape of the legacy export format. HTTPie exports
/// nest collections one level deep; `collections` allows deeper trees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpieCollection {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: HttpieIcon,
    #[serde(deserialize_with = "null_as_default")]
    pub auth: HttpieAuth,
    #[serde(deserialize_with = "null_as_default")]
    pub requests: Vec<HttpieRequest>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub collections: Vec<Self>,
}

impl HttpieCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a request.
    #[must_use]
    pub fn with_request(mut self, request: HttpieRequest) -> Self {
        self.requests.push(request);
        self
    }

    /// Adds a nested collection.
    #[must_use]
    pub fn with_collection(mut self, collection: Self) -> Self {
        self.collections.push(collection);
        self
    }

    /// Counts requests in this collection and every nested one.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.len() + count_requests(&self.collections)
    }

    /// Appends this collection's requests, then every nested collection's, depth first.
    pub fn collect_requests<'a>(&'a self, out: &mut Vec<&'a HttpieRequest>) {
        out.extend(self.requests.iter());
        for child in &self.collections {
            child.collect_requests(out);
        }
    }
}

/// Counts requests across a list of collections, recursively.
#[must_use]
pub fn count_requests(collections: &[HttpieCollection]) -> usize {
    collections.iter().map(HttpieCollection::request_count).sum()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpieIcon {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_workspace() {
        let json = r#"{
            "meta": {"format": "httpie", "version": "1.0.0", "contentType": "collection"},
            "entry": {
                "name": "Shop API",
                "icon": {"name": "default", "color": "gray"},
                "auth": {"type": "none"},
                "requests": [{"name": "Ping", "url": "https://shop.example.com/ping", "method": "GET"}],
                "collections": [
                    {"name": "Orders", "requests": [
                        {"name": "List", "url": "https://shop.example.com/orders", "method": "GET"}
                    ]}
                ]
            },
            "environments": [{"name": "Prod", "isDefault": true, "variables": []}]
        }"#;

        let workspace: HttpieWorkspace = serde_json::from_str(json).unwrap();
        assert_eq!(workspace.meta.content_type, "collection");
        assert_eq!(workspace.entry.name, "Shop API");
        assert_eq!(workspace.entry.requests.len(), 1);
        assert_eq!(workspace.entry.collections[0].name, "Orders");
        assert_eq!(workspace.environments.len(), 1);
    }

    #[test]
    fn test_nested_request_count() {
        let tree = HttpieCollection::new("root")
            .with_request(HttpieRequest::default())
            .with_collection(
                HttpieCollection::new("child")
                    .with_request(HttpieRequest::default())
                    .with_collection(
                        HttpieCollection::new("grandchild").with_request(HttpieRequest::default()),
                    ),
            );
        assert_eq!(tree.request_count(), 3);
        assert_eq!(count_requests(&tree.collections), 2);

        let mut all = Vec::new();
        tree.collect_requests(&mut all);
        assert_eq!(all.len(), 3);
    }
}
