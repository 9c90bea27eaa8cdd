//! Postman Collection v2.1 type definitions

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

use super::request::PostmanRequest;
use crate::id::generate_id;

/// Schema URI written into every collection's `info` block.
pub const POSTMAN_SCHEMA_V2_1: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// Root structure for Postman Collection v2.1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanCollection {
    pub info: PostmanInfo,
    #[serde(default)]
    pub item: Vec<PostmanItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variable: Vec<PostmanVariable>,
}

impl PostmanCollection {
    /// Creates an empty collection with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            info: PostmanInfo {
                postman_id: generate_id(),
                name: name.into(),
                description: description.into(),
                schema: POSTMAN_SCHEMA_V2_1.to_string(),
            },
            item: Vec::new(),
            variable: Vec::new(),
        }
    }

    /// Counts request items at any depth.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.item.iter().map(PostmanItem::request_count).sum()
    }

    /// Counts folders at any depth.
    #[must_use]
    pub fn folder_count(&self) -> usize {
        self.item.iter().map(PostmanItem::folder_count).sum()
    }

    /// Looks up a variable by key.
    #[must_use]
    pub fn find_variable(&self, key: &str) -> Option<&PostmanVariable> {
        self.variable.iter().find(|v| v.key == key)
    }
}

/// Collection metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanInfo {
    #[serde(rename = "_postman_id")]
    pub postman_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub schema: String,
}

/// An item is either a folder (containing more items) or a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostmanItem {
    Folder(PostmanFolder),
    Request(PostmanRequestItem),
}

impl PostmanItem {
    /// Item name
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Folder(f) => &f.name,
            Self::Request(r) => &r.name,
        }
    }

    /// Returns true if this item is a folder
    #[must_use]
    pub const fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }

    /// Returns the request if this item is one.
    #[must_use]
    pub const fn as_request(&self) -> Option<&PostmanRequestItem> {
        match self {
            Self::Request(r) => Some(r),
            Self::Folder(_) => None,
        }
    }

    /// Returns the folder if this item is one.
    #[must_use]
    pub const fn as_folder(&self) -> Option<&PostmanFolder> {
        match self {
            Self::Folder(f) => Some(f),
            Self::Request(_) => None,
        }
    }

    fn request_count(&self) -> usize {
        match self {
            Self::Request(_) => 1,
            Self::Folder(f) => f.item.iter().map(Self::request_count).sum(),
        }
    }

    fn folder_count(&self) -> usize {
        match self {
            Self::Request(_) => 0,
            Self::Folder(f) => 1 + f.item.iter().map(Self::folder_count).sum::<usize>(),
        }
    }
}

/// A named folder of items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanFolder {
    pub name: String,
    pub item: Vec<PostmanItem>,
}

impl PostmanFolder {
    /// Creates an empty folder.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            item: Vec::new(),
        }
    }

    /// Request items directly inside this folder.
    pub fn requests(&self) -> impl Iterator<Item = &PostmanRequestItem> {
        self.item.iter().filter_map(PostmanItem::as_request)
    }
}

/// A named request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanRequestItem {
    pub name: String,
    pub request: PostmanRequest,
}

/// Variable definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanVariable {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub var_type: String,
}

impl PostmanVariable {
    /// Creates a string-typed variable with a fresh id.
    #[must_use]
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            key: key.into(),
            value: value.into(),
            var_type: "string".to_string(),
        }
    }
}
