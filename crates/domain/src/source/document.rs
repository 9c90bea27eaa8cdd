//! Version-detected source document
//!
//! HTTPie has exported two shapes over time: the current workspace format
//! (`meta` + `entry` + `environments`) and an older fixed-shape collection
//! (`name` + `requests` at the top level). Both are read through
//! [`SourceDocument`] so the converter has a single code path.

use serde_json::Value;

use super::environment::HttpieEnvironment;
use super::request::HttpieRequest;
use super::workspace::{HttpieCollection, HttpieWorkspace, count_requests};
use crate::error::{DomainError, DomainResult};

/// Detected source format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Current workspace format with environments and nested collections
    Workspace,
    /// Older single-collection format
    LegacyCollection,
    /// Neither shape
    Unknown,
}

impl SourceFormat {
    /// Detects the format of a raw JSON value.
    #[must_use]
    pub fn detect(json: &Value) -> Self {
        if json.get("entry").is_some_and(Value::is_object) {
            return Self::Workspace;
        }

        if json.get("requests").is_some_and(Value::is_array) {
            return Self::LegacyCollection;
        }

        Self::Unknown
    }

    /// Human-readable format name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Workspace => "HTTPie workspace",
            Self::LegacyCollection => "HTTPie collection",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A decoded HTTPie export in either supported format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceDocument {
    /// Current workspace format
    Workspace(HttpieWorkspace),
    /// Older single-collection format
    LegacyCollection(HttpieCollection),
}

impl SourceDocument {
    /// Detects the format of `json` and decodes it.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownSourceFormat`] when the value matches
    /// neither shape, and [`DomainError::InvalidSource`] when it matches a
    /// shape but a field has the wrong type.
    pub fn from_value(json: Value) -> DomainResult<Self> {
        match SourceFormat::detect(&json) {
            SourceFormat::Workspace => serde_json::from_value(json)
                .map(Self::Workspace)
                .map_err(|e| DomainError::InvalidSource(e.to_string())),
            SourceFormat::LegacyCollection => serde_json::from_value(json)
                .map(Self::LegacyCollection)
                .map_err(|e| DomainError::InvalidSource(e.to_string())),
            SourceFormat::Unknown => Err(DomainError::UnknownSourceFormat(
                "expected an HTTPie workspace (\"entry\") or collection (\"requests\")".to_string(),
            )),
        }
    }

    /// The format this document was decoded from.
    #[must_use]
    pub const fn format(&self) -> SourceFormat {
        match self {
            Self::Workspace(_) => SourceFormat::Workspace,
            Self::LegacyCollection(_) => SourceFormat::LegacyCollection,
        }
    }

    /// Entry name (may be empty).
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Workspace(w) => &w.entry.name,
            Self::LegacyCollection(c) => &c.name,
        }
    }

    /// Requests attached directly to the entry.
    #[must_use]
    pub fn requests(&self) -> &[HttpieRequest] {
        match self {
            Self::Workspace(w) => &w.entry.requests,
            Self::LegacyCollection(c) => &c.requests,
        }
    }

    /// Collections below the entry.
    #[must_use]
    pub fn collections(&self) -> &[HttpieCollection] {
        match self {
            Self::Workspace(w) => &w.entry.collections,
            Self::LegacyCollection(c) => &c.collections,
        }
    }

    /// Declared environments; the legacy format has none.
    #[must_use]
    pub fn environments(&self) -> &[HttpieEnvironment] {
        match self {
            Self::Workspace(w) => &w.environments,
            Self::LegacyCollection(_) => &[],
        }
    }

    /// Every request, direct ones first, then each collection depth first.
    #[must_use]
    pub fn all_requests(&self) -> Vec<&HttpieRequest> {
        let mut out: Vec<&HttpieRequest> = self.requests().iter().collect();
        for collection in self.collections() {
            collection.collect_requests(&mut out);
        }
        out
    }

    /// Total number of requests, direct and nested.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests().len() + count_requests(self.collections())
    }
}

impl From<HttpieWorkspace> for SourceDocument {
    fn from(workspace: HttpieWorkspace) -> Self {
        Self::Workspace(workspace)
    }
}

impl From<HttpieCollection> for SourceDocument {
    fn from(collection: HttpieCollection) -> Self {
        Self::LegacyCollection(collection)
    }
}
