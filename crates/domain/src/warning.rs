//! Fidelity losses
//!
//! A conversion never aborts because one request cannot be mapped exactly.
//! Each loss is recorded as a [`ConversionWarning`] naming the request and
//! what was lost.

use std::fmt;

use crate::source::BodyKind;

/// How much of the source survived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WarningSeverity {
    /// Output is valid but less structured than the source.
    Info,
    /// Part of the source was dropped.
    Warning,
}

impl fmt::Display for WarningSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.write_str("info"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

/// What was lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// The URL could not be split into host/path/query and is kept raw.
    UrlKeptRaw {
        /// The URL as written in the source.
        url: String,
    },
    /// The auth type has no Postman counterpart.
    AuthDropped {
        /// The source auth type tag.
        auth_type: String,
    },
    /// The body carries a payload of a kind that is not translated.
    BodyUntranslated(BodyKind),
}

impl WarningKind {
    /// Severity implied by the kind.
    #[must_use]
    pub const fn severity(&self) -> WarningSeverity {
        match self {
            Self::UrlKeptRaw { .. } | Self::BodyUntranslated(_) => WarningSeverity::Info,
            Self::AuthDropped { .. } => WarningSeverity::Warning,
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UrlKeptRaw { url } => {
                write!(f, "URL '{url}' kept raw, host/path/query not decomposed")
            }
            Self::AuthDropped { auth_type } => {
                write!(f, "auth type '{auth_type}' has no Postman equivalent, dropped")
            }
            Self::BodyUntranslated(kind) => {
                write!(f, "{kind} body is not translated, request sent without a body")
            }
        }
    }
}

/// A fidelity loss on one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionWarning {
    /// Slash-separated folder path and request name.
    pub path: String,
    /// What was lost.
    pub kind: WarningKind,
}

impl ConversionWarning {
    /// Records `kind` against the request at `path`.
    pub fn new(path: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Severity of the underlying kind.
    #[must_use]
    pub const fn severity(&self) -> WarningSeverity {
        self.kind.severity()
    }
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity(), self.path, self.kind)
    }
}

/// Warning counts per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WarningStats {
    /// URLs that could not be decomposed.
    pub urls_kept_raw: usize,
    /// Auth blocks with no Postman counterpart.
    pub auths_dropped: usize,
    /// Bodies whose payload was not carried over.
    pub bodies_untranslated: usize,
}

impl WarningStats {
    /// Tallies a list of warnings.
    #[must_use]
    pub fn from_warnings(warnings: &[ConversionWarning]) -> Self {
        warnings.iter().fold(Self::default(), |mut stats, w| {
            match w.kind {
                WarningKind::UrlKeptRaw { .. } => stats.urls_kept_raw += 1,
                WarningKind::AuthDropped { .. } => stats.auths_dropped += 1,
                WarningKind::BodyUntranslated(_) => stats.bodies_untranslated += 1,
            }
            stats
        })
    }

    /// All warnings, regardless of kind.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.urls_kept_raw + self.auths_dropped + self.bodies_untranslated
    }
}

impl fmt::Display for WarningStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} raw URLs, {} dropped auth, {} untranslated bodies",
            self.urls_kept_raw, self.auths_dropped, self.bodies_untranslated
        )
    }
}
