//! Conversion report

use std::fmt;
use std::path::PathBuf;

use postie_domain::{ConversionWarning, WarningStats};

/// An input the merge command could not load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSource {
    /// Path as given on the command line.
    pub path: PathBuf,
    /// Why it was skipped.
    pub reason: String,
}

/// What a conversion saw, what it emitted and what it lost.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Requests found in the source documents.
    pub requests_seen: usize,
    /// Request items written to the collection.
    pub requests_converted: usize,
    /// Folders written to the collection, at any depth.
    pub folders_emitted: usize,
    /// Entries in the collection's `variable` list.
    pub variables_emitted: usize,
    /// Fidelity losses, in the order they were raised.
    pub warnings: Vec<ConversionWarning>,
    /// Inputs dropped by a merge.
    pub skipped_sources: Vec<SkippedSource>,
}

impl ConversionReport {
    /// True when some source request has no item in the output.
    #[must_use]
    pub const fn has_mismatch(&self) -> bool {
        self.requests_seen != self.requests_converted
    }

    /// Requests seen but not converted.
    #[must_use]
    pub const fn problematic_requests(&self) -> usize {
        self.requests_seen.saturating_sub(self.requests_converted)
    }

    /// Warning counts by kind.
    #[must_use]
    pub fn warning_stats(&self) -> WarningStats {
        WarningStats::from_warnings(&self.warnings)
    }

    /// Records an input that could not be loaded.
    pub fn skip(&mut self, path: impl Into<PathBuf>, reason: impl Into<String>) {
        self.skipped_sources.push(SkippedSource {
            path: path.into(),
            reason: reason.into(),
        });
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.warning_stats();
        write!(
            f,
            "{} of {} requests converted, {} folders, {} variables, {} warnings",
            self.requests_converted,
            self.requests_seen,
            self.folders_emitted,
            self.variables_emitted,
            stats.total()
        )?;
        if !self.skipped_sources.is_empty() {
            write!(f, ", {} inputs skipped", self.skipped_sources.len())?;
        }
        Ok(())
    }
}
