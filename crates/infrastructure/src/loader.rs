//! File-backed source loader

use std::path::Path;

use postie_application::ports::{LoadedSource, SourceLoadError, SourceLoader};
use postie_domain::SourceDocument;

use crate::serialization::from_json_bytes;

/// Limits applied when reading input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Maximum file size in bytes (default: 10MB)
    pub max_file_size: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024,
        }
    }
}

impl LoaderConfig {
    /// Sets the maximum file size.
    #[must_use]
    pub const fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }
}

/// Loads HTTPie exports from the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct FileSourceLoader {
    config: LoaderConfig,
}

impl FileSourceLoader {
    /// Create a new loader with default config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new loader with custom config
    #[must_use]
    pub const fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }
}

impl SourceLoader for FileSourceLoader {
    fn load(&self, path: &Path) -> Result<LoadedSource, SourceLoadError> {
        if !path.exists() {
            return Err(SourceLoadError::NotFound(path.to_path_buf()));
        }

        let size = std::fs::metadata(path)?.len();
        if size > self.config.max_file_size {
            return Err(SourceLoadError::TooLarge {
                size,
                limit: self.config.max_file_size,
            });
        }

        let bytes = std::fs::read(path)?;
        let json: serde_json::Value =
            from_json_bytes(&bytes).map_err(|e| SourceLoadError::InvalidJson(e.to_string()))?;
        let document = SourceDocument::from_value(json)?;

        tracing::debug!(
            path = %path.display(),
            format = %document.format(),
            requests = document.request_count(),
            "loaded source"
        );

        Ok(LoadedSource::new(path, document))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use postie_domain::SourceFormat;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_workspace() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "ws.json",
            r#"{
                "meta": {"format": "httpie", "version": "1.0.0"},
                "entry": {
                    "name": "My API",
                    "requests": [{"name": "Ping", "method": "GET", "url": "https://x.example.com/ping"}],
                    "collections": []
                },
                "environments": [{"name": "Dev", "isDefault": true, "variables": [{"name": "a", "value": "1"}]}]
            }"#,
        );

        let loaded = FileSourceLoader::new().load(&path).unwrap();
        assert_eq!(loaded.path, path);
        assert_eq!(loaded.document.format(), SourceFormat::Workspace);
        assert_eq!(loaded.document.name(), "My API");
        assert_eq!(loaded.document.request_count(), 1);
        assert_eq!(loaded.document.environments().len(), 1);
    }

    #[test]
    fn test_load_legacy_collection() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "old.json", r#"{"name": "Old", "requests": []}"#);

        let loaded = FileSourceLoader::new().load(&path).unwrap();
        assert_eq!(loaded.document.format(), SourceFormat::LegacyCollection);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = FileSourceLoader::new().load(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(SourceLoadError::NotFound(_))));
    }

    #[test]
    fn test_oversized_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "big.json", r#"{"name": "Big", "requests": []}"#);

        let loader = FileSourceLoader::with_config(LoaderConfig::default().with_max_file_size(8));
        let result = loader.load(&path);
        assert!(matches!(result, Err(SourceLoadError::TooLarge { limit: 8, .. })));
    }

    #[test]
    fn test_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.json", "{ not json");
        let result = FileSourceLoader::new().load(&path);
        assert!(matches!(result, Err(SourceLoadError::InvalidJson(_))));
    }

    #[test]
    fn test_unknown_shape() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "other.json", r#"{"info": {}, "item": []}"#);
        let result = FileSourceLoader::new().load(&path);
        assert!(matches!(result, Err(SourceLoadError::InvalidFormat(_))));
    }
}
