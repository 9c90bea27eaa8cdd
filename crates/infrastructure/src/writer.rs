//! File-backed collection writer

use std::fs::OpenOptions;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use postie_application::ports::{CollectionWriter, WriteError};
use postie_domain::PostmanCollection;

use crate::serialization::to_json_stable_bytes;

/// Races lost to other writers before giving up.
const MAX_ATTEMPTS: usize = 16;

/// Writes collections as pretty JSON, never replacing an existing file.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileCollectionWriter;

impl FileCollectionWriter {
    /// Creates a new writer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CollectionWriter for FileCollectionWriter {
    fn write(&self, path: &Path, collection: &PostmanCollection) -> Result<PathBuf, WriteError> {
        let bytes =
            to_json_stable_bytes(collection).map_err(|e| WriteError::Serialize(e.to_string()))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        // create_new fails if another process took the name in between.
        for _ in 0..MAX_ATTEMPTS {
            let target = unique_output_path(path);
            match OpenOptions::new().write(true).create_new(true).open(&target) {
                Ok(mut file) => {
                    write_or_remove(&mut file, &target, &bytes)?;
                    if target != path {
                        tracing::info!(
                            requested = %path.display(),
                            written = %target.display(),
                            "output exists, wrote to a new file"
                        );
                    }
                    return Ok(target);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
                Err(e) => return Err(e.into()),
            }
        }

        Err(io::Error::new(
            ErrorKind::AlreadyExists,
            format!("no free output name next to {}", path.display()),
        )
        .into())
    }
}

/// Writes `bytes`, deleting `target` if the write fails part way.
fn write_or_remove(file: &mut impl Write, target: &Path, bytes: &[u8]) -> io::Result<()> {
    file.write_all(bytes).inspect_err(|_| {
        if let Err(e) = std::fs::remove_file(target) {
            tracing::warn!(path = %target.display(), error = %e, "could not remove partial output");
        }
    })
}

/// Anything at `path`, including a dangling symlink.
fn is_taken(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

/// First of `path`, `<stem>_1<ext>`, `<stem>_2<ext>`, ... with nothing on disk.
#[must_use]
pub fn unique_output_path(path: &Path) -> PathBuf {
    if !is_taken(path) {
        return path.to_path_buf();
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    (1u64..)
        .map(|n| path.with_file_name(format!("{stem}_{n}{ext}")))
        .find(|candidate| !is_taken(candidate))
        .unwrap_or_else(|| path.to_path_buf())
}
