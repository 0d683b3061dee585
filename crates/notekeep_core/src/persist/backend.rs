//! Blob backend implementations.
//!
//! # Responsibility
//! - Map the `NotesBackend` contract onto a single on-disk file.
//! - Provide an in-memory backend for tests and ephemeral stores.
//!
//! # Invariants
//! - `FileBackend` keeps the blob in `<dir>/notes.json`; a missing file is a
//!   first run, not an error.
//! - Writes replace the whole file; there is no partial-write recovery beyond
//!   the next successful write.

use super::{NotesBackend, PersistResult, STORE_KEY};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed blob storage rooted in a store directory.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Creates a backend storing the blob inside `dir`.
    ///
    /// The directory is created lazily on first write, so pointing at a
    /// not-yet-existing location behaves like a first run.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORE_KEY}.json")),
        }
    }

    /// Full path of the blob file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NotesBackend for FileBackend {
    fn load_blob(&self) -> PersistResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn store_blob(&mut self, blob: &str) -> PersistResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, blob)?;
        Ok(())
    }
}

/// In-memory blob storage.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    blob: Option<String>,
}

impl NotesBackend for MemoryBackend {
    fn load_blob(&self) -> PersistResult<Option<String>> {
        Ok(self.blob.clone())
    }

    fn store_blob(&mut self, blob: &str) -> PersistResult<()> {
        self.blob = Some(blob.to_string());
        Ok(())
    }
}
