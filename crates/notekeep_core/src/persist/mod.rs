//! Persistence boundary for the note store.
//!
//! # Responsibility
//! - Define the blob codec for the persisted note sequence.
//! - Define the `NotesBackend` seam between store logic and storage details.
//!
//! # Invariants
//! - The blob is always the full serialized sequence; writes replace, never
//!   patch.
//! - Codec round-trips are lossless for every note field.
//! - This layer reports failures as `PersistError`; fail-soft policy lives in
//!   the store layer, not here.

use crate::model::note::Note;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod backend;

pub use backend::{FileBackend, MemoryBackend};

/// Fixed key the note sequence is stored under.
pub const STORE_KEY: &str = "notes";

pub type PersistResult<T> = Result<T, PersistError>;

/// Failure raised while loading or storing the persisted blob.
#[derive(Debug)]
pub enum PersistError {
    /// Underlying storage could not be read or written.
    Io(std::io::Error),
    /// Blob content did not parse as a note sequence.
    Codec(serde_json::Error),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "blob storage error: {err}"),
            Self::Codec(err) => write!(f, "malformed note blob: {err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Codec(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for PersistError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Codec(value)
    }
}

/// Storage seam for the persisted note blob.
///
/// Implementations hold exactly one blob under the fixed store key and
/// replace it wholesale on every store.
pub trait NotesBackend {
    /// Reads the current blob. `None` means the key has never been written.
    fn load_blob(&self) -> PersistResult<Option<String>>;
    /// Replaces the blob with `blob`. Last successful write wins.
    fn store_blob(&mut self, blob: &str) -> PersistResult<()>;
}

/// Serializes the note sequence into its persisted textual form.
pub fn serialize_notes(notes: &[Note]) -> PersistResult<String> {
    Ok(serde_json::to_string(notes)?)
}

/// Parses a persisted blob back into a note sequence.
pub fn deserialize_notes(blob: &str) -> PersistResult<Vec<Note>> {
    Ok(serde_json::from_str(blob)?)
}
