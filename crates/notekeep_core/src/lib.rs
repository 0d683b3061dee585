//! Core domain logic for NoteKeep.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod persist;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{ColorTag, Note, NoteId, PALETTE};
pub use persist::{
    deserialize_notes, serialize_notes, FileBackend, MemoryBackend, NotesBackend, PersistError,
    PersistResult, STORE_KEY,
};
pub use store::note_store::NoteStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
