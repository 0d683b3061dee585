//! The note store: authoritative sequence plus reducer-style mutations.
//!
//! # Responsibility
//! - Hold the ordered note sequence and the id high-water mark.
//! - Provide create/update/recolor/delete with total, no-throw semantics.
//! - Mirror the full sequence to the persistence backend after each mutation.
//!
//! # Invariants
//! - Ids are strictly increasing; a deleted id is never handed out again
//!   within the lifetime of one store instance.
//! - Sequence order is insertion order; deletion does not renumber or reorder.
//! - The in-memory sequence stays authoritative even when a write fails; the
//!   next successful write replaces whatever is on disk.

use crate::model::note::{ColorTag, Note, NoteId};
use crate::persist::{
    deserialize_notes, serialize_notes, FileBackend, MemoryBackend, NotesBackend,
};
use log::{info, warn};
use std::path::Path;

/// Authoritative note collection bound to one persistence backend.
pub struct NoteStore<B: NotesBackend> {
    backend: B,
    notes: Vec<Note>,
    /// Highest id ever observed plus one. Never decreases.
    next_id: NoteId,
}

impl NoteStore<FileBackend> {
    /// Opens a store persisted under `dir`, rehydrating any prior sequence.
    ///
    /// A missing or malformed blob yields an empty store; neither is an error.
    pub fn open(dir: impl AsRef<Path>) -> Self {
        Self::with_backend(FileBackend::new(dir))
    }
}

impl NoteStore<MemoryBackend> {
    /// Opens an ephemeral store with no durable state.
    pub fn open_in_memory() -> Self {
        Self::with_backend(MemoryBackend::default())
    }
}

impl<B: NotesBackend> NoteStore<B> {
    /// Builds a store over any backend, rehydrating its current blob.
    pub fn with_backend(backend: B) -> Self {
        let notes = load_notes(&backend);
        let next_id = notes.iter().map(|note| note.id).max().unwrap_or(0) + 1;
        info!(
            "event=store_open module=store status=ok notes={} next_id={}",
            notes.len(),
            next_id
        );
        Self {
            backend,
            notes,
            next_id,
        }
    }

    /// The full ordered sequence, for post-mutation re-render.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Looks up one note by id.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Appends a new note with a fresh id and the default color.
    ///
    /// Returns `None` without touching the store when both `title` and `text`
    /// are empty. No trimming: whitespace-only input is kept as-is.
    pub fn create(&mut self, title: &str, text: &str) -> Option<Note> {
        if Note::is_blank(title, text) {
            return None;
        }

        let note = Note::new(self.next_id, title, text);
        self.next_id += 1;
        self.notes.push(note.clone());
        info!("event=note_create module=store status=ok id={}", note.id);
        self.persist();
        Some(note)
    }

    /// Replaces `title` and `text` of the note with `id`, keeping its color
    /// and position. No-op when `id` is absent.
    pub fn update(&mut self, id: NoteId, title: &str, text: &str) {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            info!("event=note_update module=store status=noop id={id}");
            return;
        };
        note.title = title.to_string();
        note.text = text.to_string();
        info!("event=note_update module=store status=ok id={id}");
        self.persist();
    }

    /// Replaces only the color of the note with `id`. No-op when absent.
    pub fn recolor(&mut self, id: NoteId, color: ColorTag) {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            info!("event=note_recolor module=store status=noop id={id}");
            return;
        };
        note.color = color;
        info!("event=note_recolor module=store status=ok id={id} color={color}");
        self.persist();
    }

    /// Removes the note with `id`, preserving the order of the rest.
    /// No-op when absent.
    pub fn delete(&mut self, id: NoteId) {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            info!("event=note_delete module=store status=noop id={id}");
            return;
        }
        info!("event=note_delete module=store status=ok id={id}");
        self.persist();
    }

    /// Mirrors the full sequence to the backend.
    ///
    /// Failures are logged and swallowed; the in-memory sequence remains
    /// authoritative and the next successful write wins.
    fn persist(&mut self) {
        let blob = match serialize_notes(&self.notes) {
            Ok(blob) => blob,
            Err(err) => {
                warn!(
                    "event=blob_store module=store status=error error_code=encode_failed error={err}"
                );
                return;
            }
        };
        if let Err(err) = self.backend.store_blob(&blob) {
            warn!(
                "event=blob_store module=store status=error error_code=write_failed error={err}"
            );
        }
    }
}

/// Rehydrates the note sequence from the backend, failing soft.
///
/// Absence of the blob is a first run; unreadable or malformed content is
/// logged and degrades to an empty sequence.
fn load_notes<B: NotesBackend>(backend: &B) -> Vec<Note> {
    let blob = match backend.load_blob() {
        Ok(Some(blob)) => blob,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!(
                "event=blob_load module=store status=error error_code=read_failed error={err}"
            );
            return Vec::new();
        }
    };

    match deserialize_notes(&blob) {
        Ok(notes) => notes,
        Err(err) => {
            warn!(
                "event=blob_load module=store status=error error_code=corrupt_blob error={err}"
            );
            Vec::new()
        }
    }
}
