//! Domain model for persistent sticky notes.
//!
//! # Responsibility
//! - Define the canonical note record and the color palette.
//! - Pin the wire shape of persisted notes.
//!
//! # Invariants
//! - Every note is identified by a stable integer `NoteId`.
//! - Persisted field order is `id`, `title`, `text`, `color`.

pub mod note;
