//! Note store orchestration.
//!
//! # Responsibility
//! - Own the authoritative in-memory note sequence.
//! - Apply total mutation semantics and mirror every mutation to the backend.
//!
//! # Invariants
//! - "Not found" and blank creation input are no-ops, never errors.
//! - Persistence failures degrade soft: load falls back to an empty sequence,
//!   write failures are logged and swallowed.

pub mod note_store;
