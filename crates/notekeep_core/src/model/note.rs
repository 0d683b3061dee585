//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record shared by store and presentation.
//! - Define the fixed color palette used to tint note cards.
//!
//! # Invariants
//! - `id` is stable for the lifetime of a note and never reassigned by edits.
//! - `title` and `text` may both be empty on an existing note; only creation
//!   rejects the both-empty combination.
//! - `color` always holds a palette member; there is no free-form color.

use serde::{Deserialize, Serialize};

/// Stable identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = u64;

/// Background tint for a note card.
///
/// Tags serialize as lowercase names so the persisted blob stays readable
/// and matches what a palette picker would hand over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    /// Neutral default tint.
    #[default]
    White,
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    Blue,
    Purple,
}

/// Full palette in picker display order.
pub const PALETTE: [ColorTag; 8] = [
    ColorTag::White,
    ColorTag::Red,
    ColorTag::Orange,
    ColorTag::Yellow,
    ColorTag::Green,
    ColorTag::Teal,
    ColorTag::Blue,
    ColorTag::Purple,
];

impl ColorTag {
    /// Returns the lowercase tag name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Teal => "teal",
            Self::Blue => "blue",
            Self::Purple => "purple",
        }
    }

    /// Resolves a tag from its name, case-insensitively.
    ///
    /// Returns `None` for names outside the palette.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase();
        PALETTE
            .iter()
            .copied()
            .find(|tag| tag.as_str() == normalized)
    }
}

impl std::fmt::Display for ColorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical note record.
///
/// Field declaration order is the persisted field order; do not reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Positive, monotonically assigned id; unique within one store.
    pub id: NoteId,
    /// Card heading. May be empty.
    pub title: String,
    /// Card body. May be empty.
    pub text: String,
    /// Background tint tag.
    pub color: ColorTag,
}

impl Note {
    /// Creates a note with the default color.
    ///
    /// # Invariants
    /// - The caller is responsible for supplying a fresh `id`; this
    ///   constructor does not check uniqueness.
    pub fn new(id: NoteId, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            text: text.into(),
            color: ColorTag::default(),
        }
    }

    /// Returns whether both user-visible fields are empty.
    ///
    /// No trimming happens here: whitespace-only input counts as content,
    /// matching the widget this store backs.
    pub fn is_blank(title: &str, text: &str) -> bool {
        title.is_empty() && text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorTag, Note, PALETTE};

    #[test]
    fn new_note_uses_default_color() {
        let note = Note::new(1, "title", "body");
        assert_eq!(note.color, ColorTag::White);
    }

    #[test]
    fn color_names_round_trip_through_from_name() {
        for tag in PALETTE {
            assert_eq!(ColorTag::from_name(tag.as_str()), Some(tag));
        }
        assert_eq!(ColorTag::from_name(" TEAL "), Some(ColorTag::Teal));
        assert_eq!(ColorTag::from_name("magenta"), None);
    }

    #[test]
    fn blank_check_ignores_whitespace_only_input() {
        assert!(Note::is_blank("", ""));
        assert!(!Note::is_blank(" ", ""));
        assert!(!Note::is_blank("", "x"));
    }
}
