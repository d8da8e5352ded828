//! Structural rules every ops note must satisfy.
//!
//! - `headings` - required section markers, checked by substring containment
//! - `filename` - accepted filename shapes
//!
//! All rule data is process-wide and immutable.

pub mod filename;
pub mod headings;

/// Extension every ops note carries.
pub const NOTE_EXTENSION: &str = ".md";

/// Template that new notes are copied from.
pub const TEMPLATE_FILE: &str = "TEMPLATE-OPS-NOTE.md";

/// Structural files that live next to the notes but are not notes.
pub const EXCLUDED_FILES: &[&str] = &["README.md", TEMPLATE_FILE];

/// Whether `name` is one of the [`EXCLUDED_FILES`].
#[must_use]
pub fn is_excluded(name: &str) -> bool {
    EXCLUDED_FILES.contains(&name)
}

/// Whether a base filename should be linted: it carries the note extension
/// and is not excluded.
#[must_use]
pub fn is_note_file_name(name: &str) -> bool {
    name.ends_with(NOTE_EXTENSION) && !is_excluded(name)
}
