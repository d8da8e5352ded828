//! Filename conventions for ops notes.
//!
//! Two shapes are accepted:
//! - prompt notes: `cc-<slug>-v<N>.md`
//! - general notes: `ops-<slug>.md`

use std::sync::LazyLock;

use regex::Regex;

use super::is_excluded;

/// Rename advice attached to every filename violation.
pub const RENAME_SUGGESTION: &str = "Rename to cc-<slug>-v1.md or ops-<slug>.md";

/// Accepted filename shapes, prompt notes first. A name is valid if any matches.
pub static FILENAME_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        compile(r"^cc-.*-v[0-9]+\.md$"), // prompt note, versioned
        compile(r"^ops-.*\.md$"),        // general ops note
    ]
});

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid filename pattern {pattern}: {err}"),
    }
}

/// Outcome of checking one base filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilenameCheck {
    Valid,
    Invalid {
        /// How to bring the name into line.
        suggestion: &'static str,
    },
}

impl FilenameCheck {
    #[must_use]
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Check a base filename (no directory part) against [`FILENAME_PATTERNS`].
///
/// Excluded structural files are always valid.
#[must_use]
pub fn check_filename(name: &str) -> FilenameCheck {
    if is_excluded(name) || FILENAME_PATTERNS.iter().any(|pattern| pattern.is_match(name)) {
        FilenameCheck::Valid
    } else {
        FilenameCheck::Invalid {
            suggestion: RENAME_SUGGESTION,
        }
    }
}
