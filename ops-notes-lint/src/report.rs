//! Lint report types and the exit-status decision.

use std::path::PathBuf;

use crate::rules::filename::FilenameCheck;
use crate::strategy::{NoteRef, SelectionScope, SkipReason};

/// Process exit status for a passing run, or a run with nothing to lint.
pub const EXIT_SUCCESS: i32 = 0;

/// Process exit status for a failing run.
pub const EXIT_FAILURE: i32 = 1;

/// Both rule outcomes for a single note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteLint {
    /// Required headings absent from the note, in declared order.
    pub missing_headings: Vec<&'static str>,
    pub filename: FilenameCheck,
}

impl NoteLint {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.missing_headings.is_empty() && self.filename.is_valid()
    }
}

/// A note missing one or more required headings. Always an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingViolation {
    pub note: NoteRef,
    pub missing: Vec<&'static str>,
}

/// A note whose filename matches no accepted shape.
/// A warning, or an error in strict mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameViolation {
    pub note: NoteRef,
    pub suggestion: &'static str,
}

/// Aggregated results over every selected note.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct LintReport {
    /// Number of notes checked.
    pub notes_checked: usize,
    /// Whether filename violations fail the run.
    pub strict_filenames: bool,
    /// Notes with missing headings, in selection order.
    pub heading_violations: Vec<HeadingViolation>,
    /// Notes with non-conforming filenames, in selection order.
    pub filename_violations: Vec<FilenameViolation>,
}

impl LintReport {
    #[must_use]
    pub fn new(strict_filenames: bool) -> Self {
        Self {
            notes_checked: 0,
            strict_filenames,
            heading_violations: Vec::new(),
            filename_violations: Vec::new(),
        }
    }

    /// Fold one note's outcome into the report.
    pub fn record(&mut self, note: &NoteRef, lint: NoteLint) {
        self.notes_checked += 1;
        if !lint.missing_headings.is_empty() {
            self.heading_violations.push(HeadingViolation {
                note: note.clone(),
                missing: lint.missing_headings,
            });
        }
        if let FilenameCheck::Invalid { suggestion } = lint.filename {
            self.filename_violations.push(FilenameViolation {
                note: note.clone(),
                suggestion,
            });
        }
    }

    #[must_use]
    pub fn has_heading_errors(&self) -> bool {
        !self.heading_violations.is_empty()
    }

    /// Filename violations only count as errors in strict mode.
    #[must_use]
    pub fn has_filename_errors(&self) -> bool {
        self.strict_filenames && !self.filename_violations.is_empty()
    }

    #[must_use]
    pub fn ok(&self) -> bool {
        !self.has_heading_errors() && !self.has_filename_errors()
    }
}

/// Result of a whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintOutcome {
    /// Nothing to lint; the checks never ran.
    Skipped {
        reason: SkipReason,
        notes_dir: PathBuf,
    },
    Linted {
        scope: SelectionScope,
        notes_dir: PathBuf,
        report: LintReport,
    },
}

impl LintOutcome {
    #[must_use]
    pub fn ok(&self) -> bool {
        match self {
            Self::Skipped { .. } => true,
            Self::Linted { report, .. } => report.ok(),
        }
    }

    /// [`EXIT_FAILURE`] on any heading violation, or on a filename violation
    /// in strict mode; [`EXIT_SUCCESS`] otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.ok() { EXIT_SUCCESS } else { EXIT_FAILURE }
    }
}
