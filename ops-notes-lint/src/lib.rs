//! # ops-notes-lint
//!
//! Structural linter for ops notes: markdown documents that record an
//! operational procedure or prompt. Every note must contain six required
//! section headings and should follow one of two filename shapes.
//!
//! The crate separates **selection** (which notes to check: changed relative
//! to a base branch, else the whole notes directory) from the **rules**
//! (pure checks over a note's text and filename) and the **report**
//! (aggregation and exit status).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ops_notes_lint::{LintConfig, NotesSourceConfig, lint_notes};
//!
//! let source = NotesSourceConfig::default();
//! let config = LintConfig::from_env();
//!
//! let outcome = lint_notes(&source, &config).unwrap();
//! println!("OK: {}", outcome.ok());
//! std::process::exit(outcome.exit_code());
//! ```

mod config;
mod error;
pub mod output;
mod report;
pub mod rules;
pub mod strategy;

pub use config::{
    BASE_BRANCH_ENV, DEFAULT_BASE_BRANCH, DEFAULT_NOTES_DIR, LintConfig, NotesSourceConfig,
    STRICT_FILENAMES_ENV, SelectionMode,
};
pub use error::LintError;
pub use report::{
    EXIT_FAILURE, EXIT_SUCCESS, FilenameViolation, HeadingViolation, LintOutcome, LintReport,
    NoteLint,
};
pub use rules::filename::{FilenameCheck, check_filename};
pub use rules::headings::{REQUIRED_HEADINGS, missing_headings};
pub use strategy::{NoteRef, Selection, SelectionScope, SkipReason};

use tracing::debug;

/// Select ops notes and lint every one of them.
///
/// This is the primary public API. When nothing is selected the outcome is
/// [`LintOutcome::Skipped`] and no note is read.
///
/// # Errors
///
/// Returns an error if the notes directory cannot be listed or a selected
/// note cannot be read. Violations are never errors; they are in the report.
pub fn lint_notes(
    source: &NotesSourceConfig,
    config: &LintConfig,
) -> Result<LintOutcome, LintError> {
    let notes_dir = source.notes_dir.clone();
    match strategy::select_notes(source, config)? {
        Selection::Skipped(reason) => Ok(LintOutcome::Skipped { reason, notes_dir }),
        Selection::Selected { scope, notes } => {
            let report = lint_selected(&notes, config)?;
            Ok(LintOutcome::Linted {
                scope,
                notes_dir,
                report,
            })
        }
    }
}

/// Lint an explicit list of notes. Every note is checked; violations never
/// stop the scan.
///
/// # Errors
///
/// Returns [`LintError::ReadNote`] on the first note that cannot be read.
pub fn lint_selected(notes: &[NoteRef], config: &LintConfig) -> Result<LintReport, LintError> {
    let mut report = LintReport::new(config.strict_filenames);
    for note in notes {
        let lint = lint_note(note)?;
        report.record(note, lint);
    }
    Ok(report)
}

/// Check one note against both rule sets.
///
/// # Errors
///
/// Returns [`LintError::ReadNote`] if the note cannot be read.
pub fn lint_note(note: &NoteRef) -> Result<NoteLint, LintError> {
    let content = strategy::fs::read_note(note)?;
    let lint = NoteLint {
        missing_headings: missing_headings(&content),
        filename: check_filename(&note.file_name()),
    };
    debug!(
        note = %note,
        missing = lint.missing_headings.len(),
        filename_ok = lint.filename.is_valid(),
        "checked note"
    );
    Ok(lint)
}
