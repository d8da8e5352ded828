//! Error types for ops notes linting.
//!
//! Only conditions that stop the run live here. Missing headings and
//! filename mismatches are violations, reported through
//! [`LintReport`](crate::LintReport), never through these errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A failure that aborts the lint run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LintError {
    /// The notes directory exists but could not be listed.
    #[error("failed to list notes directory {}", .dir.display())]
    ListNotes {
        /// The directory being listed.
        dir: PathBuf,
        /// Underlying traversal error.
        #[source]
        source: walkdir::Error,
    },

    /// The notes path exists but is not a directory.
    #[error("notes path {} is not a directory", .dir.display())]
    NotesNotADirectory {
        /// The offending path.
        dir: PathBuf,
    },

    /// A selected note could not be read as UTF-8 text.
    #[error("failed to read note {}", .path.display())]
    ReadNote {
        /// Path the note was read from.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
