//! Filesystem source: lists the notes directory and reads note contents.

use walkdir::WalkDir;

use crate::config::NotesSourceConfig;
use crate::error::LintError;
use crate::rules::is_note_file_name;
use crate::strategy::NoteRef;

/// List the notes directly inside the notes directory.
///
/// Subdirectories are not descended into. Entries that are not regular files,
/// lack the note extension, or are excluded are skipped. The result is sorted
/// and duplicate-free.
///
/// # Errors
///
/// Returns [`LintError::NotesNotADirectory`] if the notes path is not a
/// directory, or [`LintError::ListNotes`] if the directory cannot be read.
pub fn list_notes(source: &NotesSourceConfig) -> Result<Vec<NoteRef>, LintError> {
    let dir = source.notes_dir_path();
    // WalkDir over a plain file yields nothing at depth 1 instead of failing.
    if !dir.is_dir() {
        return Err(LintError::NotesNotADirectory { dir });
    }

    let mut notes = Vec::new();

    for entry_result in WalkDir::new(&dir).min_depth(1).max_depth(1) {
        let entry = entry_result.map_err(|err| LintError::ListNotes {
            dir: dir.clone(),
            source: err,
        })?;

        // Follows symlinks, so a linked note is still linted.
        if !entry.path().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !is_note_file_name(name) {
            continue;
        }

        notes.push(NoteRef::new(source, source.notes_dir.join(name)));
    }

    notes.sort();
    notes.dedup();
    Ok(notes)
}

/// Read a note's full text.
///
/// # Errors
///
/// Returns [`LintError::ReadNote`] if the file cannot be read or is not UTF-8.
pub fn read_note(note: &NoteRef) -> Result<String, LintError> {
    std::fs::read_to_string(&note.path).map_err(|source| LintError::ReadNote {
        path: note.path.clone(),
        source,
    })
}
