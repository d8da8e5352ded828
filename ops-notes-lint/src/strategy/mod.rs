//! Note selection strategies.
//!
//! Two tiers: notes changed relative to the base branch (`git` module), and
//! a full listing of the notes directory (`fs` module). The change-scoped
//! list wins whenever it is available and non-empty.

pub mod fs;
pub mod git;

use std::borrow::Cow;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};

use crate::config::{LintConfig, NotesSourceConfig, SelectionMode};
use crate::error::LintError;
use crate::rules::is_note_file_name;
use git::ChangedFiles;

/// A note selected for linting.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteRef {
    /// Path relative to the repository root, as shown in reports.
    pub rel_path: PathBuf,
    /// Path the note is read from.
    pub path: PathBuf,
}

impl NoteRef {
    #[must_use]
    pub fn new(source: &NotesSourceConfig, rel_path: PathBuf) -> Self {
        let path = source.resolve(&rel_path);
        Self { rel_path, path }
    }

    /// Base filename of the note.
    #[must_use]
    pub fn file_name(&self) -> Cow<'_, str> {
        self.rel_path
            .file_name()
            .map_or(Cow::Borrowed(""), |name| name.to_string_lossy())
    }
}

impl fmt::Display for NoteRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rel_path.display())
    }
}

/// Which tier produced the selected notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionScope {
    /// Notes changed relative to the base branch.
    Changed,
    /// Every note in the notes directory.
    Full,
}

/// Why nothing was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotesDirMissing,
    /// The directory holds only excluded files (template, readme) or nothing.
    NoNotes,
}

/// Result of note selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Skipped(SkipReason),
    Selected {
        scope: SelectionScope,
        /// Sorted, duplicate-free.
        notes: Vec<NoteRef>,
    },
}

/// Select the notes to lint, querying git unless a full scan was requested.
///
/// # Errors
///
/// Returns [`LintError::NotesNotADirectory`] or [`LintError::ListNotes`] if
/// the notes path exists but cannot be listed. Git failures are never
/// errors; they fall back to the listing.
pub fn select_notes(
    source: &NotesSourceConfig,
    config: &LintConfig,
) -> Result<Selection, LintError> {
    if !source.notes_dir_path().exists() {
        return Ok(Selection::Skipped(SkipReason::NotesDirMissing));
    }

    let changed = match source.selection_mode {
        SelectionMode::ChangedFirst => git::changed_files(&source.root, &config.base_branch),
        SelectionMode::FullScan => ChangedFiles::Unavailable("full scan requested".to_owned()),
    };
    select_from(source, &changed)
}

/// Select the notes to lint given an already obtained changed-file list.
///
/// # Errors
///
/// Returns [`LintError::NotesNotADirectory`] or [`LintError::ListNotes`] if
/// the fallback directory listing fails.
pub fn select_from(
    source: &NotesSourceConfig,
    changed: &ChangedFiles,
) -> Result<Selection, LintError> {
    if !source.notes_dir_path().exists() {
        return Ok(Selection::Skipped(SkipReason::NotesDirMissing));
    }

    match changed {
        ChangedFiles::Available(paths) => {
            let notes = changed_notes(source, paths);
            if !notes.is_empty() {
                info!(count = notes.len(), "linting changed ops notes");
                return Ok(Selection::Selected {
                    scope: SelectionScope::Changed,
                    notes,
                });
            }
            debug!("no changed ops notes; scanning the notes directory");
        }
        ChangedFiles::Unavailable(reason) => {
            debug!(%reason, "changed-file list unavailable; scanning the notes directory");
        }
    }

    let notes = fs::list_notes(source)?;
    if notes.is_empty() {
        return Ok(Selection::Skipped(SkipReason::NoNotes));
    }
    info!(count = notes.len(), "linting all ops notes");
    Ok(Selection::Selected {
        scope: SelectionScope::Full,
        notes,
    })
}

/// Filter repository-relative changed paths down to existing notes.
///
/// Deleted notes show up in a diff against the base branch, so paths that no
/// longer exist as regular files are dropped.
fn changed_notes(source: &NotesSourceConfig, paths: &[String]) -> Vec<NoteRef> {
    let notes_dir = normalize(&source.notes_dir);
    let mut notes: Vec<NoteRef> = paths
        .iter()
        .map(|path| normalize(Path::new(path)))
        .filter(|rel_path| rel_path.starts_with(&notes_dir) && *rel_path != notes_dir)
        .filter(|rel_path| {
            rel_path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(is_note_file_name)
        })
        .map(|rel_path| NoteRef::new(source, rel_path))
        .filter(|note| {
            let exists = note.path.is_file();
            if !exists {
                debug!(note = %note, "skipping changed note that no longer exists");
            }
            exists
        })
        .collect();
    notes.sort();
    notes.dedup();
    notes
}

/// Drop `.` components so `./docs/notes` and `docs/notes` compare equal.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;
    use tempfile::TempDir;

    fn source_in(tmp: &TempDir) -> NotesSourceConfig {
        let mut source = NotesSourceConfig::default();
        source.root = tmp.path().to_path_buf();
        source
    }

    fn write_note(tmp: &TempDir, rel: &str) {
        let path = tmp.path().join(rel);
        if let Some(parent) = path.parent() {
            stdfs::create_dir_all(parent).unwrap();
        }
        stdfs::write(path, "# note\n").unwrap();
    }

    fn rel_paths(selection: &Selection) -> Vec<String> {
        match selection {
            Selection::Selected { notes, .. } => notes
                .iter()
                .map(|note| note.rel_path.to_string_lossy().into_owned())
                .collect(),
            Selection::Skipped(_) => Vec::new(),
        }
    }

    #[test]
    fn test_missing_dir_skips_before_anything_else() {
        let tmp = TempDir::new().unwrap();
        let source = source_in(&tmp);
        let changed = ChangedFiles::Available(vec!["docs/notes/ops-a.md".to_owned()]);
        assert_eq!(
            select_from(&source, &changed).unwrap(),
            Selection::Skipped(SkipReason::NotesDirMissing)
        );
    }

    #[test]
    fn test_changed_notes_filtered_and_sorted() {
        let tmp = TempDir::new().unwrap();
        for rel in [
            "docs/notes/ops-b.md",
            "docs/notes/ops-a.md",
            "docs/notes/README.md",
            "docs/notes/ops-c.txt",
            "docs/other/ops-d.md",
            "docs/notes/nested/ops-e.md",
        ] {
            write_note(&tmp, rel);
        }
        let changed = ChangedFiles::Available(vec![
            "docs/notes/ops-b.md".to_owned(),
            "src/main.rs".to_owned(),
            "docs/notes/README.md".to_owned(),
            "docs/notes/ops-c.txt".to_owned(),
            "docs/other/ops-d.md".to_owned(),
            "docs/notes/ops-a.md".to_owned(),
            "docs/notes/nested/ops-e.md".to_owned(),
            "docs/notes/ops-a.md".to_owned(),
        ]);

        let selection = select_from(&source_in(&tmp), &changed).unwrap();
        assert!(matches!(
            selection,
            Selection::Selected {
                scope: SelectionScope::Changed,
                ..
            }
        ));
        assert_eq!(
            rel_paths(&selection),
            vec![
                "docs/notes/nested/ops-e.md",
                "docs/notes/ops-a.md",
                "docs/notes/ops-b.md",
            ]
        );
    }

    #[test]
    fn test_deleted_changed_note_is_dropped() {
        let tmp = TempDir::new().unwrap();
        write_note(&tmp, "docs/notes/ops-kept.md");
        let changed = ChangedFiles::Available(vec![
            "docs/notes/ops-deleted.md".to_owned(),
            "docs/notes/ops-kept.md".to_owned(),
        ]);
        let selection = select_from(&source_in(&tmp), &changed).unwrap();
        assert_eq!(rel_paths(&selection), vec!["docs/notes/ops-kept.md"]);
    }

    #[test]
    fn test_no_relevant_changes_falls_back_to_full_scan() {
        let tmp = TempDir::new().unwrap();
        write_note(&tmp, "docs/notes/ops-a.md");
        write_note(&tmp, "docs/notes/cc-b-v1.md");
        let changed = ChangedFiles::Available(vec!["README.md".to_owned()]);

        let selection = select_from(&source_in(&tmp), &changed).unwrap();
        assert!(matches!(
            selection,
            Selection::Selected {
                scope: SelectionScope::Full,
                ..
            }
        ));
        assert_eq!(
            rel_paths(&selection),
            vec!["docs/notes/cc-b-v1.md", "docs/notes/ops-a.md"]
        );
    }

    #[test]
    fn test_unavailable_falls_back_to_full_scan() {
        let tmp = TempDir::new().unwrap();
        write_note(&tmp, "docs/notes/ops-a.md");
        let changed = ChangedFiles::Unavailable("not a git repository".to_owned());
        let selection = select_from(&source_in(&tmp), &changed).unwrap();
        assert_eq!(rel_paths(&selection), vec!["docs/notes/ops-a.md"]);
    }

    #[test]
    fn test_only_excluded_files_skips() {
        let tmp = TempDir::new().unwrap();
        write_note(&tmp, "docs/notes/README.md");
        write_note(&tmp, "docs/notes/TEMPLATE-OPS-NOTE.md");
        let changed = ChangedFiles::Unavailable("no git".to_owned());
        assert_eq!(
            select_from(&source_in(&tmp), &changed).unwrap(),
            Selection::Skipped(SkipReason::NoNotes)
        );
    }

    #[test]
    fn test_dotted_notes_dir_matches_changed_paths() {
        let tmp = TempDir::new().unwrap();
        write_note(&tmp, "docs/notes/ops-a.md");
        let mut source = source_in(&tmp);
        source.notes_dir = PathBuf::from("./docs/notes");
        let changed = ChangedFiles::Available(vec!["docs/notes/ops-a.md".to_owned()]);
        let selection = select_from(&source, &changed).unwrap();
        assert!(matches!(
            selection,
            Selection::Selected {
                scope: SelectionScope::Changed,
                ..
            }
        ));
    }

    #[test]
    fn test_full_scan_mode_ignores_git() {
        let tmp = TempDir::new().unwrap();
        write_note(&tmp, "docs/notes/ops-a.md");
        let mut source = source_in(&tmp);
        source.selection_mode = SelectionMode::FullScan;
        let selection = select_notes(&source, &LintConfig::default()).unwrap();
        assert!(matches!(
            selection,
            Selection::Selected {
                scope: SelectionScope::Full,
                ..
            }
        ));
    }

    fn run_git(root: &Path, args: &[&str]) -> bool {
        std::process::Command::new("git")
            .args([
                "-c",
                "user.name=Ops Notes",
                "-c",
                "user.email=ops-notes@example.com",
                "-c",
                "commit.gpgsign=false",
            ])
            .args(args)
            .current_dir(root)
            .stdin(std::process::Stdio::null())
            .output()
            .is_ok_and(|output| output.status.success())
    }

    #[test]
    fn test_branch_changes_select_changed_scope() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        if !run_git(root, &["init", "--quiet"]) {
            eprintln!("git unavailable; skipping");
            return;
        }
        write_note(&tmp, "docs/notes/ops-old.md");
        assert!(run_git(root, &["add", "."]));
        assert!(run_git(root, &["commit", "--quiet", "-m", "base"]));
        assert!(run_git(root, &["update-ref", "refs/remotes/origin/main", "HEAD"]));

        write_note(&tmp, "docs/notes/ops-new.md");
        assert!(run_git(root, &["add", "."]));
        assert!(run_git(root, &["commit", "--quiet", "-m", "add note"]));

        assert_eq!(
            git::changed_files(root, "main"),
            ChangedFiles::Available(vec!["docs/notes/ops-new.md".to_owned()])
        );
        let selection = select_notes(&source_in(&tmp), &LintConfig::default()).unwrap();
        assert!(matches!(
            selection,
            Selection::Selected {
                scope: SelectionScope::Changed,
                ..
            }
        ));
        assert_eq!(rel_paths(&selection), vec!["docs/notes/ops-new.md"]);
    }

    #[test]
    fn test_note_ref_display_and_file_name() {
        let source = NotesSourceConfig::default();
        let note = NoteRef::new(&source, PathBuf::from("docs/notes/ops-a.md"));
        assert_eq!(note.to_string(), "docs/notes/ops-a.md");
        assert_eq!(note.file_name(), "ops-a.md");
    }
}
