//! Configuration types for an ops notes lint run.
//!
//! Split into run config (how violations are judged) and source config
//! (where notes are found). Both are read once at start and never mutated
//! afterwards.

use std::path::{Path, PathBuf};

/// Environment variable naming the base branch to diff against.
pub const BASE_BRANCH_ENV: &str = "DEFAULT_BRANCH";

/// Environment variable that turns filename violations into errors when set to `true`.
pub const STRICT_FILENAMES_ENV: &str = "OPS_NOTES_STRICT_FILENAMES";

/// Base branch used when [`BASE_BRANCH_ENV`] is unset or empty.
pub const DEFAULT_BASE_BRANCH: &str = "main";

/// Notes directory, relative to the repository root.
pub const DEFAULT_NOTES_DIR: &str = "docs/notes";

/// Run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct LintConfig {
    /// Branch on `origin` that changed notes are computed against.
    pub base_branch: String,
    /// Treat filename convention violations as build-failing errors.
    pub strict_filenames: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            base_branch: DEFAULT_BASE_BRANCH.to_owned(),
            strict_filenames: false,
        }
    }
}

impl LintConfig {
    /// Read the run configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the run configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// Strict mode is enabled only by the exact value `true`; anything else,
    /// including `TRUE` or `1`, leaves filename violations as warnings.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_branch = lookup(BASE_BRANCH_ENV)
            .filter(|branch| !branch.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_BRANCH.to_owned());
        let strict_filenames = lookup(STRICT_FILENAMES_ENV).as_deref() == Some("true");
        Self {
            base_branch,
            strict_filenames,
        }
    }
}

/// How the notes to lint are chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectionMode {
    /// Prefer notes changed relative to the base branch; scan the whole
    /// directory when git has no answer or nothing relevant changed (default).
    #[default]
    ChangedFirst,
    /// Always scan the whole notes directory, never invoking git.
    FullScan,
}

/// Filesystem-specific source options.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct NotesSourceConfig {
    /// Repository root. Git runs here and note paths are resolved against it.
    pub root: PathBuf,
    /// Notes directory relative to `root` (default: `docs/notes`).
    pub notes_dir: PathBuf,
    /// Selection strategy.
    pub selection_mode: SelectionMode,
}

impl Default for NotesSourceConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            notes_dir: PathBuf::from(DEFAULT_NOTES_DIR),
            selection_mode: SelectionMode::default(),
        }
    }
}

impl NotesSourceConfig {
    /// The notes directory as a path on disk.
    #[must_use]
    pub fn notes_dir_path(&self) -> PathBuf {
        self.root.join(&self.notes_dir)
    }

    /// Resolve a repository-relative path against `root`.
    #[must_use]
    pub fn resolve(&self, rel_path: &Path) -> PathBuf {
        self.root.join(rel_path)
    }
}
