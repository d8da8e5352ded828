//! Change-scoped source: asks git which files differ from the base branch.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

/// Answer to "which files changed relative to the base branch?".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangedFiles {
    /// Repository-relative paths, as printed by `git diff --name-only`.
    Available(Vec<String>),
    /// Git could not answer; carries the reason for logging.
    Unavailable(String),
}

/// Query `git diff --name-only origin/<base_branch>...HEAD` in `repo_root`.
///
/// Any failure (git missing, not a repository, unknown base ref, non-UTF-8
/// output) yields [`ChangedFiles::Unavailable`]; nothing is retried.
#[must_use]
pub fn changed_files(repo_root: &Path, base_branch: &str) -> ChangedFiles {
    let range = format!("origin/{base_branch}...HEAD");
    debug!(%range, root = %repo_root.display(), "querying changed files");

    let output = match Command::new("git")
        .args(["diff", "--name-only", &range])
        .current_dir(repo_root)
        .stdin(Stdio::null())
        .output()
    {
        Ok(output) => output,
        Err(err) => return ChangedFiles::Unavailable(format!("failed to run git: {err}")),
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return ChangedFiles::Unavailable(format!(
            "git diff exited with {}: {}",
            output.status,
            stderr.trim()
        ));
    }

    match String::from_utf8(output.stdout) {
        Ok(text) => ChangedFiles::Available(parse_name_only(&text)),
        Err(err) => ChangedFiles::Unavailable(format!("git diff output is not UTF-8: {err}")),
    }
}

/// Split `--name-only` output into paths, dropping blank lines.
#[must_use]
pub fn parse_name_only(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
