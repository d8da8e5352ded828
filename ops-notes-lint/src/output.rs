//! Human-readable rendering of a [`LintOutcome`].
//!
//! Progress, skip notices and filename findings go to `out`; heading errors
//! and the failure line go to `err`. Level tags and the final line are styled
//! with `colored`, so the caller decides whether colour is emitted through
//! `colored::control`.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::config::STRICT_FILENAMES_ENV;
use crate::report::{LintOutcome, LintReport};
use crate::rules::TEMPLATE_FILE;
use crate::rules::headings::REQUIRED_HEADINGS;
use crate::strategy::{SelectionScope, SkipReason};

/// Write the full report for `outcome`.
///
/// # Errors
///
/// Returns an error if writing to either stream fails.
pub fn write_human(
    outcome: &LintOutcome,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<()> {
    writeln!(out, "=== Ops Notes Linter ===")?;
    writeln!(out)?;

    match outcome {
        LintOutcome::Skipped { reason, notes_dir } => {
            write_skip(out, *reason, notes_dir)?;
            writeln!(out)?;
            writeln!(out, "No ops notes to lint. Exiting cleanly.")
        }
        LintOutcome::Linted {
            scope,
            notes_dir,
            report,
        } => {
            match scope {
                SelectionScope::Changed => {
                    writeln!(out, "Linting {} changed ops note(s)...", report.notes_checked)?;
                }
                SelectionScope::Full => {
                    writeln!(out, "Linting {} ops note(s)...", report.notes_checked)?;
                }
            }
            write_filename_violations(out, report)?;
            write_heading_violations(err, report, notes_dir)?;
            write_summary(out, err, report)
        }
    }
}

fn write_skip(out: &mut dyn Write, reason: SkipReason, notes_dir: &Path) -> io::Result<()> {
    let tag = "[SKIP]".dimmed();
    match reason {
        SkipReason::NotesDirMissing => writeln!(
            out,
            "{tag} Directory {} does not exist.",
            notes_dir.display()
        ),
        SkipReason::NoNotes => writeln!(
            out,
            "{tag} No ops notes found in {} (only template/README).",
            notes_dir.display()
        ),
    }
}

fn write_filename_violations(out: &mut dyn Write, report: &LintReport) -> io::Result<()> {
    if report.filename_violations.is_empty() {
        return Ok(());
    }

    let tag = if report.strict_filenames {
        "[ERROR]".red().bold()
    } else {
        "[WARN]".yellow().bold()
    };
    writeln!(out)?;
    writeln!(out, "{tag} Filename convention violations:")?;
    writeln!(out)?;
    for violation in &report.filename_violations {
        writeln!(out, "  {}", violation.note)?;
        writeln!(out, "    -> {}", violation.suggestion)?;
    }
    if !report.strict_filenames {
        writeln!(out)?;
        writeln!(out, "  (Set {STRICT_FILENAMES_ENV}=true to treat as errors)")?;
    }
    Ok(())
}

fn write_heading_violations(
    err: &mut dyn Write,
    report: &LintReport,
    notes_dir: &Path,
) -> io::Result<()> {
    if report.heading_violations.is_empty() {
        return Ok(());
    }

    writeln!(err)?;
    writeln!(err, "{} Missing required headings:", "[ERROR]".red().bold())?;
    writeln!(err)?;
    for violation in &report.heading_violations {
        writeln!(err, "  {}:", violation.note)?;
        for heading in &violation.missing {
            writeln!(err, "    - Missing: {heading}")?;
        }
    }

    writeln!(err)?;
    writeln!(err, "  How to fix:")?;
    writeln!(err, "    1. Copy {}", notes_dir.join(TEMPLATE_FILE).display())?;
    writeln!(err, "    2. Fill in all required sections")?;
    writeln!(err, "    3. Ensure these headings exist:")?;
    for heading in REQUIRED_HEADINGS {
        writeln!(err, "       {heading}")?;
    }
    Ok(())
}

fn write_summary(out: &mut dyn Write, err: &mut dyn Write, report: &LintReport) -> io::Result<()> {
    if report.ok() {
        writeln!(out)?;
        writeln!(out, "{}", "All ops notes are valid.".green())
    } else {
        writeln!(err)?;
        writeln!(err, "{}", "Ops Notes lint FAILED.".red().bold())
    }
}
