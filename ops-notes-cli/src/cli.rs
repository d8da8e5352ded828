use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use ops_notes_lint::{
    DEFAULT_NOTES_DIR, LintConfig, NotesSourceConfig, SelectionMode, lint_notes, output,
};

use crate::logging;

#[derive(Parser, Debug)]
#[command(
    name = "lint-ops-notes",
    version,
    about = "Check ops notes for required headings and filename conventions",
    after_help = concat!(
        "Environment:\n",
        "  DEFAULT_BRANCH               base branch to diff against (default: main)\n",
        "  OPS_NOTES_STRICT_FILENAMES   set to 'true' to treat filename violations as errors",
    )
)]
pub struct Cli {
    /// Repository root; git runs here and note paths are relative to it
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Notes directory, relative to the repository root
    #[arg(long, default_value = DEFAULT_NOTES_DIR)]
    pub notes_dir: PathBuf,

    #[arg(long, help = "Base branch to diff against (overrides DEFAULT_BRANCH)")]
    pub base_branch: Option<String>,

    #[arg(
        long,
        help = "Treat filename violations as errors (same as OPS_NOTES_STRICT_FILENAMES=true)"
    )]
    pub strict_filenames: bool,

    /// Lint every note in the directory instead of only changed ones
    #[arg(long)]
    pub all: bool,

    /// When to colour the report
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl Cli {
    /// Layer command-line flags over the environment-derived config.
    ///
    /// `--strict-filenames` can only switch strict mode on.
    #[must_use]
    pub fn lint_config(&self, from_env: LintConfig) -> LintConfig {
        let mut config = from_env;
        if let Some(branch) = &self.base_branch {
            config.base_branch.clone_from(branch);
        }
        if self.strict_filenames {
            config.strict_filenames = true;
        }
        config
    }

    #[must_use]
    pub fn source_config(&self) -> NotesSourceConfig {
        let mut source = NotesSourceConfig::default();
        source.root.clone_from(&self.root);
        source.notes_dir.clone_from(&self.notes_dir);
        source.selection_mode = if self.all {
            SelectionMode::FullScan
        } else {
            SelectionMode::ChangedFirst
        };
        source
    }
}

fn apply_color(mode: ColorMode) {
    let enabled = match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && io::stderr().is_terminal(),
    };
    colored::control::set_override(enabled);
}

/// Run the linter and return the process exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    apply_color(cli.color);

    let config = cli.lint_config(LintConfig::from_env());
    let source = cli.source_config();
    tracing::debug!(?config, ?source, "starting ops notes lint");

    let outcome = lint_notes(&source, &config).context("Ops notes lint aborted")?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    output::write_human(&outcome, &mut stdout.lock(), &mut stderr.lock())
        .context("Failed to write report")?;

    Ok(outcome.exit_code())
}
