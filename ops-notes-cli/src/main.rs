// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stderr: fatal errors are reported on stderr before exiting.
// - exit: Calling `std::process::exit()` is standard for CLI apps to signal failure to the shell.
#![allow(clippy::print_stderr, clippy::exit)]

mod cli;
mod logging;

fn main() {
    match cli::run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(ops_notes_lint::EXIT_FAILURE);
        }
    }
}
