//! Command-line interface.
//!
//! Flags are handled before the terminal is touched:
//!
//! ```ignore
//! use headlines::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! let options = run_cli_command(command); // exits for --version / --help
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, RunOptions};
pub use version::{handle_help_command, handle_version_command, VERSION};

/// Run an informational command, or return the options for a TUI run.
///
/// `Version` and `Help` print and exit the process.
pub fn run_cli_command(command: CliCommand) -> RunOptions {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::Run(options) => options,
    }
}
