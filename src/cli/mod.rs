//! Command-line interface.
//!
//! `main` parses arguments first. Helper subcommands run to completion and
//! exit; with no subcommand the dashboard starts.
//!
//! ```ignore
//! use socialdash::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command, &ctx).await {
//!     // helper ran, exit with its result
//! }
//! ```

pub mod args;
pub mod commands;

pub use args::{parse_args, CliCommand, USAGE};
pub use commands::execute;

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::context::AppContext;
use crate::traits::HttpClient;

/// Current version, from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_string() -> String {
    format!("socialdash {}", VERSION)
}

/// Whether `command` runs without touching the network or the terminal.
pub fn is_local(command: &CliCommand) -> bool {
    matches!(
        command,
        CliCommand::Version | CliCommand::Help | CliCommand::Invalid(_)
    )
}

/// Run `command` if it is a CLI command.
///
/// # Returns
///
/// * `None` - the command is `RunTui`
/// * `Some(Ok(()))` - the command ran and printed its output
/// * `Some(Err(e))` - the command failed
pub async fn run_cli_command<C: HttpClient>(
    command: &CliCommand,
    ctx: &AppContext<C>,
) -> Option<Result<()>> {
    match command {
        CliCommand::RunTui => None,
        CliCommand::Version => {
            println!("{}", version_string());
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Invalid(message) => Some(Err(eyre!("{}\n\n{}", message, USAGE))),
        other => Some(match execute(other, ctx).await {
            Ok(output) => {
                println!("{}", output);
                Ok(())
            }
            Err(err) => {
                tracing::error!("{} failed [{}]: {}", command_name(other), err.error_code(), err);
                Err(eyre!("{}\nhint: {}", err, err.category().recovery_hint()))
            }
        }),
    }
}

fn command_name(command: &CliCommand) -> &'static str {
    match command {
        CliCommand::Generate { .. } => "generate",
        CliCommand::Variations { .. } => "variations",
        CliCommand::Translate { .. } => "translate",
        CliCommand::Detect { .. } => "detect",
        CliCommand::BatchTranslate { .. } => "batch-translate",
        CliCommand::Infer { .. } => "infer",
        CliCommand::UseSuggestion { .. } => "use-suggestion",
        CliCommand::PostFromSuggestion { .. } => "post-from-suggestion",
        CliCommand::Version => "version",
        CliCommand::Help => "help",
        CliCommand::RunTui => "dashboard",
        CliCommand::Invalid(_) => "invalid",
    }
}
