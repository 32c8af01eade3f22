use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check},
};

/// Dispatch to the handler for the parsed command.
///
/// # Returns
/// - `Ok(CommandResult)` with the coverage report to print
/// - `Err` if the command fails (unreadable directory, read or parse errors)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check) => check(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
