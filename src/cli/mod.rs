//! Command-line interface layer.

use std::process::ExitCode;

use anyhow::Result;

mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Failure.into());
    };

    let result = run::run(args)?;
    report::print(&result);

    Ok(result.exit_status.into())
}
