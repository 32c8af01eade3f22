use std::path::Path;

use anyhow::Result;

use super::CommandResult;
use crate::{
    cli::ExitStatus,
    config::ScanConfig,
    core::{CheckContext, tsdoc::TsDocValidator},
};

/// Check documentation coverage under the current working directory.
pub fn check() -> Result<CommandResult> {
    check_in(Path::new("."))
}

/// Check documentation coverage under `root`.
pub fn check_in(root: &Path) -> Result<CommandResult> {
    let ctx = CheckContext::new(root, &ScanConfig::default())?;
    let report = ctx.coverage(&TsDocValidator)?;

    Ok(CommandResult {
        report,
        exit_status: ExitStatus::Success,
    })
}
