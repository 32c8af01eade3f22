use crate::{cli::ExitStatus, core::CoverageReport};

/// Result of running a doccov command.
#[derive(Debug)]
pub struct CommandResult {
    /// Coverage rows and totals to print.
    pub report: CoverageReport,
    pub exit_status: ExitStatus,
}
