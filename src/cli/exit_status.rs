use std::process::ExitCode;

/// Process exit status of `doccov`.
///
/// Coverage never affects the status: a `check` that prints its table exits
/// with `Success` however many declarations are undocumented.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// 0: the coverage table was printed.
    Success,
    /// 1: invoked without a subcommand, so only the help text was printed.
    Failure,
    /// 2: the run was aborted because the directory could not be resolved or
    /// a source file could not be read or parsed.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::from(ExitStatus::Success), ExitCode::from(0));
        assert_eq!(ExitCode::from(ExitStatus::Failure), ExitCode::from(1));
        assert_eq!(ExitCode::from(ExitStatus::Error), ExitCode::from(2));
    }
}
