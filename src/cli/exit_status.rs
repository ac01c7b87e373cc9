use std::process::ExitCode;

/// Exit status of the CLI.
///
/// - `Success` (0): The command ran. Generation failures are reported in the log
///   and summary but still exit successfully.
/// - `Error` (2): The command could not run (invalid config file, existing
///   config on `init`, ...).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The command ran.
    Success,
    /// The command could not run.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
