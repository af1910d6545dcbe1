use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Scan completed and artifacts were written
/// - `Failure` (1): Scan completed but some files failed to parse, or an artifact write failed
/// - `Error` (2): Command failed (config error, fail-fast abort, output directory error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Scan completed and artifacts were written.
    Success,
    /// Scan completed with per-file parse errors or a failed artifact write.
    Failure,
    /// Command failed before producing a result.
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
