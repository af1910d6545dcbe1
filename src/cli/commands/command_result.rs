use crate::{cli::ExitStatus, core::ArtifactPaths, issues::ParseErrorIssue};

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ScanSummary {
    pub files_scanned: usize,
    pub occurrence_count: usize,
    pub entry_count: usize,
    /// Written artifacts, `None` if the write failed.
    pub artifacts: Option<ArtifactPaths>,
    /// Artifact write failure; prior artifacts were left untouched.
    pub write_error: Option<String>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running zhscan commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Files that failed to parse (isolated mode only).
    pub parse_errors: Vec<ParseErrorIssue>,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Scan(summary) => {
                if summary.write_error.is_some() || !self.parse_errors.is_empty() {
                    ExitStatus::Failure
                } else {
                    ExitStatus::Success
                }
            }
            CommandSummary::Init(summary) => {
                if summary.created {
                    ExitStatus::Success
                } else {
                    ExitStatus::Failure
                }
            }
        }
    }
}
