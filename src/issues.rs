//! Problems found while scanning that do not stop the run.

use std::fmt;

/// A source file that could not be read or parsed.
///
/// Recorded instead of aborting unless `failFast` is enabled.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl fmt::Display for ParseErrorIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.file_path, self.error)
    }
}
