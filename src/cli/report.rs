//! Terminal output for command results.
//!
//! Every printer has a `_to` variant taking a writer so output can be
//! captured in tests.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, ScanSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::Occurrence;
use crate::issues::ParseErrorIssue;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result: parse warnings and errors to stderr, summary to stdout.
pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Scan(summary) => {
            print_parse_errors_to(&result.parse_errors, verbose, &mut io::stderr().lock());
            print_scan_summary_to(summary, &mut io::stdout().lock());
            if let Some(ref error) = summary.write_error {
                print_write_error_to(error, &mut io::stderr().lock());
            }
        }
        CommandSummary::Init(summary) => print_init_to(summary, &mut io::stdout().lock()),
    }
}

/// Diagnostic line for a newly logged occurrence.
pub fn print_occurrence_to<W: Write>(occurrence: &Occurrence, writer: &mut W) {
    let _ = writeln!(writer, "{}", occurrence.diagnostic_line());
}

/// Print a warning about files that could not be parsed.
///
/// Verbose runs already printed each failure with its error as it happened,
/// so only the count is repeated.
pub fn print_parse_errors_to<W: Write>(errors: &[ParseErrorIssue], verbose: bool, writer: &mut W) {
    if errors.is_empty() {
        return;
    }
    let _ = writeln!(
        writer,
        "{} {} file(s) could not be parsed{}",
        "warning:".bold().yellow(),
        errors.len(),
        if verbose { "" } else { ":" }
    );
    if verbose {
        return;
    }
    for issue in errors {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), issue.file_path);
    }
}

pub fn print_scan_summary_to<W: Write>(summary: &ScanSummary, writer: &mut W) {
    let mark = if summary.write_error.is_some() {
        FAILURE_MARK.red()
    } else {
        SUCCESS_MARK.green()
    };
    let _ = writeln!(
        writer,
        "{} Scanned {} source {}",
        mark,
        summary.files_scanned,
        if summary.files_scanned == 1 { "file" } else { "files" }
    );
    let _ = writeln!(
        writer,
        "  {} {}",
        summary.occurrence_count.to_string().bold(),
        if summary.occurrence_count == 1 {
            "occurrence"
        } else {
            "occurrences"
        }
    );
    let _ = writeln!(
        writer,
        "  {} unique catalog {}",
        summary.entry_count.to_string().bold(),
        if summary.entry_count == 1 { "entry" } else { "entries" }
    );
    if let Some(ref paths) = summary.artifacts {
        let _ = writeln!(
            writer,
            "  {} {}, {}",
            "wrote".dimmed(),
            paths.sourcemap.display(),
            paths.catalog.display()
        );
    }
}

pub fn print_write_error_to<W: Write>(error: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "error:".bold().red(), error);
    let _ = writeln!(
        writer,
        "{} previous artifacts were left unchanged",
        "note:".bold()
    );
}

pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} already exists",
            "error:".bold().red(),
            CONFIG_FILE_NAME
        );
    }
}
