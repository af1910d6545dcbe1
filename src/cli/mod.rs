//! Command-line interface layer.
//!
//! Parses arguments, runs a command and prints its result. The engine in
//! `crate::core` never prints artifacts itself, so zhscan can be used as a
//! library.

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

use std::process::ExitCode;

use anyhow::Result;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(result.exit_status().into())
}
