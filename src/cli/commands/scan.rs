use std::io;

use anyhow::Result;

use super::{CommandResult, CommandSummary, ScanSummary};
use crate::{
    cli::{args::ScanCommand, report::print_occurrence_to},
    core::{ArtifactError, ScanContext, write_artifacts},
};

/// Scan the tree, print each new occurrence, then write both artifacts.
///
/// Lifecycle failures of the output directory abort the command; an artifact
/// write failure is carried in the summary so the scan results still print.
pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = ScanContext::new(&args.common)?;

    let mut stdout = io::stdout().lock();
    let outcome = ctx.run(|occurrence| {
        if !args.quiet {
            print_occurrence_to(occurrence, &mut stdout);
        }
    })?;
    drop(stdout);

    let catalog_file_name = ctx.config.catalog_file_name();
    let (artifacts, write_error) =
        match write_artifacts(ctx.output_dir(), &catalog_file_name, &outcome.log) {
            Ok(paths) => (Some(paths), None),
            Err(err @ ArtifactError::Lifecycle(_)) => return Err(err.into()),
            Err(err @ ArtifactError::Write(_)) => (None, Some(err.to_string())),
        };

    Ok(CommandResult {
        summary: CommandSummary::Scan(ScanSummary {
            files_scanned: ctx.files.len(),
            occurrence_count: outcome.log.occurrence_count(),
            entry_count: outcome.log.entry_count(),
            artifacts,
            write_error,
        }),
        parse_errors: outcome.parse_errors,
    })
}
