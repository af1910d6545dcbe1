//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Extract Chinese text and write the sourcemap and catalog
//! - `init`: Initialize a `.zhscanrc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by scanning commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source tree root to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output directory for artifacts (overrides config file)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Catalog locale, names `<locale>.json` (overrides config file)
    #[arg(long)]
    pub locale: Option<String>,

    /// Abort on the first file that fails to parse
    #[arg(long)]
    pub fail_fast: bool,

    /// Also scan string arguments of ordinary function calls
    #[arg(long)]
    pub scan_call_arguments: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct ScanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Only print the summary, not every occurrence
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub args: ScanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract Chinese text into sourcemap.txt and a <locale>.json catalog
    Scan(ScanCommand),
    /// Initialize a new .zhscanrc.json configuration file
    Init,
}
