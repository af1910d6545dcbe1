use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        catalog::ExtractionLog,
        data::Occurrence,
        detect::TextDetector,
        extract::{DispatchRules, extract_file},
        file_scanner::scan_files,
    },
    issues::ParseErrorIssue,
};

/// Everything a scan run produced.
pub struct ScanOutcome {
    /// Occurrence log and catalog, in first-encounter order.
    pub log: ExtractionLog,
    /// Files that failed to read or parse (empty in fail-fast mode).
    pub parse_errors: Vec<ParseErrorIssue>,
}

/// Scan run orchestrator.
///
/// Holds the merged configuration and the file list. `run` parses and
/// traverses files in parallel, each into a file-local detection list, then
/// merges those lists into one `ExtractionLog` sequentially in file-list order.
/// The resulting log order is the same as a single sequential pass.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--output-dir out`)
/// 2. `.zhscanrc.json` config file
/// 3. Built-in defaults
pub struct ScanContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Scan root.
    pub root_dir: PathBuf,

    /// Source files to scan, sorted.
    pub files: Vec<String>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    detector: TextDetector,
}

impl ScanContext {
    /// Create a new `ScanContext` from command line arguments.
    ///
    /// Loads configuration starting from the scan root, applies CLI overrides
    /// and enumerates the source files.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args.path.clone();

        if !root_dir.is_dir() {
            anyhow::bail!("Scan root is not a directory: {}", root_dir.display());
        }

        let config_result = load_config(&root_dir)?;

        if verbose && !config_result.from_file {
            eprintln!("Note: No .zhscanrc.json found, using default configuration");
        }

        let mut config = config_result.config;

        if let Some(ref output_dir) = common_args.output_dir {
            config.output_dir = output_dir.to_string_lossy().to_string();
        }
        if let Some(ref locale) = common_args.locale {
            config.locale = locale.clone();
        }
        if common_args.fail_fast {
            config.fail_fast = true;
        }
        if common_args.scan_call_arguments {
            config.scan_call_arguments = true;
        }

        Self::from_config(root_dir, config, verbose)
    }

    /// Create a context from an already merged configuration.
    pub fn from_config(root_dir: PathBuf, config: Config, verbose: bool) -> Result<Self> {
        let detector = config
            .detector()
            .context("Invalid 'scriptDetectionPattern'")?;

        let scan_result = scan_files(&root_dir, &config.exclude_patterns, verbose);

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            verbose,
            detector,
        })
    }

    /// Output directory for artifacts, relative to the working directory.
    pub fn output_dir(&self) -> &Path {
        Path::new(&self.config.output_dir)
    }

    /// Run the scan with the default id assignment.
    ///
    /// `on_occurrence` is called once for every newly logged occurrence, in log order.
    pub fn run<F>(&self, on_occurrence: F) -> Result<ScanOutcome>
    where
        F: FnMut(&Occurrence),
    {
        self.run_with_log(ExtractionLog::new(self.config.auto_assign_id), on_occurrence)
    }

    /// Run the scan into a caller-supplied log (e.g. one with a custom `IdGenerator`).
    pub fn run_with_log<F>(&self, mut log: ExtractionLog, mut on_occurrence: F) -> Result<ScanOutcome>
    where
        F: FnMut(&Occurrence),
    {
        let rules = DispatchRules::from_config(&self.config, &self.detector);

        // Parallel read + parse + traverse; per-file results keep file-list order.
        let results: Vec<_> = self
            .files
            .par_iter()
            .map(|file_path| (file_path, extract_file(file_path, &rules)))
            .collect();

        let mut parse_errors = Vec::new();

        for (file_path, result) in results {
            match result {
                Ok(detections) => {
                    for detection in detections {
                        if let Some(occurrence) = log.report(detection) {
                            on_occurrence(occurrence);
                        }
                    }
                }
                Err(e) => {
                    if self.config.fail_fast {
                        return Err(e.context(format!("Scan aborted at {}", file_path)));
                    }
                    if self.verbose {
                        eprintln!("{} {} - {:#}", "warning:".bold().yellow(), file_path, e);
                    }
                    parse_errors.push(ParseErrorIssue {
                        file_path: file_path.clone(),
                        error: format!("{:#}", e),
                    });
                }
            }
        }

        Ok(ScanOutcome { log, parse_errors })
    }
}
