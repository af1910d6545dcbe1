//! Artifact rendering and writing.
//!
//! Both artifacts are rendered in memory, written into a scoped staging
//! directory next to the output directory, and only then swapped into place.
//! A failed write drops the staging directory and leaves the previous
//! artifact pair untouched.

use std::{
    ffi::OsStr,
    fmt, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::core::catalog::ExtractionLog;
use crate::core::data::{CatalogEntry, Occurrence};

pub const SOURCEMAP_FILE_NAME: &str = "sourcemap.txt";

const STAGING_PREFIX: &str = ".zhscan-staging-";

/// Failure while writing artifacts.
#[derive(Debug)]
pub enum ArtifactError {
    /// The output directory could not be prepared, removed or replaced.
    Lifecycle(anyhow::Error),
    /// An artifact could not be rendered or written. Prior artifacts are intact.
    Write(anyhow::Error),
}

impl fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactError::Lifecycle(e) => write!(f, "Output directory error: {:#}", e),
            ArtifactError::Write(e) => write!(f, "Artifact write failed: {:#}", e),
        }
    }
}

impl std::error::Error for ArtifactError {}

/// Where the artifacts ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub sourcemap: PathBuf,
    pub catalog: PathBuf,
}

/// One line per occurrence: `text#kind#file#line#column#index`.
pub fn render_sourcemap(occurrences: &[Occurrence]) -> String {
    occurrences
        .iter()
        .enumerate()
        .map(|(i, occ)| {
            format!(
                "{}#{}#{}#{}\n",
                escape_line_breaks(&occ.text),
                occ.kind,
                occ.location,
                i
            )
        })
        .collect()
}

/// Tab-indented JSON array of catalog entries.
pub fn render_catalog(entries: &[CatalogEntry]) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    entries
        .serialize(&mut ser)
        .context("Failed to serialize catalog")?;
    String::from_utf8(buf).context("Catalog is not valid UTF-8")
}

fn escape_line_breaks(text: &str) -> String {
    text.replace('\r', "\\r").replace('\n', "\\n")
}

/// Write `sourcemap.txt` and `<catalog_file_name>` into a freshly recreated
/// `output_dir`.
pub fn write_artifacts(
    output_dir: &Path,
    catalog_file_name: &str,
    log: &ExtractionLog,
) -> Result<ArtifactPaths, ArtifactError> {
    let sourcemap = render_sourcemap(log.occurrences());
    let catalog = render_catalog(log.entries()).map_err(ArtifactError::Write)?;

    let parent = match output_dir.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)
        .with_context(|| format!("Failed to create directory: {}", parent.display()))
        .map_err(ArtifactError::Lifecycle)?;

    let staging = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempdir_in(&parent)
        .with_context(|| format!("Failed to create staging directory in {}", parent.display()))
        .map_err(ArtifactError::Lifecycle)?;

    stage_file(staging.path(), SOURCEMAP_FILE_NAME, &sourcemap).map_err(ArtifactError::Write)?;
    stage_file(staging.path(), catalog_file_name, &catalog).map_err(ArtifactError::Write)?;

    if output_dir.exists() {
        fs::remove_dir_all(output_dir)
            .with_context(|| format!("Failed to remove directory: {}", output_dir.display()))
            .map_err(ArtifactError::Lifecycle)?;
    }
    fs::rename(staging.path(), output_dir)
        .with_context(|| {
            format!(
                "Failed to rename {} → {}",
                staging.path().display(),
                output_dir.display()
            )
        })
        .map_err(ArtifactError::Lifecycle)?;
    // Renamed away; nothing left for the guard to clean up.
    let _ = staging.keep();

    Ok(ArtifactPaths {
        sourcemap: output_dir.join(SOURCEMAP_FILE_NAME),
        catalog: output_dir.join(catalog_file_name),
    })
}

fn stage_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    if Path::new(name).file_name() != Some(OsStr::new(name)) {
        return Err(anyhow!("Invalid artifact file name: \"{}\"", name));
    }
    let path = dir.join(name);
    fs::write(&path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}
