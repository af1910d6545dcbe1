//! File-level text extraction.
//!
//! Turns one source file into an ordered list of raw `Detection`s:
//! parse with swc, walk the AST once with `FileExtractor`, keep every candidate
//! the detector accepts. Deduplication and catalog merging happen in
//! `crate::core::catalog`.

pub mod category;
pub mod file_extractor;
pub mod template;


use std::{fs, sync::Arc};

use anyhow::{Context, Result};
use swc_common::SourceMap;

pub use category::{DispatchRules, NodeCategory, dispatch};
pub use file_extractor::FileExtractor;
pub use template::{TemplateVerdict, analyze_template};

use crate::core::data::Detection;
use crate::core::parsers::jsx::parse_source;

/// Parse `code` and return its detections in traversal order.
pub fn extract_source(
    code: String,
    file_path: &str,
    rules: &DispatchRules<'_>,
) -> Result<Vec<Detection>> {
    let source_map = Arc::new(SourceMap::default());
    let parsed = parse_source(code, file_path, source_map)?;
    Ok(FileExtractor::new(file_path, &parsed.source_map, rules).extract(&parsed.module))
}

pub fn extract_file(file_path: &str, rules: &DispatchRules<'_>) -> Result<Vec<Detection>> {
    let code = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read file: {}", file_path))?;
    extract_source(code, file_path, rules)
}
