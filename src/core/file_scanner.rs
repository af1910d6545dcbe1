use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Dependency cache directory, never scanned.
const DEPENDENCY_DIR: &str = "node_modules";

/// Any underscore in the root-relative path marks test fixtures (`__tests__`,
/// `_fixtures`, `foo_test.js`).
const FIXTURE_MARKER: char = '_';

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
pub struct ScanResult {
    /// Source files in lexicographic order.
    pub files: Vec<String>,
    pub skipped_count: usize,
}

pub fn scan_files(base_dir: &Path, exclude_patterns: &[String], verbose: bool) -> ScanResult {
    let mut files: Vec<String> = Vec::new();
    let mut skipped_count = 0;

    // Separate exclude patterns into literal paths and glob patterns
    let mut literal_exclude_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in exclude_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid exclude pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_exclude_paths.push(PathBuf::from(p.trim_end_matches('/')));
        }
    }

    let walker = WalkDir::new(base_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.file_name() != DEPENDENCY_DIR);

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file() || !is_scannable_file(path) {
            continue;
        }

        let relative = path.strip_prefix(base_dir).unwrap_or(path);
        let relative_str = to_slash(relative);

        if is_conventionally_excluded(&relative_str) {
            continue;
        }

        // Literal exclude paths match as prefixes
        if literal_exclude_paths
            .iter()
            .any(|exclude| relative.starts_with(exclude))
        {
            continue;
        }

        if glob_patterns.iter().any(|p| p.matches(&relative_str)) {
            continue;
        }

        // A `.` root reports plain relative paths (`src/app.tsx`, not `./src/app.tsx`).
        files.push(to_slash(path.strip_prefix(".").unwrap_or(path)));
    }

    files.sort();
    files.dedup();

    ScanResult {
        files,
        skipped_count,
    }
}

fn is_conventionally_excluded(relative: &str) -> bool {
    relative.contains(DEPENDENCY_DIR) || relative.contains(FIXTURE_MARKER)
}

fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn is_scannable_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("tsx" | "ts" | "jsx" | "js")
    )
}
