//! zhscan - hardcoded Chinese text extractor for JS/TS/JSX/TSX projects
//!
//! zhscan walks a source tree, finds every string literal, JSX text node,
//! JSX attribute and template literal that contains Chinese characters, and
//! writes two artifacts: `sourcemap.txt`, one line per occurrence, and
//! `<locale>.json`, a deduplicated message catalog ready for translation.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, terminal output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (scan, extract, merge, write)
//! - `issues`: Per-file problems that do not stop a scan

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
