//! Extraction engine.
//!
//! A scan runs in two phases:
//!
//! 1. **Extract** (parallel, per file): `file_scanner` lists the sources,
//!    `parsers::jsx` parses each one and `extract::FileExtractor` walks the AST
//!    into raw `Detection`s.
//! 2. **Merge** (sequential, file-list order): `catalog::ExtractionLog`
//!    normalizes, deduplicates and folds detections into the occurrence log and
//!    the catalog. `artifacts` renders and writes both.
//!
//! `context::ScanContext` drives both phases.

pub mod artifacts;
pub mod catalog;
pub mod context;
pub mod data;
pub mod detect;
pub mod extract;
pub mod file_scanner;
pub mod parsers;

pub use artifacts::{ArtifactError, ArtifactPaths, write_artifacts};
pub use catalog::{DefaultIdGenerator, ExtractionLog, IdGenerator};
pub use context::{ScanContext, ScanOutcome};
pub use data::{CatalogEntry, ContextKind, Detection, Location, NodeOrigin, Occurrence, SourceRef};
pub use detect::TextDetector;
