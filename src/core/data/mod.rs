//! Data types shared by the extraction pipeline.
//!
//! - `occurrence`: contexts, locations, raw detections and retained occurrences
//! - `catalog_entry`: deduplicated catalog records

pub mod catalog_entry;
pub mod occurrence;

pub use catalog_entry::*;
pub use occurrence::*;
