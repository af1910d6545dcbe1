//! Occurrence log and text-keyed catalog.
//!
//! `ExtractionLog` is the single accumulator of a scan run. Detections are
//! reported in traversal order; each one either becomes a new `Occurrence`
//! (appended to the log and merged into the catalog) or is dropped as already
//! seen.

use std::collections::{HashMap, HashSet};

use crate::core::data::{
    CatalogEntry, ContextKind, Detection, Location, Occurrence, SourceRef,
};

/// Assigns the `id` of a newly created catalog entry.
pub trait IdGenerator: Send + Sync {
    fn assign(&self, text: &str) -> String;
}

/// `id = text` when `auto_assign` is set, otherwise an empty id.
#[derive(Debug, Clone, Copy)]
pub struct DefaultIdGenerator {
    pub auto_assign: bool,
}

impl IdGenerator for DefaultIdGenerator {
    fn assign(&self, text: &str) -> String {
        if self.auto_assign {
            text.to_owned()
        } else {
            String::new()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RawKey {
    text: String,
    kind: ContextKind,
    location: Location,
}

pub struct ExtractionLog {
    occurrences: Vec<Occurrence>,
    seen: HashSet<RawKey>,
    entries: Vec<CatalogEntry>,
    /// Normalized text -> index into `entries`.
    index: HashMap<String, usize>,
    id_generator: Box<dyn IdGenerator>,
}

impl ExtractionLog {
    pub fn new(auto_assign_id: bool) -> Self {
        Self::with_id_generator(Box::new(DefaultIdGenerator {
            auto_assign: auto_assign_id,
        }))
    }

    pub fn with_id_generator(id_generator: Box<dyn IdGenerator>) -> Self {
        Self {
            occurrences: Vec::new(),
            seen: HashSet::new(),
            entries: Vec::new(),
            index: HashMap::new(),
            id_generator,
        }
    }

    /// Record a detection.
    ///
    /// Returns the new occurrence, or `None` if an equivalent occurrence was
    /// already logged (see `ContextKind::dedup_peers`).
    pub fn report(&mut self, detection: Detection) -> Option<&Occurrence> {
        let text = detection.kind.normalize(&detection.text).to_owned();

        if self.already_seen(&text, detection.kind, &detection.location) {
            return None;
        }

        self.seen.insert(RawKey {
            text: text.clone(),
            kind: detection.kind,
            location: detection.location.clone(),
        });

        let source = SourceRef {
            kind: detection.kind,
            location: detection.location.clone(),
        };
        match self.index.get(&text) {
            Some(&i) => self.entries[i].sources.push(source),
            None => {
                self.index.insert(text.clone(), self.entries.len());
                self.entries.push(CatalogEntry {
                    id: self.id_generator.assign(&text),
                    default_message: text.clone(),
                    sources: vec![source],
                });
            }
        }

        self.occurrences.push(Occurrence {
            text,
            kind: detection.kind,
            location: detection.location,
            origin: detection.origin,
        });
        self.occurrences.last()
    }

    fn already_seen(&self, text: &str, kind: ContextKind, location: &Location) -> bool {
        kind.dedup_peers().iter().any(|&peer| {
            self.seen.contains(&RawKey {
                text: text.to_owned(),
                kind: peer,
                location: location.clone(),
            })
        })
    }

    /// Retained occurrences in the order they were first reported.
    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    /// Catalog entries in first-insertion order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn entry(&self, text: &str) -> Option<&CatalogEntry> {
        self.index.get(text).map(|&i| &self.entries[i])
    }

    pub fn occurrence_count(&self) -> usize {
        self.occurrences.len()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for ExtractionLog {
    fn default() -> Self {
        Self::new(true)
    }
}
