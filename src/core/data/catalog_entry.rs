use serde::Serialize;

use super::occurrence::{ContextKind, Location};

/// One place a catalog entry's text was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceRef {
    #[serde(rename = "type")]
    pub kind: ContextKind,
    pub location: Location,
}

/// Deduplicated catalog record, keyed by its normalized text.
///
/// Serializes as `{ "id", "defaultMessage", "source": [{ "type", "location" }] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub default_message: String,
    #[serde(rename = "source")]
    pub sources: Vec<SourceRef>,
}
