//! Bundled scenario document loading
//!
//! The catalog ships as one packaged JSON document: a version, a
//! last-updated stamp, and an ordered mapping of scenario id to either an
//! authored record or a reserved (empty) slot. A malformed or missing
//! document is a fatal startup error surfaced to the operator; it is never a
//! runtime condition.

use std::path::Path;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use respondright_domain::{ScenarioId, ScenarioRecord};

/// One slot in the bundled document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScenarioEntry {
    /// A fully authored scenario
    Authored(Box<ScenarioRecord>),
    /// A reserved-but-unauthored slot, serialized as an empty object.
    /// Must never surface to trainees as playable.
    Reserved {},
}

// Hand-written so only a genuinely empty object counts as reserved. With a
// derived untagged enum the `Reserved {}` arm would match any object,
// turning a typo'd authored record into a silently vanishing slot instead
// of a fatal parse error.
impl<'de> Deserialize<'de> for ScenarioEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let fields = serde_json::Map::deserialize(deserializer)?;
        if fields.is_empty() {
            return Ok(ScenarioEntry::Reserved {});
        }
        let record = ScenarioRecord::deserialize(serde_json::Value::Object(fields))
            .map_err(serde::de::Error::custom)?;
        Ok(ScenarioEntry::Authored(Box::new(record)))
    }
}

impl ScenarioEntry {
    pub fn as_authored(&self) -> Option<&ScenarioRecord> {
        match self {
            ScenarioEntry::Authored(record) => Some(record),
            ScenarioEntry::Reserved {} => None,
        }
    }
}

/// The packaged scenario document, schema version and all
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDocument {
    pub version: String,
    pub last_updated: DateTime<Utc>,
    /// Insertion order of this map is the catalog's stable listing order
    pub scenarios: IndexMap<ScenarioId, ScenarioEntry>,
}

/// Fatal startup failure while loading the bundled document
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("Failed to read scenario document at {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Scenario document at {path} is malformed: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ScenarioDocument {
    /// Load and parse the bundled document from packaged storage.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogLoadError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let document: ScenarioDocument =
            serde_json::from_str(&raw).map_err(|source| CatalogLoadError::Malformed {
                path: path.display().to_string(),
                source,
            })?;
        tracing::info!(
            version = %document.version,
            scenarios = document.scenarios.len(),
            authored = document.authored_count(),
            "Loaded scenario document"
        );
        Ok(document)
    }

    pub fn authored_count(&self) -> usize {
        self.scenarios
            .values()
            .filter(|entry| entry.as_authored().is_some())
            .count()
    }
}
