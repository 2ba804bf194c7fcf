//! In-memory scenario catalog
//!
//! Built once from the bundled document at startup. Lookups for unknown or
//! reserved ids answer `NotFound` rather than failing hard; listing skips
//! placeholders by the no-title rule and keeps document insertion order.

use indexmap::IndexMap;

use respondright_domain::{Difficulty, ScenarioId, ScenarioRecord};
use respondright_shared::ScenarioSummary;

use crate::infrastructure::bundle::ScenarioDocument;

/// Error type for catalog operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Scenario not found: {0}")]
    NotFound(ScenarioId),
    #[error("Scenario id already exists: {0}")]
    DuplicateId(ScenarioId),
    #[error("Scenario {id} violates catalog rules: {reason}")]
    Rejected { id: ScenarioId, reason: String },
}

/// Keyed collection of scenario records
#[derive(Debug, Clone, Default)]
pub struct ScenarioCatalog {
    records: IndexMap<ScenarioId, ScenarioRecord>,
}

impl ScenarioCatalog {
    /// Build a catalog from a parsed bundled document. Reserved slots are
    /// dropped here; their ids stay free for future authoring.
    pub fn from_document(document: &ScenarioDocument) -> Self {
        let records = document
            .scenarios
            .iter()
            .filter_map(|(id, entry)| {
                entry
                    .as_authored()
                    .map(|record| (id.clone(), record.clone()))
            })
            .collect();
        Self { records }
    }

    /// Like `from_document`, but rejects authored records whose scoring
    /// weights do not sum to 100. Opt-in via engine settings.
    pub fn from_document_strict(document: &ScenarioDocument) -> Result<Self, CatalogError> {
        let catalog = Self::from_document(document);
        for (id, record) in &catalog.records {
            if let Err(err) = record.evaluation_framework.check_weights() {
                return Err(CatalogError::Rejected {
                    id: id.clone(),
                    reason: err.to_string(),
                });
            }
        }
        Ok(catalog)
    }

    /// Look up one playable scenario. Reserved and unknown ids both answer
    /// `NotFound`; a reserved slot is not playable.
    pub fn get(&self, id: &ScenarioId) -> Result<&ScenarioRecord, CatalogError> {
        self.records
            .get(id)
            .filter(|record| !record.is_placeholder())
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    /// All playable scenarios in insertion order
    pub fn list(&self) -> impl Iterator<Item = (&ScenarioId, &ScenarioRecord)> {
        self.records
            .iter()
            .filter(|(_, record)| !record.is_placeholder())
    }

    pub fn list_by_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = (&'a ScenarioId, &'a ScenarioRecord)> {
        self.list()
            .filter(move |(_, record)| record.metadata.category == category)
    }

    pub fn list_by_difficulty(
        &self,
        level: Difficulty,
    ) -> impl Iterator<Item = (&ScenarioId, &ScenarioRecord)> {
        self.list()
            .filter(move |(_, record)| record.metadata.difficulty == level)
    }

    /// Home-feed card data for every playable scenario
    pub fn summaries(&self) -> Vec<ScenarioSummary> {
        self.list()
            .map(|(id, record)| ScenarioSummary::from_record(id.clone(), record))
            .collect()
    }

    /// Append a new record under a fresh id. Existing ids are never
    /// overwritten; authoring over a live scenario is a hard error.
    pub fn insert(&mut self, id: ScenarioId, record: ScenarioRecord) -> Result<(), CatalogError> {
        if self.records.contains_key(&id) {
            return Err(CatalogError::DuplicateId(id));
        }
        self.records.insert(id, record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
