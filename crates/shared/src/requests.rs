//! Request types crossing the creation boundary

use serde::{Deserialize, Serialize};

use respondright_domain::{Difficulty, ValidDraft};

/// The validated triple the creation form hands to the scenario repository.
/// The receiving side assigns the id and timestamp and merges the new record
/// into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScenarioRequest {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
}

impl From<ValidDraft> for CreateScenarioRequest {
    fn from(draft: ValidDraft) -> Self {
        Self {
            title: draft.title,
            description: draft.description,
            difficulty: draft.difficulty,
        }
    }
}
