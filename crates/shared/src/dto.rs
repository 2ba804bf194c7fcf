//! Read-side DTOs for catalog listings

use serde::{Deserialize, Serialize};

use respondright_domain::{Difficulty, ScenarioId, ScenarioRecord};

/// Card data for one playable scenario on the home feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    pub id: ScenarioId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub category: String,
}

impl ScenarioSummary {
    pub fn from_record(id: ScenarioId, record: &ScenarioRecord) -> Self {
        Self {
            id,
            title: record.metadata.title.clone(),
            description: record.metadata.description.clone(),
            image_url: record.metadata.image_url.clone(),
            difficulty: record.metadata.difficulty,
            category: record.metadata.category.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn summary_carries_card_fields_from_metadata() {
        let record = ScenarioRecord::new(
            "Missing Loved One",
            "Roleplay as a distressed parent",
            Difficulty::Intermediate,
            "system",
            Utc::now(),
        )
        .with_category("Missing Persons");
        let summary = ScenarioSummary::from_record(ScenarioId::from("1"), &record);
        assert_eq!(summary.id.as_str(), "1");
        assert_eq!(summary.title, "Missing Loved One");
        assert_eq!(summary.category, "Missing Persons");
        assert_eq!(summary.difficulty, Difficulty::Intermediate);
    }
}
