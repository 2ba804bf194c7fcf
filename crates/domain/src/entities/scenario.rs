//! Scenario record - one training unit in the catalog
//!
//! A scenario combines narrative context for the trainee, a caller persona
//! and case subject for the AI roleplay counterpart, scripted emotional
//! progression, and a scoring rubric. Records created through the form start
//! as stubs: metadata only, content sections authored later.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::entities::persona::{CallerProfile, CaseSubject};
use crate::value_objects::{AiResponse, Difficulty, EvaluationFramework};

/// Basic scenario information shown on catalog cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioMetadata {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub category: String,
    /// Search keywords, in authored order
    #[serde(default)]
    pub keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub created_by: String,
}

/// Training context framing the situation for the dispatcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioContext {
    #[serde(default)]
    pub situation: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub time_of_day: String,
    /// Scenario-specific environmental factors (weather, response-time
    /// constraints, critical windows, ...) as opaque text
    #[serde(flatten)]
    pub factors: IndexMap<String, String>,
}

/// The unit of content in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRecord {
    pub metadata: ScenarioMetadata,
    #[serde(default)]
    pub scenario_context: ScenarioContext,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller_profile: Option<CallerProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<CaseSubject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_response: Option<AiResponse>,
    #[serde(default)]
    pub evaluation_framework: EvaluationFramework,
}

impl ScenarioRecord {
    /// Create a stub record from the data the creation form captures.
    /// Content sections (context, persona, rubric) are authored later.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        difficulty: Difficulty,
        created_by: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            metadata: ScenarioMetadata {
                title: title.into(),
                description: description.into(),
                image_url: String::new(),
                difficulty,
                category: String::new(),
                keywords: Vec::new(),
                created_at,
                created_by: created_by.into(),
            },
            scenario_context: ScenarioContext::default(),
            caller_profile: None,
            subject: None,
            ai_response: None,
            evaluation_framework: EvaluationFramework::default(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.metadata.category = category.into();
        self
    }

    pub fn with_keywords(mut self, keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.metadata.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_context(mut self, context: ScenarioContext) -> Self {
        self.scenario_context = context;
        self
    }

    pub fn with_caller_profile(mut self, profile: CallerProfile) -> Self {
        self.caller_profile = Some(profile);
        self
    }

    pub fn with_subject(mut self, subject: CaseSubject) -> Self {
        self.subject = Some(subject);
        self
    }

    pub fn with_ai_response(mut self, response: AiResponse) -> Self {
        self.ai_response = Some(response);
        self
    }

    pub fn with_evaluation(mut self, framework: EvaluationFramework) -> Self {
        self.evaluation_framework = framework;
        self
    }

    /// A record with no usable title is a reserved slot, never surfaced to
    /// trainees as playable.
    pub fn is_placeholder(&self) -> bool {
        self.metadata.title.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::persona::Identity;

    fn sample_record(title: &str) -> ScenarioRecord {
        ScenarioRecord::new(
            title,
            "Guide a caller through a kitchen fire",
            Difficulty::Advanced,
            "system",
            Utc::now(),
        )
    }

    #[test]
    fn new_record_is_a_stub_without_content_sections() {
        let record = sample_record("Kitchen Fire");
        assert!(record.caller_profile.is_none());
        assert!(record.subject.is_none());
        assert!(record.ai_response.is_none());
        assert_eq!(record.evaluation_framework.weight_total(), 0);
    }

    #[test]
    fn record_with_title_is_not_a_placeholder() {
        assert!(!sample_record("Kitchen Fire").is_placeholder());
    }

    #[test]
    fn whitespace_only_title_counts_as_placeholder() {
        assert!(sample_record("   ").is_placeholder());
        assert!(sample_record("").is_placeholder());
    }

    #[test]
    fn builder_methods_fill_content_sections() {
        let record = sample_record("Kitchen Fire")
            .with_category("Fire Emergency")
            .with_keywords(["fire", "kitchen"])
            .with_caller_profile(CallerProfile::new(Identity::new("Alex Park")));
        assert_eq!(record.metadata.category, "Fire Emergency");
        assert_eq!(record.metadata.keywords, vec!["fire", "kitchen"]);
        assert_eq!(
            record
                .caller_profile
                .as_ref()
                .map(|p| p.identity.name.as_str()),
            Some("Alex Park")
        );
    }

    #[test]
    fn stub_record_omits_absent_sections_when_serialized() {
        let value = serde_json::to_value(sample_record("Kitchen Fire")).expect("serialize");
        assert!(value.get("callerProfile").is_none());
        assert!(value.get("subject").is_none());
        assert_eq!(value["metadata"]["difficulty"], "advanced");
    }

    #[test]
    fn context_round_trips_flattened_factors() {
        let mut context = ScenarioContext {
            situation: "Grease fire spreading from the stove".into(),
            location: "Apartment kitchen".into(),
            time_of_day: "Dinner time".into(),
            factors: IndexMap::new(),
        };
        context
            .factors
            .insert("weatherConditions".into(), "Clear night".into());
        let json = serde_json::to_string(&context).expect("serialize");
        let back: ScenarioContext = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, context);
        assert_eq!(
            back.factors.get("weatherConditions").map(String::as_str),
            Some("Clear night")
        );
    }
}
