//! Caller persona and case subject profiles
//!
//! These are advisory documents for the AI roleplay counterpart: the caller
//! profile scripts who is on the line, the case subject describes the person
//! the call is about. Beyond non-emptiness of names nothing here is
//! validated; the fields are opaque text the dispatcher-side logic never
//! interprets.
//!
//! The case subject is a tagged union keyed by an explicit `kind`
//! discriminator rather than by which fields happen to be present.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Who a persona is: name, age, and whatever else the author recorded
/// (occupation, gender, family structure, school grade, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Remaining free-form descriptive fields, in authored order
    #[serde(flatten)]
    pub details: IndexMap<String, String>,
}

impl Identity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: None,
            details: IndexMap::new(),
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

/// How the caller behaves under stress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityTraits {
    #[serde(default)]
    pub base_disposition: String,
    #[serde(default)]
    pub current_state: String,
    #[serde(default)]
    pub communication_style: String,
    #[serde(default)]
    pub coping_mechanisms: String,
}

/// The person on the line, roleplayed by the AI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerProfile {
    pub identity: Identity,
    #[serde(default)]
    pub personality_traits: PersonalityTraits,
    /// Relationship to the case subject, relevant history, ...
    #[serde(default)]
    pub background_context: IndexMap<String, String>,
}

impl CallerProfile {
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            personality_traits: PersonalityTraits::default(),
            background_context: IndexMap::new(),
        }
    }
}

/// Reported online footprint of a missing person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DigitalPresence {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub social_media: Vec<String>,
    #[serde(default)]
    pub online_activity: String,
}

/// Case subject of a missing-persons scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingPersonReport {
    pub identity: Identity,
    /// Physical description fields (height, build, clothing, ...)
    #[serde(default)]
    pub appearance: IndexMap<String, String>,
    /// Normal schedule and habits
    #[serde(default)]
    pub routine: IndexMap<String, String>,
    /// Places the person is usually found
    #[serde(default)]
    pub usual_locations: Vec<String>,
    #[serde(default)]
    pub digital_presence: DigitalPresence,
}

/// Diagnosed conditions and current medication of a patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExistingConditions {
    #[serde(default)]
    pub diagnosed: Vec<String>,
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
}

/// Symptoms as reported by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SymptomReport {
    #[serde(default)]
    pub primary: Vec<String>,
    #[serde(default)]
    pub secondary: Vec<String>,
    #[serde(default)]
    pub duration: String,
}

/// Medical picture of a patient subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MedicalProfile {
    #[serde(default)]
    pub existing_conditions: ExistingConditions,
    #[serde(default)]
    pub current_symptoms: SymptomReport,
    /// Observable state (consciousness, breathing, skin color, ...)
    #[serde(default)]
    pub physical_state: IndexMap<String, String>,
}

/// Case subject of a medical-emergency scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientReport {
    pub identity: Identity,
    #[serde(default)]
    pub medical_profile: MedicalProfile,
}

/// The person the call is about, varying by scenario type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CaseSubject {
    MissingPerson(MissingPersonReport),
    Patient(PatientReport),
}

impl CaseSubject {
    /// Identity of the subject regardless of variant
    pub fn identity(&self) -> &Identity {
        match self {
            CaseSubject::MissingPerson(report) => &report.identity,
            CaseSubject::Patient(report) => &report.identity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_subject_deserializes_by_kind_discriminator() {
        let json = r#"{
            "kind": "patient",
            "identity": { "name": "Linda Chen", "age": 56, "occupation": "Accountant" },
            "medicalProfile": {
                "existingConditions": { "diagnosed": ["High blood pressure"] }
            }
        }"#;
        let subject: CaseSubject = serde_json::from_str(json).expect("deserialize");
        match &subject {
            CaseSubject::Patient(report) => {
                assert_eq!(report.identity.name, "Linda Chen");
                assert_eq!(report.identity.age, Some(56));
                assert_eq!(
                    report.identity.details.get("occupation").map(String::as_str),
                    Some("Accountant")
                );
            }
            other => panic!("expected patient subject, got {other:?}"),
        }
        assert_eq!(subject.identity().name, "Linda Chen");
    }

    #[test]
    fn missing_person_kind_serializes_camel_case_tag() {
        let subject = CaseSubject::MissingPerson(MissingPersonReport {
            identity: Identity::new("Emily Johnson").with_age(16),
            appearance: IndexMap::new(),
            routine: IndexMap::new(),
            usual_locations: vec!["School".into()],
            digital_presence: DigitalPresence::default(),
        });
        let value = serde_json::to_value(&subject).expect("serialize");
        assert_eq!(value["kind"], "missingPerson");
        assert_eq!(value["usualLocations"][0], "School");
    }

    #[test]
    fn identity_round_trips_flattened_details() {
        let identity = Identity::new("Sarah Johnson")
            .with_age(42)
            .with_detail("occupation", "Elementary school teacher");
        let json = serde_json::to_string(&identity).expect("serialize");
        let back: Identity = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, identity);
    }
}
