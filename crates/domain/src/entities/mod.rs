//! Scenario entities

mod persona;
mod scenario;

pub use persona::{
    CallerProfile, CaseSubject, DigitalPresence, ExistingConditions, Identity, MedicalProfile,
    MissingPersonReport, PatientReport, PersonalityTraits, SymptomReport,
};
pub use scenario::{ScenarioContext, ScenarioMetadata, ScenarioRecord};
