//! RespondRight Domain - scenario records, creation drafts, and the
//! invariants that govern them.
//!
//! This crate is pure data and rules: no I/O, no async, no logging. The
//! engine crate owns catalog loading and storage; the player crate owns the
//! screen-side flows.

pub mod draft;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use draft::{
    DraftAction, DraftErrors, DraftField, ScenarioDraft, ValidDraft, DESCRIPTION_REQUIRED,
    DIFFICULTY_REQUIRED, TITLE_REQUIRED,
};
pub use entities::{
    CallerProfile, CaseSubject, DigitalPresence, ExistingConditions, Identity, MedicalProfile,
    MissingPersonReport, PatientReport, PersonalityTraits, ScenarioContext, ScenarioMetadata,
    ScenarioRecord, SymptomReport,
};
pub use error::DomainError;
pub use ids::ScenarioId;
pub use value_objects::{
    AiResponse, ConditionGroup, Difficulty, EmotionalProgression, EmotionalState,
    EvaluationFramework, ScoringCriterion, EXPECTED_WEIGHT_TOTAL,
};
