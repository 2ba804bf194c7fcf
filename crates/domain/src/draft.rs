//! Creation-form draft and validation
//!
//! The draft is a plain value owned by the screen that created it, updated
//! through a pure reducer so the form logic is unit-testable without any
//! rendering environment. Validation accumulates one message per failing
//! field; submission is all-or-nothing.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::Difficulty;

/// Inline message when a required text field is empty
pub const TITLE_REQUIRED: &str = "Title is required";
/// Inline message when the description is empty
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
/// Inline message when no difficulty has been chosen
pub const DIFFICULTY_REQUIRED: &str = "Please select a difficulty level";

/// Fields of the creation form that can carry an inline error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Title,
    Description,
    Difficulty,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DraftField::Title => "title",
            DraftField::Description => "description",
            DraftField::Difficulty => "difficulty",
        };
        write!(f, "{name}")
    }
}

/// Field -> inline message, empty when the draft is valid
pub type DraftErrors = BTreeMap<DraftField, String>;

/// User interactions with the creation form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftAction {
    SetTitle(String),
    SetDescription(String),
    /// Selecting the already-selected level keeps it selected (no toggle-off)
    SelectDifficulty(Difficulty),
    /// Discard all input, back to the mount state
    Clear,
}

/// Transient, unsaved input for a to-be-created scenario
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScenarioDraft {
    pub title: String,
    pub description: String,
    /// None until the trainee picks a level
    pub difficulty: Option<Difficulty>,
    /// Inline errors from the last `check`, keyed by field
    pub errors: DraftErrors,
}

/// Proof that a draft passed validation; the only input the creation
/// boundary accepts. Title and description are carried trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
}

impl ScenarioDraft {
    /// Pure reducer: apply one action, yielding the next draft state.
    /// Field edits leave previously rendered errors untouched; they are
    /// recomputed on the next `check`.
    pub fn apply(mut self, action: DraftAction) -> Self {
        match action {
            DraftAction::SetTitle(title) => self.title = title,
            DraftAction::SetDescription(description) => self.description = description,
            DraftAction::SelectDifficulty(level) => self.difficulty = Some(level),
            DraftAction::Clear => return Self::default(),
        }
        self
    }

    /// Run the three field rules independently and collect every failure.
    /// Deterministic in the field values alone, so repeated calls on an
    /// unmodified draft agree.
    pub fn validation_errors(&self) -> DraftErrors {
        let mut errors = DraftErrors::new();
        if self.title.trim().is_empty() {
            errors.insert(DraftField::Title, TITLE_REQUIRED.to_owned());
        }
        if self.description.trim().is_empty() {
            errors.insert(DraftField::Description, DESCRIPTION_REQUIRED.to_owned());
        }
        if self.difficulty.is_none() {
            errors.insert(DraftField::Difficulty, DIFFICULTY_REQUIRED.to_owned());
        }
        errors
    }

    /// Validate without touching the draft; `Ok` carries the trimmed values.
    pub fn validate(&self) -> Result<ValidDraft, DraftErrors> {
        let errors = self.validation_errors();
        match self.difficulty {
            Some(difficulty) if errors.is_empty() => Ok(ValidDraft {
                title: self.title.trim().to_owned(),
                description: self.description.trim().to_owned(),
                difficulty,
            }),
            _ => Err(errors),
        }
    }

    /// Validate and store the outcome in `errors` for inline display.
    /// Returns the valid draft when the mapping ends up empty.
    pub fn check(&mut self) -> Result<ValidDraft, DraftErrors> {
        let result = self.validate();
        self.errors = match &result {
            Ok(_) => DraftErrors::new(),
            Err(errors) => errors.clone(),
        };
        result
    }
}
