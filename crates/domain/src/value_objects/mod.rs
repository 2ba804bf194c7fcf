//! Value objects shared across scenario entities

mod difficulty;
mod emotional_arc;
mod evaluation;

pub use difficulty::Difficulty;
pub use emotional_arc::{AiResponse, EmotionalProgression, EmotionalState};
pub use evaluation::{
    ConditionGroup, EvaluationFramework, ScoringCriterion, EXPECTED_WEIGHT_TOTAL,
};
