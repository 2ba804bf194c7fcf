//! Emotional progression guidance for the AI caller
//!
//! Each scenario scripts how the simulated caller's emotional state evolves:
//! an initial state, a mid-scenario state, and a peak-stress state (some
//! authored documents label the peak `criticalPhase` instead of `peakStress`;
//! both spellings are accepted on deserialize).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One point on the caller's emotional arc
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionalState {
    /// Overall vocal tone, e.g. "Worried but trying to stay rational"
    pub tone: String,
    /// Dominant emotions the AI should convey, in emphasis order
    #[serde(default)]
    pub primary_emotions: Vec<String>,
    /// Audible physical signs (voice tremor, rapid breathing, ...)
    #[serde(default)]
    pub physical_signs: Vec<String>,
}

impl EmotionalState {
    pub fn new(tone: impl Into<String>) -> Self {
        Self {
            tone: tone.into(),
            primary_emotions: Vec::new(),
            physical_signs: Vec::new(),
        }
    }

    pub fn with_emotions(mut self, emotions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.primary_emotions = emotions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_physical_signs(
        mut self,
        signs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.physical_signs = signs.into_iter().map(Into::into).collect();
        self
    }
}

/// Ordered progression of the caller's emotional states
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionalProgression {
    pub initial_state: EmotionalState,
    pub mid_scenario: EmotionalState,
    /// Peak of the arc. Serialized as `peakStress`; medical scenarios in the
    /// bundled document author it as `criticalPhase`.
    #[serde(alias = "criticalPhase")]
    pub peak_stress: EmotionalState,
}

impl EmotionalProgression {
    /// The three states in scripted order
    pub fn stages(&self) -> [&EmotionalState; 3] {
        [&self.initial_state, &self.mid_scenario, &self.peak_stress]
    }
}

/// Behavior guidelines handed to the AI roleplay counterpart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiResponse {
    pub emotional_progression: EmotionalProgression,
    /// Cue -> guidance, e.g. "toReassurance" -> "Momentarily calmer but...".
    /// Keys vary per scenario, so this stays an ordered map of opaque text.
    #[serde(default)]
    pub expected_responses: IndexMap<String, String>,
}
