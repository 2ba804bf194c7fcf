//! Engine settings
//!
//! The host shell points the engine at the packaged scenario document; the
//! strictness knob controls whether scoring-weight totals are enforced at
//! load. Environment variables override the defaults.

use std::path::PathBuf;

/// Operational settings for the engine
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Location of the bundled scenario document
    pub catalog_path: PathBuf,
    /// Reject authored records whose scoring weights do not sum to 100
    pub enforce_weight_totals: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data/scenarios.json"),
            enforce_weight_totals: false,
        }
    }
}

impl EngineSettings {
    /// Load settings from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let catalog_path = std::env::var("RESPONDRIGHT_CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.catalog_path);
        let enforce_weight_totals = std::env::var("RESPONDRIGHT_STRICT_WEIGHTS")
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(defaults.enforce_weight_totals);
        Self {
            catalog_path,
            enforce_weight_totals,
        }
    }
}
