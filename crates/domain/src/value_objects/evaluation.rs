//! Evaluation framework for scoring a trainee's handling of a scenario
//!
//! Success conditions are grouped (information gathering, caller management,
//! protocol steps); failure conditions are flat lists per category; scoring
//! criteria carry percentage weights. Authored documents are expected to
//! weight criteria to a total of 100, but the convention is soft: the check
//! is available to callers and strict catalogs, not applied on deserialize.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Expected total of all scoring weights in one scenario
pub const EXPECTED_WEIGHT_TOTAL: u32 = 100;

/// One weighted scoring dimension, e.g. "informationGathering"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringCriterion {
    /// Percentage weight of this criterion in the overall score
    pub weight: u32,
    /// What graders look at, in presentation order
    #[serde(default)]
    pub key_metrics: Vec<String>,
}

/// A named group of success requirements, e.g. `requiredInformation` with
/// lists `essentialDetails` and `criticalQuestions`. Group and list names
/// vary freely between scenarios.
pub type ConditionGroup = IndexMap<String, Vec<String>>;

/// Scoring rubric attached to every authored scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationFramework {
    /// Group name -> list name -> entries
    #[serde(default)]
    pub success_conditions: IndexMap<String, ConditionGroup>,
    /// Category name -> mistakes that fail the scenario
    #[serde(default)]
    pub failure_conditions: IndexMap<String, Vec<String>>,
    /// Criterion name -> weighted rubric, in document order
    #[serde(default)]
    pub scoring_criteria: IndexMap<String, ScoringCriterion>,
}

impl EvaluationFramework {
    /// Sum of all scoring weights
    pub fn weight_total(&self) -> u32 {
        self.scoring_criteria.values().map(|c| c.weight).sum()
    }

    /// Soft invariant: weights should sum to 100.
    pub fn check_weights(&self) -> Result<(), DomainError> {
        let total = self.weight_total();
        if total == EXPECTED_WEIGHT_TOTAL {
            Ok(())
        } else {
            Err(DomainError::constraint(format!(
                "Scoring weights sum to {total}, expected {EXPECTED_WEIGHT_TOTAL}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criterion(weight: u32) -> ScoringCriterion {
        ScoringCriterion {
            weight,
            key_metrics: vec!["metric".into()],
        }
    }

    #[test]
    fn weight_total_sums_all_criteria() {
        let mut framework = EvaluationFramework::default();
        framework
            .scoring_criteria
            .insert("informationGathering".into(), criterion(40));
        framework
            .scoring_criteria
            .insert("callerInteraction".into(), criterion(30));
        framework
            .scoring_criteria
            .insert("protocolAdherence".into(), criterion(30));
        assert_eq!(framework.weight_total(), 100);
        assert!(framework.check_weights().is_ok());
    }

    #[test]
    fn check_weights_flags_totals_other_than_100() {
        let mut framework = EvaluationFramework::default();
        framework
            .scoring_criteria
            .insert("informationGathering".into(), criterion(40));
        assert!(matches!(
            framework.check_weights(),
            Err(DomainError::Constraint(_))
        ));
    }

    #[test]
    fn empty_framework_deserializes_from_empty_object() {
        let framework: EvaluationFramework = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(framework.weight_total(), 0);
        assert!(framework.success_conditions.is_empty());
    }

    #[test]
    fn scoring_criteria_preserve_document_order() {
        let json = r#"{
            "scoringCriteria": {
                "emergencyResponse": { "weight": 40 },
                "informationGathering": { "weight": 30 },
                "callerManagement": { "weight": 30 }
            }
        }"#;
        let framework: EvaluationFramework = serde_json::from_str(json).expect("deserialize");
        let names: Vec<&String> = framework.scoring_criteria.keys().collect();
        assert_eq!(
            names,
            vec![
                "emergencyResponse",
                "informationGathering",
                "callerManagement"
            ]
        );
    }
}
