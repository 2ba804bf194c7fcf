//! Create-scenario form session
//!
//! Owns the draft for exactly one mounted screen. Every keystroke and
//! selection dispatches a reducer action on the UI's execution context; no
//! other holder of the draft exists, so there is nothing to lock. Submission
//! is all-or-nothing: the gateway is only reached once the draft validates.

use std::sync::Arc;

use respondright_domain::{DraftAction, DraftErrors, ScenarioDraft, ScenarioId};
use respondright_shared::CreateScenarioRequest;

use crate::ports::{GatewayError, ScenarioGateway};

/// Why a submit attempt did not produce a scenario
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Field rules failed; the same mapping is on the draft for display
    #[error("Draft is invalid")]
    Invalid(DraftErrors),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// State for one mounted creation screen
pub struct CreateScenarioForm {
    draft: ScenarioDraft,
    gateway: Arc<dyn ScenarioGateway>,
}

impl CreateScenarioForm {
    /// Fresh draft, created on screen mount
    pub fn new(gateway: Arc<dyn ScenarioGateway>) -> Self {
        Self {
            draft: ScenarioDraft::default(),
            gateway,
        }
    }

    /// Current field values and inline errors, for rendering
    pub fn draft(&self) -> &ScenarioDraft {
        &self.draft
    }

    /// Apply one user interaction through the pure reducer
    pub fn dispatch(&mut self, action: DraftAction) {
        self.draft = std::mem::take(&mut self.draft).apply(action);
    }

    /// Validate and, if clean, hand the triple to the creation boundary.
    /// On validation failure the errors land on the draft and the gateway is
    /// untouched; on success the draft resets for the next scenario.
    pub async fn submit(&mut self) -> Result<ScenarioId, SubmitError> {
        let valid = match self.draft.check() {
            Ok(valid) => valid,
            Err(errors) => {
                tracing::debug!(fields = errors.len(), "Create form blocked by validation");
                return Err(SubmitError::Invalid(errors));
            }
        };

        let request = CreateScenarioRequest::from(valid);
        let id = self.gateway.submit(request).await?;
        tracing::info!(%id, "Scenario submitted");
        self.draft = ScenarioDraft::default();
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use respondright_domain::{Difficulty, DraftField, DIFFICULTY_REQUIRED, TITLE_REQUIRED};

    use crate::ports::MockScenarioGateway;

    fn fill(form: &mut CreateScenarioForm) {
        form.dispatch(DraftAction::SetTitle("Kitchen Fire".into()));
        form.dispatch(DraftAction::SetDescription("Grease fire call".into()));
        form.dispatch(DraftAction::SelectDifficulty(Difficulty::Advanced));
    }

    #[tokio::test]
    async fn submit_of_invalid_draft_never_reaches_the_gateway() {
        let mut gateway = MockScenarioGateway::new();
        gateway.expect_submit().times(0);

        let mut form = CreateScenarioForm::new(Arc::new(gateway));
        let err = form.submit().await.expect_err("empty draft");
        match err {
            SubmitError::Invalid(errors) => {
                assert_eq!(errors.len(), 3);
                assert_eq!(errors[&DraftField::Title], TITLE_REQUIRED);
                assert_eq!(errors[&DraftField::Difficulty], DIFFICULTY_REQUIRED);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
        // inline display state matches the returned mapping
        assert_eq!(form.draft().errors.len(), 3);
    }

    #[tokio::test]
    async fn valid_draft_submits_the_trimmed_triple_and_resets() {
        let mut gateway = MockScenarioGateway::new();
        gateway
            .expect_submit()
            .withf(|req| req.title == "Kitchen Fire" && req.difficulty == Difficulty::Advanced)
            .times(1)
            .returning(|_| Ok(ScenarioId::from("9")));

        let mut form = CreateScenarioForm::new(Arc::new(gateway));
        fill(&mut form);
        form.dispatch(DraftAction::SetTitle("  Kitchen Fire ".into()));

        let id = form.submit().await.expect("submitted");
        assert_eq!(id.as_str(), "9");
        assert_eq!(form.draft(), &ScenarioDraft::default());
    }

    #[tokio::test]
    async fn gateway_failure_keeps_the_draft_for_retry() {
        let mut gateway = MockScenarioGateway::new();
        gateway
            .expect_submit()
            .times(1)
            .returning(|_| Err(GatewayError::Unavailable("engine offline".into())));

        let mut form = CreateScenarioForm::new(Arc::new(gateway));
        fill(&mut form);

        let err = form.submit().await.expect_err("gateway down");
        assert!(matches!(err, SubmitError::Gateway(_)));
        assert_eq!(form.draft().title, "Kitchen Fire");
    }

    #[tokio::test]
    async fn fixing_the_reported_fields_clears_the_block() {
        let mut gateway = MockScenarioGateway::new();
        gateway
            .expect_submit()
            .times(1)
            .returning(|_| Ok(ScenarioId::from("10")));

        let mut form = CreateScenarioForm::new(Arc::new(gateway));
        form.dispatch(DraftAction::SetTitle("Kitchen Fire".into()));
        assert!(form.submit().await.is_err());

        form.dispatch(DraftAction::SetDescription("Grease fire call".into()));
        form.dispatch(DraftAction::SelectDifficulty(Difficulty::Advanced));
        form.submit().await.expect("now valid");
    }

    #[tokio::test]
    async fn selecting_the_same_difficulty_again_is_idempotent() {
        let gateway = MockScenarioGateway::new();
        let mut form = CreateScenarioForm::new(Arc::new(gateway));
        form.dispatch(DraftAction::SelectDifficulty(Difficulty::Expert));
        form.dispatch(DraftAction::SelectDifficulty(Difficulty::Expert));
        assert_eq!(form.draft().difficulty, Some(Difficulty::Expert));
    }
}
