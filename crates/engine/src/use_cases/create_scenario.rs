//! Create-scenario use case
//!
//! The form validates before it submits, but the boundary re-checks the
//! non-empty invariants so a caller that skipped the form cannot plant an
//! unplayable record (an empty title would read as a reserved slot).

use std::sync::Arc;

use respondright_domain::ScenarioId;
use respondright_shared::CreateScenarioRequest;

use crate::infrastructure::ports::{RepoError, ScenarioRepo};

#[derive(Debug, thiserror::Error)]
pub enum CreateScenarioError {
    #[error("Invalid create request: {0}")]
    Invalid(String),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

pub struct CreateScenario {
    repo: Arc<dyn ScenarioRepo>,
}

impl CreateScenario {
    pub fn new(repo: Arc<dyn ScenarioRepo>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        request: CreateScenarioRequest,
    ) -> Result<ScenarioId, CreateScenarioError> {
        if request.title.trim().is_empty() {
            return Err(CreateScenarioError::Invalid(
                "title must not be empty".into(),
            ));
        }
        if request.description.trim().is_empty() {
            return Err(CreateScenarioError::Invalid(
                "description must not be empty".into(),
            ));
        }

        let id = self.repo.create(request).await?;
        tracing::info!(%id, "Scenario accepted at the creation boundary");
        Ok(id)
    }
}
