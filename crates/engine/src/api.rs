//! Request handlers for the player-facing boundary
//!
//! The host shell routes screen requests here and relays the response
//! envelope back to the player side. Validation failures surface as coded
//! errors in the envelope, never as panics or logs-only conditions.

use std::sync::Arc;

use respondright_shared::{CreateScenarioRequest, ErrorCode, ResponseResult};

use crate::infrastructure::ports::{RepoError, ScenarioRepo};
use crate::use_cases::{CreateScenario, CreateScenarioError};

fn error_code(err: &RepoError) -> ErrorCode {
    match err {
        RepoError::NotFound(_) => ErrorCode::NotFound,
        RepoError::DuplicateId(_) => ErrorCode::Internal,
        RepoError::InvalidRequest(_) => ErrorCode::ValidationFailed,
    }
}

/// Scenario request handling over the assembled repository
pub struct ScenarioApi {
    repo: Arc<dyn ScenarioRepo>,
    create: CreateScenario,
}

impl ScenarioApi {
    pub fn new(repo: Arc<dyn ScenarioRepo>) -> Self {
        Self {
            create: CreateScenario::new(repo.clone()),
            repo,
        }
    }

    /// Handle a creation request; success data is the assigned id.
    pub async fn create_scenario(&self, request: CreateScenarioRequest) -> ResponseResult {
        match self.create.execute(request).await {
            Ok(id) => ResponseResult::success(id),
            Err(CreateScenarioError::Invalid(message)) => {
                ResponseResult::error(ErrorCode::ValidationFailed, message)
            }
            Err(CreateScenarioError::Repo(err)) => {
                ResponseResult::error(error_code(&err), err.to_string())
            }
        }
    }

    /// Handle a home-feed listing request; success data is the summaries.
    pub async fn list_scenarios(&self) -> ResponseResult {
        match self.repo.list_summaries().await {
            Ok(summaries) => ResponseResult::success(summaries),
            Err(err) => ResponseResult::error(error_code(&err), err.to_string()),
        }
    }

    /// Handle a single-scenario fetch; reserved and unknown ids answer a
    /// `not_found` envelope.
    pub async fn get_scenario(&self, id: respondright_domain::ScenarioId) -> ResponseResult {
        match self.repo.get(id).await {
            Ok(record) => ResponseResult::success(record),
            Err(err) => ResponseResult::error(error_code(&err), err.to_string()),
        }
    }
}
