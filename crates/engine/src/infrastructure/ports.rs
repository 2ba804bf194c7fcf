//! Ports (traits) for infrastructure dependencies
//!
//! The creation boundary is a port so the form-side code never knows whether
//! it is talking to the in-memory adapter or a future persistence service.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use respondright_domain::{ScenarioId, ScenarioRecord};
use respondright_shared::{CreateScenarioRequest, ScenarioSummary};

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Scenario not found: {0}")]
    NotFound(ScenarioId),
    #[error("Scenario id already exists: {0}")]
    DuplicateId(ScenarioId),
    #[error("Invalid create request: {0}")]
    InvalidRequest(String),
}

/// Clock abstraction so timestamps are injectable in tests
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Id assignment abstraction for newly created scenarios
pub trait IdPort: Send + Sync {
    fn fresh_id(&self) -> ScenarioId;
}

/// The scenario repository: the collaborator behind the creation boundary.
///
/// Implementations assign the id and creation timestamp, merge the new
/// record into the catalog, and never overwrite an existing id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScenarioRepo: Send + Sync {
    /// Accept a validated triple and append the resulting stub record.
    async fn create(&self, request: CreateScenarioRequest) -> Result<ScenarioId, RepoError>;

    /// Fetch one playable scenario.
    async fn get(&self, id: ScenarioId) -> Result<ScenarioRecord, RepoError>;

    /// Card data for the home feed, in catalog order.
    async fn list_summaries(&self) -> Result<Vec<ScenarioSummary>, RepoError>;
}
