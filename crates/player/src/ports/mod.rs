//! Outbound ports to the engine
//!
//! The screens never talk to the catalog directly; everything goes through
//! the gateway so screen logic is testable against a mock. The async methods
//! use `async_trait` rather than hand-rolled futures for mockall
//! compatibility.

use async_trait::async_trait;

use respondright_domain::ScenarioId;
use respondright_shared::{CreateScenarioRequest, ScenarioSummary};

/// Error type for gateway operations
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Scenario not found: {0}")]
    NotFound(ScenarioId),
    #[error("Creation rejected: {0}")]
    Rejected(String),
    #[error("Engine unavailable: {0}")]
    Unavailable(String),
}

/// Port to the scenario engine
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScenarioGateway: Send + Sync {
    /// Submit a validated creation request; the engine assigns the id.
    async fn submit(&self, request: CreateScenarioRequest) -> Result<ScenarioId, GatewayError>;

    /// Card data for every playable scenario, in catalog order.
    async fn fetch_summaries(&self) -> Result<Vec<ScenarioSummary>, GatewayError>;
}
