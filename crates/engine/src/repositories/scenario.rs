//! In-memory scenario repository
//!
//! Implements the creation boundary over the in-memory catalog: assigns a
//! fresh id and timestamp, builds the stub record, appends. The catalog's
//! no-overwrite rule backs the uniqueness guarantee; on the vanishingly
//! unlikely duplicate the error propagates rather than clobbering a record.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use respondright_domain::{ScenarioId, ScenarioRecord};
use respondright_shared::{CreateScenarioRequest, ScenarioSummary};

use crate::catalog::{CatalogError, ScenarioCatalog};
use crate::infrastructure::ports::{ClockPort, IdPort, RepoError, ScenarioRepo};

/// Author recorded on scenarios created through the form until accounts exist
const FORM_AUTHOR: &str = "trainee";

pub struct InMemoryScenarioRepo {
    catalog: RwLock<ScenarioCatalog>,
    clock: Arc<dyn ClockPort>,
    ids: Arc<dyn IdPort>,
}

impl InMemoryScenarioRepo {
    pub fn new(catalog: ScenarioCatalog, clock: Arc<dyn ClockPort>, ids: Arc<dyn IdPort>) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            clock,
            ids,
        }
    }
}

impl From<CatalogError> for RepoError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => RepoError::NotFound(id),
            CatalogError::DuplicateId(id) => RepoError::DuplicateId(id),
            CatalogError::Rejected { reason, .. } => RepoError::InvalidRequest(reason),
        }
    }
}

#[async_trait]
impl ScenarioRepo for InMemoryScenarioRepo {
    async fn create(&self, request: CreateScenarioRequest) -> Result<ScenarioId, RepoError> {
        let id = self.ids.fresh_id();
        let record = ScenarioRecord::new(
            request.title,
            request.description,
            request.difficulty,
            FORM_AUTHOR,
            self.clock.now(),
        );
        let mut catalog = self.catalog.write().await;
        catalog.insert(id.clone(), record)?;
        tracing::info!(%id, "Scenario created");
        Ok(id)
    }

    async fn get(&self, id: ScenarioId) -> Result<ScenarioRecord, RepoError> {
        let catalog = self.catalog.read().await;
        Ok(catalog.get(&id)?.clone())
    }

    async fn list_summaries(&self) -> Result<Vec<ScenarioSummary>, RepoError> {
        let catalog = self.catalog.read().await;
        Ok(catalog.summaries())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use respondright_domain::Difficulty;

    use crate::infrastructure::clock::{FixedClock, FixedIds};

    fn repo_with(ids: FixedIds) -> InMemoryScenarioRepo {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 11, 2, 9, 30, 0).single().expect("ts"));
        InMemoryScenarioRepo::new(ScenarioCatalog::default(), Arc::new(clock), Arc::new(ids))
    }

    fn request(title: &str) -> CreateScenarioRequest {
        CreateScenarioRequest {
            title: title.into(),
            description: "description".into(),
            difficulty: Difficulty::Advanced,
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_timestamp_and_appends() {
        let repo = repo_with(FixedIds::queue(["9"]));
        let id = repo.create(request("Kitchen Fire")).await.expect("create");
        assert_eq!(id.as_str(), "9");

        let record = repo.get(id).await.expect("created record is playable");
        assert_eq!(record.metadata.title, "Kitchen Fire");
        assert_eq!(record.metadata.created_by, "trainee");
        assert_eq!(record.metadata.created_at.to_rfc3339(), "2024-11-02T09:30:00+00:00");
    }

    #[tokio::test]
    async fn duplicate_generated_id_propagates_instead_of_overwriting() {
        let repo = repo_with(FixedIds::queue(["9", "9"]));
        repo.create(request("First")).await.expect("first create");
        let err = repo.create(request("Second")).await.expect_err("duplicate");
        assert!(matches!(err, RepoError::DuplicateId(_)));

        let record = repo.get(ScenarioId::from("9")).await.expect("first intact");
        assert_eq!(record.metadata.title, "First");
    }

    #[tokio::test]
    async fn list_summaries_reflects_created_scenarios_in_order() {
        let repo = repo_with(FixedIds::queue(["a", "b"]));
        repo.create(request("First")).await.expect("create");
        repo.create(request("Second")).await.expect("create");
        let summaries = repo.list_summaries().await.expect("list");
        let titles: Vec<&str> = summaries.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn get_unknown_id_answers_not_found() {
        let repo = repo_with(FixedIds::queue([]));
        let err = repo.get(ScenarioId::from("nope")).await.expect_err("absent");
        assert!(matches!(err, RepoError::NotFound(_)));
    }
}
