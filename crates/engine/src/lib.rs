//! RespondRight Engine - catalog loading, lookup, and the creation boundary
//!
//! The engine owns everything behind the screens: parsing the bundled
//! scenario document at startup (fatal on malformed data), the in-memory
//! catalog with its placeholder-filtering queries, and the repository port
//! the creation form submits to.

pub mod api;
pub mod catalog;
pub mod infrastructure;
pub mod repositories;
pub mod use_cases;

pub use api::ScenarioApi;
pub use catalog::{CatalogError, ScenarioCatalog};
pub use infrastructure::{
    CatalogLoadError, ClockPort, EngineSettings, IdPort, RepoError, ScenarioDocument,
    ScenarioEntry, ScenarioRepo, SystemClock, UuidIds,
};
pub use repositories::InMemoryScenarioRepo;
pub use use_cases::{CreateScenario, CreateScenarioError};

use std::sync::Arc;

/// Load the bundled document per settings and assemble the repository the
/// player-side gateway talks to. Any load failure here is a startup error
/// for the operator, not a runtime condition.
pub fn bootstrap(settings: &EngineSettings) -> Result<Arc<InMemoryScenarioRepo>, BootstrapError> {
    let document = ScenarioDocument::load(&settings.catalog_path)?;
    let catalog = if settings.enforce_weight_totals {
        ScenarioCatalog::from_document_strict(&document)?
    } else {
        ScenarioCatalog::from_document(&document)
    };
    Ok(Arc::new(InMemoryScenarioRepo::new(
        catalog,
        Arc::new(SystemClock::new()),
        Arc::new(UuidIds::new()),
    )))
}

/// Fatal startup failure
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Load(#[from] CatalogLoadError),
    #[error("Catalog rejected: {0}")]
    Catalog(#[from] CatalogError),
}
