//! Repository adapters over the in-memory catalog

mod scenario;

pub use scenario::InMemoryScenarioRepo;
