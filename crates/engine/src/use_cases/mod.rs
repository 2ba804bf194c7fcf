//! Use cases orchestrating catalog and ports

mod create_scenario;

pub use create_scenario::{CreateScenario, CreateScenarioError};
