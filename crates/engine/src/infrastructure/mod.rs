//! Infrastructure: bundled-document loading, ports, and adapters

pub mod bundle;
pub mod clock;
pub mod ports;
pub mod settings;

pub use bundle::{CatalogLoadError, ScenarioDocument, ScenarioEntry};
pub use clock::{SystemClock, UuidIds};
pub use ports::{ClockPort, IdPort, RepoError, ScenarioRepo};
pub use settings::EngineSettings;
