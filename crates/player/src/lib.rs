//! RespondRight Player - screen-side logic for the training app
//!
//! Holds the state behind the two interactive screens: the home feed and the
//! create-scenario form. Rendering is the host shell's job; everything here
//! is plain state plus the outbound gateway to the engine.

pub mod application;
pub mod ports;

pub use application::{CreateScenarioForm, HomeFeed, SubmitError};
pub use ports::{GatewayError, ScenarioGateway};
