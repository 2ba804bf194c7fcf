//! Screen-side application services

mod create_form;
mod home_feed;

pub use create_form::{CreateScenarioForm, SubmitError};
pub use home_feed::HomeFeed;
