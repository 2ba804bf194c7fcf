//! RespondRight Shared - types crossing the Player/Engine boundary
//!
//! This crate contains the DTOs both sides must agree on:
//! - The creation-boundary request (`CreateScenarioRequest`)
//! - Home-feed listing summaries (`ScenarioSummary`)
//! - The response envelope and error codes
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - serde, serde_json, thiserror, domain vocabulary
//! 2. **No business logic** - pure data types and serialization
//! 3. **Forward compatible** - unknown response kinds decode to `Unknown`

pub mod dto;
pub mod requests;
pub mod responses;

pub use dto::ScenarioSummary;
pub use requests::CreateScenarioRequest;
pub use responses::{ErrorCode, ResponseResult};
