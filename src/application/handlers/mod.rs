//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod recommend_vendors;
pub mod update_scoring_config;

pub use recommend_vendors::{RecommendVendorsCommand, RecommendVendorsHandler};
pub use update_scoring_config::{
    UpdateScoringConfigCommand, UpdateScoringConfigHandler, UpdateScoringConfigResult,
};
