//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The recommendation handler owns the per-order pipeline (one snapshot,
//! per-line fan-out, whole-order abort); the configuration handler owns
//! the administrator update action.

pub mod handlers;

pub use handlers::{
    RecommendVendorsCommand, RecommendVendorsHandler, UpdateScoringConfigCommand,
    UpdateScoringConfigHandler, UpdateScoringConfigResult,
};
