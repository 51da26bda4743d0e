//! AHP Module - Pairwise comparison and criteria weighting.
//!
//! Implements the simplified Analytic Hierarchy Process weight extraction
//! used by the recommendation engine: administrator-supplied pairwise
//! comparison matrices are normalized column by column and averaged into
//! priority weight vectors. No eigenvalue consistency check is performed.
//!
//! # Components
//!
//! - `PairwiseMatrix` - Square reciprocal comparison matrix
//! - `CriterionWeights` - Normalized target matrix plus priority vector
//! - `ScoringConfiguration` - The durable four-bundle weighting model
//!
//! All functions are pure and deterministic; persistence lives behind the
//! `ConfigurationStore` port.

mod configuration;
mod matrix;

pub use configuration::{
    ScoringConfiguration, CRITERION_CAPACITY, CRITERION_DISTANCE, CRITERION_PRICE,
};
pub use matrix::{CriterionWeights, PairwiseMatrix};
