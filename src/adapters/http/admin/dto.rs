//! HTTP DTOs (Data Transfer Objects) for administrator endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::ahp::{CriterionWeights, ScoringConfiguration};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to replace the scoring configuration.
///
/// Carries the four pairwise comparison matrices and the three threshold
/// arrays of the weighting model. Matrices are row-major cells; the
/// reciprocity of each matrix is the administrator's responsibility.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfigRequest {
    /// Top-level comparison of distance, capacity, and price (3x3).
    pub criteria_matrix: Vec<Vec<f64>>,
    /// Comparison of the distance buckets (NxN).
    pub distance_matrix: Vec<Vec<f64>>,
    /// Comparison of fits versus does-not-fit (2x2).
    pub capacity_matrix: Vec<Vec<f64>>,
    /// Comparison of the price buckets (NxN).
    pub price_matrix: Vec<Vec<f64>>,
    /// Ascending distance cutoffs in kilometres.
    pub distance_thresholds: Vec<f64>,
    /// Capacity cutoffs, echoed back to the admin surface.
    pub capacity_thresholds: Vec<f64>,
    /// Ascending sell-price margin cutoffs.
    pub price_thresholds: Vec<f64>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Derived weights for one criterion group.
#[derive(Debug, Clone, Serialize)]
pub struct WeightsResponse {
    /// Column-normalized comparison matrix.
    pub target: Vec<Vec<f64>>,
    /// Priority score per criterion, in matrix row order.
    pub weights: Vec<f64>,
}

impl From<&CriterionWeights> for WeightsResponse {
    fn from(weights: &CriterionWeights) -> Self {
        Self {
            target: weights.target.clone(),
            weights: weights.weights.clone(),
        }
    }
}

/// The current configuration bundle with its derived weights.
#[derive(Debug, Clone, Serialize)]
pub struct ScoringConfigResponse {
    pub criteria: WeightsResponse,
    pub distance: WeightsResponse,
    pub capacity: WeightsResponse,
    pub price: WeightsResponse,
    pub distance_thresholds: Vec<f64>,
    pub capacity_thresholds: Vec<f64>,
    pub price_thresholds: Vec<f64>,
    /// When this bundle replaced the previous one (ISO 8601).
    pub updated_at: String,
}

impl From<&ScoringConfiguration> for ScoringConfigResponse {
    fn from(config: &ScoringConfiguration) -> Self {
        Self {
            criteria: WeightsResponse::from(&config.criteria),
            distance: WeightsResponse::from(&config.distance),
            capacity: WeightsResponse::from(&config.capacity),
            price: WeightsResponse::from(&config.price),
            distance_thresholds: config.distance_thresholds.clone(),
            capacity_thresholds: config.capacity_thresholds.clone(),
            price_thresholds: config.price_thresholds.clone(),
            updated_at: config.updated_at.to_rfc3339(),
        }
    }
}
