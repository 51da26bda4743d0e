//! The durable scoring configuration bundle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CriterionWeights;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Index of the distance criterion in `criteria.weights`.
pub const CRITERION_DISTANCE: usize = 0;
/// Index of the capacity criterion in `criteria.weights`.
pub const CRITERION_CAPACITY: usize = 1;
/// Index of the price criterion in `criteria.weights`.
pub const CRITERION_PRICE: usize = 2;

/// The administrator-configured weighting model.
///
/// Exactly one current configuration exists at a time; an administrator
/// action replaces the whole bundle, and every scoring request reads one
/// consistent snapshot of it. No history is retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfiguration {
    /// Top-level criteria weights: distance, capacity, price, in that order.
    pub criteria: CriterionWeights,
    /// Sub-weights per distance bucket.
    pub distance: CriterionWeights,
    /// Two-entry selector: index 0 when the vendor's capacity fits the
    /// line, index 1 when it does not.
    pub capacity: CriterionWeights,
    /// Sub-weights per price-competitiveness bucket.
    pub price: CriterionWeights,
    /// Ascending distance cutoffs in kilometres, one per distance weight.
    pub distance_thresholds: Vec<f64>,
    /// Capacity cutoffs as entered by the administrator. The capacity
    /// test itself is binary; the array rides along in the bundle so the
    /// admin surface can return what was submitted.
    pub capacity_thresholds: Vec<f64>,
    /// Ascending sell-price margin cutoffs, one per price weight.
    pub price_thresholds: Vec<f64>,
    /// When this bundle replaced the previous one.
    pub updated_at: DateTime<Utc>,
}

impl ScoringConfiguration {
    /// Checks internal shape agreement before the bundle is persisted.
    ///
    /// The scorer indexes weights by threshold position, so each weight
    /// vector must line up with its threshold array, the capacity
    /// selector must have exactly two entries, and the top level must
    /// weigh exactly the three criteria.
    ///
    /// # Errors
    ///
    /// `ValidationFailed` naming the offending section.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.criteria.len() != 3 {
            return Err(shape_error(
                "criteria",
                "top-level weights must cover distance, capacity, and price",
                3,
                self.criteria.len(),
            ));
        }
        if self.capacity.len() != 2 {
            return Err(shape_error(
                "capacity",
                "capacity selector must have a fits and a does-not-fit weight",
                2,
                self.capacity.len(),
            ));
        }
        if self.distance.len() != self.distance_thresholds.len() {
            return Err(shape_error(
                "distance",
                "one distance weight is required per distance cutoff",
                self.distance_thresholds.len(),
                self.distance.len(),
            ));
        }
        if self.price.len() != self.price_thresholds.len() {
            return Err(shape_error(
                "price",
                "one price weight is required per price cutoff",
                self.price_thresholds.len(),
                self.price.len(),
            ));
        }
        Ok(())
    }
}

fn shape_error(section: &str, message: &str, expected: usize, actual: usize) -> DomainError {
    DomainError::new(ErrorCode::ValidationFailed, message)
        .with_detail("section", section)
        .with_detail("expected", expected.to_string())
        .with_detail("actual", actual.to_string())
}
