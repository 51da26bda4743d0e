//! UpdateScoringConfigHandler - Administrator weighting model updates.
//!
//! Runs weight derivation over the four submitted pairwise comparison
//! matrices, validates the resulting bundle's shape against the threshold
//! arrays, and replaces the persisted configuration wholesale. Runs out
//! of the request hot path; scoring requests keep reading whichever
//! bundle was current when their snapshot was loaded.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::ahp::{PairwiseMatrix, ScoringConfiguration};
use crate::domain::foundation::DomainError;
use crate::ports::ConfigurationStore;

/// Command carrying an administrator's full weighting model submission.
#[derive(Debug, Clone)]
pub struct UpdateScoringConfigCommand {
    /// Top-level comparison of distance, capacity, and price (3x3).
    pub criteria_matrix: PairwiseMatrix,
    /// Comparison of the distance buckets (NxN).
    pub distance_matrix: PairwiseMatrix,
    /// Comparison of fits versus does-not-fit (2x2).
    pub capacity_matrix: PairwiseMatrix,
    /// Comparison of the price buckets (NxN).
    pub price_matrix: PairwiseMatrix,
    pub distance_thresholds: Vec<f64>,
    pub capacity_thresholds: Vec<f64>,
    pub price_thresholds: Vec<f64>,
}

/// Result of a configuration update, echoing the derived weights.
#[derive(Debug, Clone)]
pub struct UpdateScoringConfigResult {
    pub configuration: ScoringConfiguration,
}

/// Handles administrator scoring configuration updates.
pub struct UpdateScoringConfigHandler {
    configuration_store: Arc<dyn ConfigurationStore>,
}

impl UpdateScoringConfigHandler {
    /// Creates a new UpdateScoringConfigHandler.
    pub fn new(configuration_store: Arc<dyn ConfigurationStore>) -> Self {
        Self {
            configuration_store,
        }
    }

    /// Derives weights from the submitted matrices and persists the bundle.
    ///
    /// # Errors
    ///
    /// - `InvalidMatrix` when any matrix is empty, non-square, or has a
    ///   zero column sum; surfaced to the administrator, never retried
    /// - `ValidationFailed` when weight vectors and threshold arrays
    ///   disagree in shape
    /// - `DatabaseError` / `StorageError` on persistence failure
    pub async fn handle(
        &self,
        command: UpdateScoringConfigCommand,
    ) -> Result<UpdateScoringConfigResult, DomainError> {
        let configuration = ScoringConfiguration {
            criteria: command.criteria_matrix.derive_weights()?,
            distance: command.distance_matrix.derive_weights()?,
            capacity: command.capacity_matrix.derive_weights()?,
            price: command.price_matrix.derive_weights()?,
            distance_thresholds: command.distance_thresholds,
            capacity_thresholds: command.capacity_thresholds,
            price_thresholds: command.price_thresholds,
            updated_at: Utc::now(),
        };

        configuration.validate()?;

        self.configuration_store.save(configuration.clone()).await?;

        info!(
            distance_buckets = configuration.distance_thresholds.len(),
            price_buckets = configuration.price_thresholds.len(),
            "Replaced scoring configuration"
        );

        Ok(UpdateScoringConfigResult { configuration })
    }
}
