//! In-memory configuration store for testing.
//!
//! Holds the current configuration behind an `RwLock<Option<Arc<_>>>`;
//! a save swaps the whole `Arc`, so a racing load observes either the
//! fully-old or the fully-new bundle.
//!
//! # Security Note
//!
//! This adapter is for **testing and local development** and should not
//! be used in production deployments. It uses `.expect()` on lock
//! operations which will panic if locks are poisoned.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::ahp::ScoringConfiguration;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ConfigurationStore;

/// In-memory implementation of ConfigurationStore.
///
/// # Panics
///
/// Methods may panic if the internal lock is poisoned. This is acceptable
/// for test code but this adapter should NOT be used in production.
#[derive(Default)]
pub struct InMemoryConfigurationStore {
    current: RwLock<Option<Arc<ScoringConfiguration>>>,
}

impl InMemoryConfigurationStore {
    /// Creates an empty store; `load` fails until the first `save`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a configuration.
    pub fn with_configuration(config: ScoringConfiguration) -> Self {
        Self {
            current: RwLock::new(Some(Arc::new(config))),
        }
    }
}

#[async_trait]
impl ConfigurationStore for InMemoryConfigurationStore {
    async fn save(&self, config: ScoringConfiguration) -> Result<(), DomainError> {
        let mut current = self
            .current
            .write()
            .expect("InMemoryConfigurationStore: lock poisoned");
        *current = Some(Arc::new(config));
        Ok(())
    }

    async fn load(&self) -> Result<Arc<ScoringConfiguration>, DomainError> {
        self.current
            .read()
            .expect("InMemoryConfigurationStore: lock poisoned")
            .clone()
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::NoConfiguration,
                    "No scoring configuration has been saved yet",
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::CriterionWeights;
    use chrono::Utc;

    fn weights(values: &[f64]) -> CriterionWeights {
        CriterionWeights {
            target: vec![values.to_vec(); values.len()],
            weights: values.to_vec(),
        }
    }

    fn configuration() -> ScoringConfiguration {
        ScoringConfiguration {
            criteria: weights(&[0.6, 0.1, 0.3]),
            distance: weights(&[0.4, 0.3, 0.2, 0.1]),
            capacity: weights(&[0.9, 0.1]),
            price: weights(&[0.5, 0.3, 0.2]),
            distance_thresholds: vec![5.0, 10.0, 15.0, 20.0],
            capacity_thresholds: vec![100.0, 500.0],
            price_thresholds: vec![5000.0, 7500.0, 10000.0],
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn load_before_any_save_fails() {
        let store = InMemoryConfigurationStore::new();
        let result = store.load().await;
        assert!(matches!(
            result,
            Err(err) if err.code == ErrorCode::NoConfiguration
        ));
    }

    #[tokio::test]
    async fn load_after_save_returns_equal_configuration() {
        let store = InMemoryConfigurationStore::new();
        let config = configuration();

        store.save(config.clone()).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(*loaded, config);
    }

    #[tokio::test]
    async fn save_replaces_the_whole_bundle() {
        let store = InMemoryConfigurationStore::new();
        store.save(configuration()).await.unwrap();

        let mut replacement = configuration();
        replacement.distance_thresholds = vec![1.0, 2.0, 3.0, 4.0];
        store.save(replacement.clone()).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.distance_thresholds, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(*loaded, replacement);
    }

    #[tokio::test]
    async fn snapshot_survives_a_later_save() {
        let store = InMemoryConfigurationStore::new();
        store.save(configuration()).await.unwrap();
        let snapshot = store.load().await.unwrap();

        let mut replacement = configuration();
        replacement.price_thresholds = vec![1.0];
        replacement.price = weights(&[1.0]);
        store.save(replacement).await.unwrap();

        // The previously-loaded snapshot still reflects the old bundle.
        assert_eq!(snapshot.price_thresholds, vec![5000.0, 7500.0, 10000.0]);
    }
}
