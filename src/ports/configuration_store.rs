//! Scoring configuration store port.
//!
//! Exactly one current configuration exists at a time; administrator
//! actions replace it wholesale and scoring requests read a consistent
//! snapshot of it. No history retention is required.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ahp::ScoringConfiguration;
use crate::domain::foundation::DomainError;

/// Persistence port for the single durable scoring configuration record.
///
/// Implementations must make `save` atomic with respect to concurrent
/// `load`s: a load racing a save observes either the fully-old or the
/// fully-new bundle, never a mix of weight vectors.
#[async_trait]
pub trait ConfigurationStore: Send + Sync {
    /// Replaces the current configuration wholesale.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` / `StorageError` on persistence failure
    async fn save(&self, config: ScoringConfiguration) -> Result<(), DomainError>;

    /// Returns the current configuration snapshot.
    ///
    /// Callers hold the returned snapshot for the duration of one
    /// order-processing attempt rather than re-loading mid-flight.
    ///
    /// # Errors
    ///
    /// - `NoConfiguration` if no configuration has ever been saved;
    ///   fatal for any scoring attempt
    /// - `DatabaseError` / `StorageError` on retrieval failure
    async fn load(&self) -> Result<Arc<ScoringConfiguration>, DomainError>;
}
