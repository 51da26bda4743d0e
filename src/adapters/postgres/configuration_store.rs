//! PostgreSQL implementation of ConfigurationStore.
//!
//! The scoring configuration lives in a single-row table and is replaced
//! with one upsert statement; MVCC guarantees that a concurrent load sees
//! either the fully-old or the fully-new JSONB payload.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::ahp::ScoringConfiguration;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ConfigurationStore;

/// PostgreSQL implementation of ConfigurationStore.
#[derive(Clone)]
pub struct PostgresConfigurationStore {
    pool: PgPool,
}

impl PostgresConfigurationStore {
    /// Creates a new PostgresConfigurationStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConfigurationStore for PostgresConfigurationStore {
    async fn save(&self, config: ScoringConfiguration) -> Result<(), DomainError> {
        let payload = serde_json::to_value(&config).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to serialize scoring configuration: {}", e),
            )
        })?;

        sqlx::query(
            r#"
            INSERT INTO scoring_configuration (singleton, payload, updated_at)
            VALUES (TRUE, $1, $2)
            ON CONFLICT (singleton)
            DO UPDATE SET payload = EXCLUDED.payload, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(payload)
        .bind(config.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to save scoring configuration: {}", e),
            )
        })?;

        Ok(())
    }

    async fn load(&self) -> Result<Arc<ScoringConfiguration>, DomainError> {
        let row = sqlx::query("SELECT payload FROM scoring_configuration WHERE singleton")
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to load scoring configuration: {}", e),
                )
            })?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::NoConfiguration,
                    "No scoring configuration has been saved yet",
                )
            })?;

        let payload: serde_json::Value = row.try_get("payload").map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Malformed scoring configuration row: {}", e),
            )
        })?;

        let config: ScoringConfiguration = serde_json::from_value(payload).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Corrupt scoring configuration payload: {}", e),
            )
        })?;

        Ok(Arc::new(config))
    }
}
