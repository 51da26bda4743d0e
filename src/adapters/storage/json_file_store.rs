//! File-backed configuration store.
//!
//! Persists the scoring configuration as a single JSON file for
//! deployments that run the engine without Postgres.
//!
//! # Atomic Writes
//!
//! Uses a write-to-temp-then-rename pattern so a save is atomic:
//! 1. Write the bundle to `<path>.tmp`
//! 2. Sync to disk
//! 3. Rename to `<path>`
//!
//! A load racing a save therefore reads either the fully-old or the
//! fully-new file, never a partial write.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::ahp::ScoringConfiguration;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ConfigurationStore;

/// File-backed implementation of ConfigurationStore.
#[derive(Debug, Clone)]
pub struct JsonFileConfigurationStore {
    /// Location of the single durable configuration record.
    path: PathBuf,
}

impl JsonFileConfigurationStore {
    /// Creates a store persisting to the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut os_string = self.path.clone().into_os_string();
        os_string.push(".tmp");
        PathBuf::from(os_string)
    }

    async fn ensure_parent_dir(&self) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                storage_error(format!(
                    "Failed to create configuration directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}

fn storage_error(message: String) -> DomainError {
    DomainError::new(ErrorCode::StorageError, message)
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

#[async_trait]
impl ConfigurationStore for JsonFileConfigurationStore {
    async fn save(&self, config: ScoringConfiguration) -> Result<(), DomainError> {
        let payload = serde_json::to_string_pretty(&config).map_err(|e| {
            storage_error(format!("Failed to serialize scoring configuration: {}", e))
        })?;

        self.ensure_parent_dir().await?;

        let temp_path = self.temp_path();

        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            storage_error(format!(
                "Failed to create temp file {}: {}",
                display(&temp_path),
                e
            ))
        })?;

        file.write_all(payload.as_bytes()).await.map_err(|e| {
            storage_error(format!(
                "Failed to write temp file {}: {}",
                display(&temp_path),
                e
            ))
        })?;

        file.sync_all().await.map_err(|e| {
            storage_error(format!(
                "Failed to sync temp file {}: {}",
                display(&temp_path),
                e
            ))
        })?;

        fs::rename(&temp_path, &self.path).await.map_err(|e| {
            storage_error(format!(
                "Failed to rename {} to {}: {}",
                display(&temp_path),
                display(&self.path),
                e
            ))
        })?;

        Ok(())
    }

    async fn load(&self) -> Result<Arc<ScoringConfiguration>, DomainError> {
        let payload = fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => DomainError::new(
                    ErrorCode::NoConfiguration,
                    "No scoring configuration has been saved yet",
                )
                .with_detail("path", display(&self.path)),
                _ => storage_error(format!("Failed to read {}: {}", display(&self.path), e)),
            })?;

        let config: ScoringConfiguration = serde_json::from_str(&payload).map_err(|e| {
            storage_error(format!(
                "Corrupt scoring configuration at {}: {}",
                display(&self.path),
                e
            ))
        })?;

        Ok(Arc::new(config))
    }
}
