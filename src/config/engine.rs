//! Recommendation engine configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Engine configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct EngineConfig {
    /// When set, the scoring configuration is persisted to this JSON file
    /// instead of Postgres.
    pub configuration_file: Option<String>,
}

impl EngineConfig {
    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.configuration_file {
            if path.trim().is_empty() {
                return Err(ValidationError::EmptyConfigurationFile);
            }
        }
        Ok(())
    }
}
