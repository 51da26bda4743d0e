//! Storage Adapters
//!
//! File-backed implementation of the ConfigurationStore port for
//! deployments that keep the scoring configuration on disk instead of in
//! Postgres.

mod json_file_store;

pub use json_file_store::JsonFileConfigurationStore;
