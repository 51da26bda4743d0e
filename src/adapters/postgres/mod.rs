//! PostgreSQL adapters - Database implementations for the engine's ports.
//!
//! - `PostgresVendorCatalog` - Candidate lookup over the platform's
//!   vendor tables (read-only)
//! - `PostgresConfigurationStore` - Single-row scoring configuration
//!   record with wholesale replace semantics

mod configuration_store;
mod vendor_catalog;

pub use configuration_store::PostgresConfigurationStore;
pub use vendor_catalog::PostgresVendorCatalog;
