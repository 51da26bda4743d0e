//! RecommendVendorsHandler - Ranks candidate vendors for a whole order.
//!
//! For each order line: fetch candidates from the catalog, compute
//! shipping distances, score against the configuration snapshot, sort,
//! and select. Lines fan out concurrently; the configuration snapshot is
//! loaded once per attempt so every line is scored against the same
//! weight set even if an administrator replaces it mid-order. Any line
//! failure aborts the whole order; no partial recommendation is returned.

use std::sync::Arc;

use futures::future;
use tracing::debug;

use crate::domain::foundation::DomainError;
use crate::domain::geo::Coordinate;
use crate::domain::recommendation::{rank_line, OrderLine, OrderRecommendation};
use crate::ports::{ConfigurationStore, VendorCatalog};

/// Command to rank vendors for every line of an order.
#[derive(Debug, Clone)]
pub struct RecommendVendorsCommand {
    /// Delivery address of the order.
    pub shipping: Coordinate,
    /// Order lines, in order-intake order.
    pub lines: Vec<OrderLine>,
}

/// Handles vendor recommendation for order placement.
pub struct RecommendVendorsHandler {
    vendor_catalog: Arc<dyn VendorCatalog>,
    configuration_store: Arc<dyn ConfigurationStore>,
}

impl RecommendVendorsHandler {
    /// Creates a new RecommendVendorsHandler.
    pub fn new(
        vendor_catalog: Arc<dyn VendorCatalog>,
        configuration_store: Arc<dyn ConfigurationStore>,
    ) -> Self {
        Self {
            vendor_catalog,
            configuration_store,
        }
    }

    /// Ranks candidates for every order line.
    ///
    /// # Errors
    ///
    /// - `NoConfiguration` when scoring is attempted before any
    ///   configuration was saved
    /// - `NoVendorsAvailable` when any line has no candidate; the whole
    ///   order fails, with no partial result for the other lines
    /// - `DatabaseError` from catalog lookups
    pub async fn handle(
        &self,
        command: RecommendVendorsCommand,
    ) -> Result<OrderRecommendation, DomainError> {
        let config = self.configuration_store.load().await?;

        let rankings = command.lines.iter().map(|line| {
            let catalog = Arc::clone(&self.vendor_catalog);
            let config = Arc::clone(&config);
            let shipping = command.shipping;
            async move {
                let candidates = catalog.candidates_for_menu(&line.menu_id).await?;
                rank_line(line, shipping, candidates, &config)
            }
        });

        let lines = future::try_join_all(rankings).await?;

        debug!(lines = lines.len(), "Ranked vendors for order");

        Ok(OrderRecommendation { lines })
    }
}
