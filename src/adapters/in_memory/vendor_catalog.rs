//! In-memory vendor catalog for testing.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, MenuId};
use crate::domain::recommendation::VendorCandidate;
use crate::ports::VendorCatalog;

/// In-memory implementation of VendorCatalog.
///
/// Menu items with no registered bindings answer with an empty list,
/// which the ranking layer treats as "no vendor available".
///
/// # Panics
///
/// Methods may panic if the internal lock is poisoned. This is acceptable
/// for test code but this adapter should NOT be used in production.
#[derive(Default)]
pub struct InMemoryVendorCatalog {
    bindings: RwLock<HashMap<MenuId, Vec<VendorCandidate>>>,
}

impl InMemoryVendorCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a vendor as able to supply a menu item.
    pub fn register(&self, menu_id: MenuId, candidate: VendorCandidate) {
        self.bindings
            .write()
            .expect("InMemoryVendorCatalog: lock poisoned")
            .entry(menu_id)
            .or_default()
            .push(candidate);
    }
}

#[async_trait]
impl VendorCatalog for InMemoryVendorCatalog {
    async fn candidates_for_menu(
        &self,
        menu_id: &MenuId,
    ) -> Result<Vec<VendorCandidate>, DomainError> {
        Ok(self
            .bindings
            .read()
            .expect("InMemoryVendorCatalog: lock poisoned")
            .get(menu_id)
            .cloned()
            .unwrap_or_default())
    }
}
