//! Vendor catalog port (read side).
//!
//! The vendor catalog is owned by the surrounding platform; the engine
//! only looks up which vendors can supply a menu item and treats the
//! result as read-only input to ranking.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, MenuId};
use crate::domain::recommendation::VendorCandidate;

/// Lookup port for vendors able to supply a menu item.
///
/// Implementations must return only live bindings (deleted vendors and
/// deleted menu bindings are filtered out before the engine sees them).
/// Callers are expected to apply their own timeout around retrieval; a
/// slow lookup should fail the order rather than hang it.
#[async_trait]
pub trait VendorCatalog: Send + Sync {
    /// Vendors registered as able to supply the given menu item.
    ///
    /// An empty result is a valid answer and means no vendor qualifies.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on lookup failure
    async fn candidates_for_menu(&self, menu_id: &MenuId)
        -> Result<Vec<VendorCandidate>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn vendor_catalog_is_object_safe() {
        fn _accepts_dyn(_catalog: &dyn VendorCatalog) {}
    }
}
