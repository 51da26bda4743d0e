//! Read-only inputs to the ranking pass.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MenuId, VendorId};

/// A vendor registered as able to supply a given menu item.
///
/// Owned by the vendor catalog; the engine treats it as read-only input.
/// Derived ranking fields (distance, score) live on `ScoredVendor`, never
/// here, and are never written back to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorCandidate {
    pub vendor_id: VendorId,
    /// Vendor location in decimal degrees.
    pub latitude: f64,
    pub longitude: f64,
    /// Smallest quantity the vendor accepts for this item.
    pub min_order: u32,
    /// Largest quantity the vendor can produce for this item.
    pub max_order: u32,
    /// The vendor's asking price per unit for this item.
    pub vendor_price: f64,
}

/// One row of a customer order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub menu_id: MenuId,
    pub quantity: u32,
    /// The customer-facing sell price for this line.
    pub price: f64,
}
