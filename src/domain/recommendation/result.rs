//! Ranking outputs handed back to the order-intake collaborator.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MenuId, VendorId};

use super::VendorCandidate;

/// One candidate with its ranking-local derived fields.
///
/// `distance_km` and `score` exist only for the duration of a ranking
/// pass; they are never persisted back to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredVendor {
    pub candidate: VendorCandidate,
    pub distance_km: f64,
    pub score: f64,
}

/// The ranked outcome for a single order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRecommendation {
    pub menu_id: MenuId,
    /// Candidates in final rank order; index 0 is the chosen vendor.
    pub ranked: Vec<ScoredVendor>,
    pub chosen_vendor: VendorId,
}

/// Per-line recommendations for a whole order, in input line order.
///
/// Only produced when every line found at least one candidate; a single
/// unfulfillable line aborts the whole order instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecommendation {
    pub lines: Vec<LineRecommendation>,
}
