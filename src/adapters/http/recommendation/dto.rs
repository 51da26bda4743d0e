//! HTTP DTOs (Data Transfer Objects) for recommendation endpoints.
//!
//! These types define the JSON request/response structure for the
//! recommendation API. They serve as the boundary between HTTP and the
//! application layer.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::geo::parse_degrees;
use crate::domain::recommendation::{LineRecommendation, OrderRecommendation, ScoredVendor};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A coordinate value as upstream payloads deliver it: either a JSON
/// number or a decimal string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DegreesValue {
    Number(f64),
    Text(String),
}

impl DegreesValue {
    /// Resolves the value to decimal degrees.
    ///
    /// # Errors
    ///
    /// `InvalidCoordinate` naming the field when the text is not numeric.
    pub fn resolve(&self, field: &str) -> Result<f64, DomainError> {
        match self {
            DegreesValue::Number(value) => Ok(*value),
            DegreesValue::Text(raw) => parse_degrees(field, raw),
        }
    }
}

/// Request to rank vendors for every line of an order.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    /// Delivery latitude in decimal degrees.
    pub shipping_latitude: DegreesValue,
    /// Delivery longitude in decimal degrees.
    pub shipping_longitude: DegreesValue,
    /// Order lines to place.
    pub lines: Vec<OrderLineRequest>,
}

/// One order line in a recommendation request.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderLineRequest {
    pub menu_id: String,
    pub quantity: u32,
    /// The customer-facing sell price for this line.
    pub price: f64,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response carrying per-line ranked candidates and chosen vendors.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub lines: Vec<LineRecommendationResponse>,
}

/// Ranked outcome for a single line.
#[derive(Debug, Clone, Serialize)]
pub struct LineRecommendationResponse {
    pub menu_id: String,
    pub chosen_vendor: String,
    /// Candidates in final rank order; index 0 is the chosen vendor.
    pub ranked: Vec<RankedVendorResponse>,
}

/// One ranked candidate with its derived fields.
#[derive(Debug, Clone, Serialize)]
pub struct RankedVendorResponse {
    pub vendor_id: String,
    pub distance_km: f64,
    pub score: f64,
    pub vendor_price: f64,
    pub max_order: u32,
}

impl From<&ScoredVendor> for RankedVendorResponse {
    fn from(entry: &ScoredVendor) -> Self {
        Self {
            vendor_id: entry.candidate.vendor_id.to_string(),
            distance_km: entry.distance_km,
            score: entry.score,
            vendor_price: entry.candidate.vendor_price,
            max_order: entry.candidate.max_order,
        }
    }
}

impl From<&LineRecommendation> for LineRecommendationResponse {
    fn from(line: &LineRecommendation) -> Self {
        Self {
            menu_id: line.menu_id.to_string(),
            chosen_vendor: line.chosen_vendor.to_string(),
            ranked: line.ranked.iter().map(RankedVendorResponse::from).collect(),
        }
    }
}

impl From<&OrderRecommendation> for RecommendationResponse {
    fn from(recommendation: &OrderRecommendation) -> Self {
        Self {
            lines: recommendation
                .lines
                .iter()
                .map(LineRecommendationResponse::from)
                .collect(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error DTO
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error payload for the engine's HTTP surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional structured details.
    #[serde(default, skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub details: std::collections::HashMap<String, String>,
}

impl ErrorResponse {
    /// Creates an error payload from a domain error.
    pub fn from_domain(error: &DomainError) -> Self {
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            details: error.details.clone(),
        }
    }

    /// Creates a bad-request payload with a plain message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed.to_string(),
            message: message.into(),
            details: std::collections::HashMap::new(),
        }
    }
}
