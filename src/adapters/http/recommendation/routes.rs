//! Route configuration for recommendation endpoints.
//!
//! Configures Axum router with recommendation-related routes.

use axum::routing::post;
use axum::Router;

use super::handlers::{recommend_vendors, RecommendationAppState};

/// Creates the recommendation router with all endpoints.
///
/// Routes:
/// - `POST /api/recommendations` - Rank vendors for every line of an order
pub fn recommendation_router() -> Router<RecommendationAppState> {
    Router::new().route("/api/recommendations", post(recommend_vendors))
}
