//! Route configuration for administrator endpoints.
//!
//! Configures Axum router with scoring configuration routes.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_scoring_configuration, update_scoring_configuration, AdminAppState};

/// Creates the admin router with all endpoints.
///
/// Routes:
/// - `GET /api/admin/scoring-configuration` - Fetch the current weighting model
/// - `PUT /api/admin/scoring-configuration` - Replace the weighting model
pub fn admin_router() -> Router<AdminAppState> {
    Router::new().route(
        "/api/admin/scoring-configuration",
        get(get_scoring_configuration).put(update_scoring_configuration),
    )
}
