//! HTTP handlers for recommendation endpoints.
//!
//! These handlers connect Axum routes to the application layer. The error
//! mapping keeps the expected business outcome (no vendor available)
//! distinguishable from configuration and infrastructure failures so the
//! order-intake collaborator can present the right message.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{debug, warn};

use crate::application::handlers::{RecommendVendorsCommand, RecommendVendorsHandler};
use crate::domain::foundation::{DomainError, ErrorCode, MenuId};
use crate::domain::geo::Coordinate;
use crate::domain::recommendation::OrderLine;
use crate::ports::{ConfigurationStore, VendorCatalog};

use super::dto::{ErrorResponse, RecommendationRequest, RecommendationResponse};

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct RecommendationAppState {
    pub vendor_catalog: Arc<dyn VendorCatalog>,
    pub configuration_store: Arc<dyn ConfigurationStore>,
}

impl RecommendationAppState {
    pub fn recommend_vendors_handler(&self) -> RecommendVendorsHandler {
        RecommendVendorsHandler::new(
            self.vendor_catalog.clone(),
            self.configuration_store.clone(),
        )
    }
}

/// API error wrapper mapping domain errors onto HTTP statuses.
#[derive(Debug)]
pub enum RecommendationApiError {
    BadRequest(ErrorResponse),
    NoVendors(ErrorResponse),
    ConfigurationMissing(ErrorResponse),
    Internal(ErrorResponse),
}

impl From<DomainError> for RecommendationApiError {
    fn from(error: DomainError) -> Self {
        let payload = ErrorResponse::from_domain(&error);
        match error.code {
            ErrorCode::InvalidCoordinate | ErrorCode::ValidationFailed => {
                RecommendationApiError::BadRequest(payload)
            }
            ErrorCode::NoVendorsAvailable => RecommendationApiError::NoVendors(payload),
            ErrorCode::NoConfiguration => RecommendationApiError::ConfigurationMissing(payload),
            _ => RecommendationApiError::Internal(payload),
        }
    }
}

impl IntoResponse for RecommendationApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            RecommendationApiError::BadRequest(payload) => {
                (StatusCode::BAD_REQUEST, Json(payload)).into_response()
            }
            RecommendationApiError::NoVendors(payload) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
            }
            RecommendationApiError::ConfigurationMissing(payload) => {
                warn!("Recommendation requested before any scoring configuration was saved");
                (StatusCode::SERVICE_UNAVAILABLE, Json(payload)).into_response()
            }
            RecommendationApiError::Internal(payload) => {
                warn!(code = %payload.code, "Recommendation failed on infrastructure error");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
            }
        }
    }
}

/// POST /api/recommendations - Rank vendors for every line of an order
pub async fn recommend_vendors(
    State(state): State<RecommendationAppState>,
    Json(request): Json<RecommendationRequest>,
) -> Result<impl IntoResponse, RecommendationApiError> {
    let shipping = Coordinate::new(
        request.shipping_latitude.resolve("shipping_latitude")?,
        request.shipping_longitude.resolve("shipping_longitude")?,
    );

    let mut lines = Vec::with_capacity(request.lines.len());
    for line in &request.lines {
        let menu_id: MenuId = line.menu_id.parse().map_err(|_| {
            RecommendationApiError::BadRequest(ErrorResponse::bad_request(format!(
                "Invalid menu ID format: {}",
                line.menu_id
            )))
        })?;
        lines.push(OrderLine {
            menu_id,
            quantity: line.quantity,
            price: line.price,
        });
    }

    let handler = state.recommend_vendors_handler();
    let result = handler
        .handle(RecommendVendorsCommand { shipping, lines })
        .await?;

    debug!(lines = result.lines.len(), "Recommendation served");

    Ok((StatusCode::OK, Json(RecommendationResponse::from(&result))))
}
