//! HTTP handlers for administrator endpoints.
//!
//! These handlers connect Axum routes to the configuration update
//! handler. The admin surface sits behind the platform gateway; no
//! authentication is performed here.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::warn;

use crate::adapters::http::recommendation::ErrorResponse;
use crate::application::handlers::{UpdateScoringConfigCommand, UpdateScoringConfigHandler};
use crate::domain::ahp::PairwiseMatrix;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ConfigurationStore;

use super::dto::{ScoringConfigRequest, ScoringConfigResponse};

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct AdminAppState {
    pub configuration_store: Arc<dyn ConfigurationStore>,
}

impl AdminAppState {
    pub fn update_scoring_config_handler(&self) -> UpdateScoringConfigHandler {
        UpdateScoringConfigHandler::new(self.configuration_store.clone())
    }
}

/// API error wrapper mapping domain errors onto HTTP statuses.
#[derive(Debug)]
pub enum AdminApiError {
    BadRequest(ErrorResponse),
    NotFound(ErrorResponse),
    Internal(ErrorResponse),
}

impl From<DomainError> for AdminApiError {
    fn from(error: DomainError) -> Self {
        let payload = ErrorResponse::from_domain(&error);
        match error.code {
            ErrorCode::InvalidMatrix | ErrorCode::ValidationFailed => {
                AdminApiError::BadRequest(payload)
            }
            ErrorCode::NoConfiguration => AdminApiError::NotFound(payload),
            _ => AdminApiError::Internal(payload),
        }
    }
}

impl IntoResponse for AdminApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AdminApiError::BadRequest(payload) => {
                (StatusCode::BAD_REQUEST, Json(payload)).into_response()
            }
            AdminApiError::NotFound(payload) => {
                (StatusCode::NOT_FOUND, Json(payload)).into_response()
            }
            AdminApiError::Internal(payload) => {
                warn!(code = %payload.code, "Configuration update failed on infrastructure error");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
            }
        }
    }
}

/// PUT /api/admin/scoring-configuration - Replace the weighting model
pub async fn update_scoring_configuration(
    State(state): State<AdminAppState>,
    Json(request): Json<ScoringConfigRequest>,
) -> Result<impl IntoResponse, AdminApiError> {
    let handler = state.update_scoring_config_handler();
    let command = UpdateScoringConfigCommand {
        criteria_matrix: PairwiseMatrix::new(request.criteria_matrix),
        distance_matrix: PairwiseMatrix::new(request.distance_matrix),
        capacity_matrix: PairwiseMatrix::new(request.capacity_matrix),
        price_matrix: PairwiseMatrix::new(request.price_matrix),
        distance_thresholds: request.distance_thresholds,
        capacity_thresholds: request.capacity_thresholds,
        price_thresholds: request.price_thresholds,
    };

    let result = handler.handle(command).await?;

    Ok((
        StatusCode::OK,
        Json(ScoringConfigResponse::from(&result.configuration)),
    ))
}

/// GET /api/admin/scoring-configuration - Fetch the current weighting model
pub async fn get_scoring_configuration(
    State(state): State<AdminAppState>,
) -> Result<impl IntoResponse, AdminApiError> {
    let config = state.configuration_store.load().await?;

    Ok((
        StatusCode::OK,
        Json(ScoringConfigResponse::from(config.as_ref())),
    ))
}
