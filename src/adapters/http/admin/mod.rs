//! HTTP adapter for administrator scoring configuration.

mod dto;
mod handlers;
mod routes;

pub use dto::{ScoringConfigRequest, ScoringConfigResponse, WeightsResponse};
pub use handlers::AdminAppState;
pub use routes::admin_router;
