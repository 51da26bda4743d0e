//! HTTP adapter for order vendor recommendations.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    DegreesValue, ErrorResponse, OrderLineRequest, RecommendationRequest, RecommendationResponse,
};
pub use handlers::RecommendationAppState;
pub use routes::recommendation_router;
