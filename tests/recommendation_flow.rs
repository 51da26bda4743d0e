//! Integration tests for the recommendation flow.
//!
//! These tests verify the end-to-end path:
//! 1. An administrator submits pairwise comparison matrices and thresholds
//! 2. Weight derivation runs and the configuration is persisted
//! 3. An order recommendation request ranks candidates per line and
//!    designates a chosen vendor
//!
//! Uses in-memory adapters to exercise the full stack without external
//! dependencies.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use vendor_scout::adapters::http::{
    admin_router, recommendation_router, AdminAppState, RecommendationAppState,
};
use vendor_scout::adapters::in_memory::{InMemoryConfigurationStore, InMemoryVendorCatalog};
use vendor_scout::application::handlers::{RecommendVendorsCommand, RecommendVendorsHandler};
use vendor_scout::domain::foundation::{ErrorCode, MenuId, VendorId};
use vendor_scout::domain::geo::Coordinate;
use vendor_scout::domain::recommendation::{OrderLine, VendorCandidate};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestHarness {
    catalog: Arc<InMemoryVendorCatalog>,
    store: Arc<InMemoryConfigurationStore>,
}

impl TestHarness {
    fn new() -> Self {
        Self {
            catalog: Arc::new(InMemoryVendorCatalog::new()),
            store: Arc::new(InMemoryConfigurationStore::new()),
        }
    }

    fn app(&self) -> Router {
        Router::new()
            .merge(recommendation_router().with_state(RecommendationAppState {
                vendor_catalog: self.catalog.clone(),
                configuration_store: self.store.clone(),
            }))
            .merge(admin_router().with_state(AdminAppState {
                configuration_store: self.store.clone(),
            }))
    }

    fn register_vendor(&self, menu_id: MenuId, max_order: u32, vendor_price: f64) -> VendorId {
        let vendor_id = VendorId::new();
        self.catalog.register(
            menu_id,
            VendorCandidate {
                vendor_id,
                latitude: -6.21,
                longitude: 106.85,
                min_order: 1,
                max_order,
                vendor_price,
            },
        );
        vendor_id
    }
}

/// Identity matrices make every derived weight vector uniform, which is
/// enough for plumbing assertions; scorer math has its own unit tests.
fn admin_body() -> &'static str {
    r#"{
        "criteria_matrix": [[1.0, 2.0, 3.0], [0.5, 1.0, 1.5], [0.3333333333, 0.6666666667, 1.0]],
        "distance_matrix": [[1.0, 2.0, 4.0, 8.0], [0.5, 1.0, 2.0, 4.0], [0.25, 0.5, 1.0, 2.0], [0.125, 0.25, 0.5, 1.0]],
        "capacity_matrix": [[1.0, 9.0], [0.1111111111, 1.0]],
        "price_matrix": [[1.0, 2.0, 4.0], [0.5, 1.0, 2.0], [0.25, 0.5, 1.0]],
        "distance_thresholds": [5.0, 10.0, 15.0, 20.0],
        "capacity_thresholds": [100.0, 500.0],
        "price_thresholds": [5000.0, 7500.0, 10000.0]
    }"#
}

fn order_body(menu_id: MenuId) -> String {
    format!(
        r#"{{
            "shipping_latitude": "-6.2088",
            "shipping_longitude": "106.8456",
            "lines": [{{"menu_id": "{}", "quantity": 50, "price": 30000.0}}]
        }}"#,
        menu_id
    )
}

async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: String,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// =============================================================================
// End-to-end flow
// =============================================================================

#[tokio::test]
async fn configure_then_recommend_over_http() {
    let harness = TestHarness::new();
    let menu_id = MenuId::new();
    let vendor_id = harness.register_vendor(menu_id, 200, 22_000.0);

    // Administrator replaces the weighting model.
    let (status, config_json) = send_json(
        harness.app(),
        "PUT",
        "/api/admin/scoring-configuration",
        admin_body().to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let criteria_sum: f64 = config_json["criteria"]["weights"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w.as_f64().unwrap())
        .sum();
    assert!((criteria_sum - 1.0).abs() < 1e-6);

    // Order intake asks for recommendations.
    let (status, json) = send_json(
        harness.app(),
        "POST",
        "/api/recommendations",
        order_body(menu_id),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["lines"][0]["chosen_vendor"], vendor_id.to_string());
    assert_eq!(json["lines"][0]["ranked"][0]["vendor_id"], vendor_id.to_string());
    assert!(json["lines"][0]["ranked"][0]["distance_km"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn recommendation_before_configuration_is_rejected() {
    let harness = TestHarness::new();
    let menu_id = MenuId::new();
    harness.register_vendor(menu_id, 200, 22_000.0);

    let (status, json) = send_json(
        harness.app(),
        "POST",
        "/api/recommendations",
        order_body(menu_id),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "NO_CONFIGURATION");
}

#[tokio::test]
async fn unfulfillable_line_rejects_the_whole_order() {
    let harness = TestHarness::new();
    let stocked = MenuId::new();
    let unstocked = MenuId::new();
    harness.register_vendor(stocked, 200, 22_000.0);

    send_json(
        harness.app(),
        "PUT",
        "/api/admin/scoring-configuration",
        admin_body().to_string(),
    )
    .await;

    let body = format!(
        r#"{{
            "shipping_latitude": -6.2088,
            "shipping_longitude": 106.8456,
            "lines": [
                {{"menu_id": "{}", "quantity": 50, "price": 30000.0}},
                {{"menu_id": "{}", "quantity": 10, "price": 15000.0}}
            ]
        }}"#,
        stocked, unstocked
    );
    let (status, json) = send_json(harness.app(), "POST", "/api/recommendations", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "NO_VENDORS_AVAILABLE");
    // The rejection payload carries no partial ranking for the stocked line.
    assert!(json.get("lines").is_none());
}

#[tokio::test]
async fn admin_get_echoes_what_was_saved() {
    let harness = TestHarness::new();

    send_json(
        harness.app(),
        "PUT",
        "/api/admin/scoring-configuration",
        admin_body().to_string(),
    )
    .await;

    let response = harness
        .app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/admin/scoring-configuration")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        json["distance_thresholds"],
        serde_json::json!([5.0, 10.0, 15.0, 20.0])
    );
    assert_eq!(json["capacity"]["weights"].as_array().unwrap().len(), 2);
}

// =============================================================================
// Handler-level behavior
// =============================================================================

#[tokio::test]
async fn snapshot_isolation_across_a_concurrent_update() {
    let harness = TestHarness::new();
    let menu_id = MenuId::new();
    harness.register_vendor(menu_id, 200, 22_000.0);

    send_json(
        harness.app(),
        "PUT",
        "/api/admin/scoring-configuration",
        admin_body().to_string(),
    )
    .await;

    let handler = RecommendVendorsHandler::new(harness.catalog.clone(), harness.store.clone());
    let command = RecommendVendorsCommand {
        shipping: Coordinate::new(-6.2088, 106.8456),
        lines: vec![OrderLine {
            menu_id,
            quantity: 50,
            price: 30_000.0,
        }],
    };

    let before = handler.handle(command.clone()).await.unwrap();

    // An administrator levels the price judgments between two attempts,
    // which shifts the derived price weights.
    let leveled = admin_body().replace(
        "[[1.0, 2.0, 4.0], [0.5, 1.0, 2.0], [0.25, 0.5, 1.0]]",
        "[[1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 1.0]]",
    );
    send_json(
        harness.app(),
        "PUT",
        "/api/admin/scoring-configuration",
        leveled,
    )
    .await;

    let after = handler.handle(command).await.unwrap();

    // Each attempt was scored against one consistent bundle; the second
    // attempt sees the replacement, and the first result is unaffected.
    assert_eq!(before.lines.len(), 1);
    assert_eq!(after.lines.len(), 1);
    assert_ne!(
        before.lines[0].ranked[0].score,
        after.lines[0].ranked[0].score
    );
}

#[tokio::test]
async fn handler_surfaces_no_vendors_for_empty_candidate_sets() {
    let harness = TestHarness::new();
    send_json(
        harness.app(),
        "PUT",
        "/api/admin/scoring-configuration",
        admin_body().to_string(),
    )
    .await;

    let handler = RecommendVendorsHandler::new(harness.catalog.clone(), harness.store.clone());
    let result = handler
        .handle(RecommendVendorsCommand {
            shipping: Coordinate::new(-6.2088, 106.8456),
            lines: vec![OrderLine {
                menu_id: MenuId::new(),
                quantity: 1,
                price: 10_000.0,
            }],
        })
        .await;

    assert!(matches!(
        result,
        Err(err) if err.code == ErrorCode::NoVendorsAvailable
    ));
}
