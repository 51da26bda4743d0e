use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vendor_scout::adapters::http::{
    admin_router, recommendation_router, AdminAppState, RecommendationAppState,
};
use vendor_scout::adapters::postgres::{PostgresConfigurationStore, PostgresVendorCatalog};
use vendor_scout::adapters::storage::JsonFileConfigurationStore;
use vendor_scout::config::AppConfig;
use vendor_scout::ports::ConfigurationStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let vendor_catalog = Arc::new(PostgresVendorCatalog::new(pool.clone()));
    let configuration_store: Arc<dyn ConfigurationStore> = match &config.engine.configuration_file
    {
        Some(path) => Arc::new(JsonFileConfigurationStore::new(path)),
        None => Arc::new(PostgresConfigurationStore::new(pool)),
    };

    let recommendation_state = RecommendationAppState {
        vendor_catalog,
        configuration_store: configuration_store.clone(),
    };
    let admin_state = AdminAppState {
        configuration_store,
    };

    let app = Router::new()
        .merge(recommendation_router().with_state(recommendation_state))
        .merge(admin_router().with_state(admin_state))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Vendor Scout listening");

    axum::serve(listener, app).await?;

    Ok(())
}
