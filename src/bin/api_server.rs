// src/bin/api_server.rs

use food_marketplace::infra::telemetry;
use food_marketplace::storage::postgres;
use food_marketplace::transport;
use food_marketplace::{Config, ItemService, ItemValidator, PgItemRepository};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init_tracing();

    // --- Store Initialization ---
    tracing::info!("Connecting to PostgreSQL (max_connections={})", config.max_connections);
    let pool = postgres::connect(&config).await?;
    postgres::ensure_schema(&pool).await?;
    tracing::info!("Schema ready (categories, items)");

    // --- Service Initialization ---
    let repo = Arc::new(PgItemRepository::new(pool));
    let validator = ItemValidator::new(config.restaurant_id_rule);
    tracing::info!("Restaurant references checked with the '{}' rule", config.restaurant_id_rule);
    let app_state = transport::http::AppState {
        items: Arc::new(ItemService::new(repo, validator)),
    };

    // --- API Server Initialization ---
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("API server listening on http://{}", config.bind_addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received (Ctrl+C)");
}
