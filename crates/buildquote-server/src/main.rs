use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod error;
mod models;
mod routes;

use adapters::JsonFileQuoteRepository;
use application::QuoteService;
use config::ServerConfig;

/// Type alias for the application service with its concrete repository
pub type AppQuoteService = QuoteService<JsonFileQuoteRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub quote_service: Arc<AppQuoteService>,
}

impl AppState {
    pub fn new(repo: JsonFileQuoteRepository) -> Self {
        Self {
            quote_service: Arc::new(QuoteService::new(Arc::new(repo))),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "buildquote API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router: docs, health, and the quote routes at both
/// `/quotes` and `/api/quotes`.
pub fn app(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::quote::router())
        .nest("/api", routes::quote::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("buildquote_server=info,tower_http=info")),
        )
        .init();

    tracing::info!("buildquote API initializing...");

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr()?;

    tracing::info!("Quote store: {}", config.data_path.display());
    let state = AppState::new(JsonFileQuoteRepository::new(&config.data_path));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("API listening on http://{}", addr);

    axum::serve(listener, app(state))
        .await
        .context("Server error")?;

    Ok(())
}
