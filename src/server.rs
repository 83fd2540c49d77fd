//! HTTP surface of the service.
//!
//! Two public endpoints: `GET /` (service banner) and `GET /health`
//! (liveness probe for deploy checks). CORS is restricted to the configured
//! origins with credentials allowed; methods and headers mirror the
//! preflight request.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Settings;

/// Body of `GET /`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub status: String,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub environment: String,
    pub version: String,
}

async fn root(State(settings): State<Arc<Settings>>) -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("Welcome to {}", settings.app_name),
        version: settings.app_version.clone(),
        status: "running".to_string(),
    })
}

async fn health(State(settings): State<Arc<Settings>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        environment: settings.environment.clone(),
        version: settings.app_version.clone(),
    })
}

/// Build the application router with CORS and request tracing.
///
/// Fails if any configured origin is not a valid header value.
pub fn router(settings: Arc<Settings>) -> Result<Router> {
    let mut origins = Vec::new();
    for origin in settings.origins_list() {
        let value = origin
            .parse::<HeaderValue>()
            .with_context(|| format!("invalid CORS origin '{origin}'"))?;
        origins.push(value);
    }

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Ok(Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(settings))
}

/// Bind the configured address and serve until shutdown.
pub async fn serve(settings: Arc<Settings>) -> Result<()> {
    let app = router(settings.clone())?;
    let addr = format!("{}:{}", settings.host, settings.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
