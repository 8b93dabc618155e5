//! # Server Module
//!
//! HTTP surface for pipeline analysis.
//!
//! - `GET /` - liveness probe
//! - `POST /pipelines/parse` - counts and DAG classification for a pipeline

pub mod error;

pub use error::{ApiError, ErrorBody};

use crate::application::AppConfig;
use crate::graph::{Pipeline, PipelineSummary};
use crate::primitives::{ConfigError, DanglingEdgePolicy, ServerError};
use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};

/// Per-router state shared by handlers
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub dangling_edges: DanglingEdgePolicy,
}

/// Build the application router from configuration
pub fn router(config: &AppConfig) -> Result<Router, ConfigError> {
    let state = AppState {
        dangling_edges: config.dangling_edges,
    };

    // TraceLayer logs all HTTP requests with method, path, status, and latency
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Ok(Router::new()
        .route("/", get(ping))
        .route("/pipelines/parse", post(parse_pipeline))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(cors_layer(&config.allowed_origins)?)
        .layer(trace_layer)
        .with_state(state))
}

/// CORS policy: listed origins with credentials; methods and headers mirrored
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, ConfigError> {
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin {
                origin: origin.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

async fn ping() -> Json<Value> {
    Json(json!({ "Ping": "Pong" }))
}

async fn parse_pipeline(
    State(state): State<AppState>,
    payload: Result<Json<Pipeline>, JsonRejection>,
) -> Result<Json<PipelineSummary>, ApiError> {
    let Json(pipeline) = payload?;
    let summary = pipeline.summarize(state.dangling_edges)?;
    Ok(Json(summary))
}

/// Bind the configured address and serve until Ctrl-C / SIGTERM
pub async fn serve(config: &AppConfig) -> Result<(), ServerError> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::BindFailed { addr, source })?;

    serve_with_listener(listener, config, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve_with_listener<F>(
    listener: TcpListener,
    config: &AppConfig,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(config)?;
    let local_addr = listener
        .local_addr()
        .map_err(|source| ServerError::LocalAddr { source })?;

    info!(
        addr = %local_addr,
        dangling_edges = ?config.dangling_edges,
        max_body_bytes = config.max_body_bytes,
        "Pipeline server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|source| ServerError::ServeFailed { source })?;

    info!("Pipeline server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
