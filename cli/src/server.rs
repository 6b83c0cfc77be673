//! HTTP boundary: `POST /api/data` answers with the selected chapter labels.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use qanit_harness::config::{RunConfig, DEFAULT_GOAL_QUANTITY};
use qanit_harness::runner::{run_selection, RunError};
use qanit_kernel::carrier::catalog::Catalog;

/// Expansion budget for a request when none is configured.
pub const DEFAULT_MAX_EXPANSIONS: u64 = 20_000;

/// Shared, read-only server state. Each request builds its own world.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<RunConfig>,
}

impl AppState {
    /// Requests always run under an expansion budget, so an unset one
    /// becomes [`DEFAULT_MAX_EXPANSIONS`].
    #[must_use]
    pub fn new(catalog: Catalog, mut config: RunConfig) -> Self {
        config.max_expansions.get_or_insert(DEFAULT_MAX_EXPANSIONS);
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DataRequest {
    #[serde(rename = "verseCount", default)]
    verse_count: Option<u64>,
}

enum ApiError {
    Run(RunError),
    Worker(tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Run(err @ RunError::Search(_)) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::Run(err @ RunError::Catalog(_)) => {
                error!(%err, "selection run failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            Self::Worker(err) => {
                error!(%err, "selection worker failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "selection worker failed".to_string(),
                )
            }
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/data", post(select_chapters))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn select_chapters(
    State(state): State<AppState>,
    Json(request): Json<DataRequest>,
) -> Result<Json<Option<Vec<String>>>, ApiError> {
    let goal = request.verse_count.unwrap_or(DEFAULT_GOAL_QUANTITY);
    let report = tokio::task::spawn_blocking(move || {
        run_selection(&state.catalog, goal, &state.config)
    })
    .await
    .map_err(ApiError::Worker)?
    .map_err(ApiError::Run)?;

    match &report {
        Some(report) => info!(goal, labels = ?report.labels, "selection served"),
        None => info!(goal, "no selection for request"),
    }
    Ok(Json(report.map(|r| r.labels)))
}

pub async fn serve(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, items = state.catalog.len(), "listening");
    axum::serve(listener, router(state))
        .await
        .context("server error")
}
