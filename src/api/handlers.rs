//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{info, warn};

use super::{
    responses::{HealthResponse, LifecycleResponse, StatusResponse, TimerResponse},
    ApiState,
};
use crate::state::AppLifecycle;

/// Handle POST /start - Record a start instant
pub async fn start_handler(State(state): State<Arc<ApiState>>) -> Json<TimerResponse> {
    state.session.start().await;
    info!("Start endpoint called");
    Json(TimerResponse::new(
        "Timer started".to_string(),
        state.session.state(),
    ))
}

/// Handle POST /stop - Clear the start instant
pub async fn stop_handler(State(state): State<Arc<ApiState>>) -> Json<TimerResponse> {
    state.session.stop().await;
    info!("Stop endpoint called");
    Json(TimerResponse::new(
        "Timer stopped".to_string(),
        state.session.state(),
    ))
}

/// Handle GET /status - Return current timer status
pub async fn status_handler(State(state): State<Arc<ApiState>>) -> Json<StatusResponse> {
    let engine = state.session.engine();
    let started_at = engine.started_at().await;
    let elapsed_seconds = started_at
        .map(|start| engine.elapsed_since(start).max(0))
        .unwrap_or(0);

    Json(StatusResponse {
        timer: state.session.state(),
        elapsed_seconds,
        started_at,
        lifecycle: state.lifecycle.current(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
    })
}

/// Handle POST /lifecycle/:state - Report a foreground/background transition
pub async fn lifecycle_handler(
    State(state): State<Arc<ApiState>>,
    Path(next): Path<String>,
) -> Result<Json<LifecycleResponse>, StatusCode> {
    let next: AppLifecycle = next.parse().map_err(|e| {
        warn!("Rejected lifecycle transition: {}", e);
        StatusCode::BAD_REQUEST
    })?;

    let previous = state.lifecycle.set(next);
    info!("Lifecycle transition {} -> {}", previous, next);

    Ok(Json(LifecycleResponse {
        previous,
        current: next,
        timer: state.session.state(),
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
