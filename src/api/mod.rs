//! HTTP API module
//!
//! Exposes a timer session to an out-of-process rendering layer.

pub mod handlers;
pub mod responses;

use std::{sync::Arc, time::Instant};

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::{LifecycleNotifier, TimerSession};
use handlers::*;

/// Everything the handlers need
#[derive(Debug)]
pub struct ApiState {
    pub session: TimerSession,
    pub lifecycle: LifecycleNotifier,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
}

impl ApiState {
    pub fn new(session: TimerSession, lifecycle: LifecycleNotifier, port: u16, host: String) -> Self {
        Self {
            session,
            lifecycle,
            start_time: Instant::now(),
            port,
            host,
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/start", post(start_handler))
        .route("/stop", post(stop_handler))
        .route("/status", get(status_handler))
        .route("/lifecycle/:state", post(lifecycle_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
