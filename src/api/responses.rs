//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{AppLifecycle, TimerState};

/// Response for start/stop endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerState,
}

impl TimerResponse {
    pub fn new(message: String, timer: TimerState) -> Self {
        let status = if timer.is_running { "running" } else { "stopped" };
        Self {
            status: status.to_string(),
            message,
            timestamp: Utc::now(),
            timer,
        }
    }
}

/// Status response with the persisted start instant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerState,
    pub elapsed_seconds: i64,
    pub started_at: Option<DateTime<Utc>>,
    pub lifecycle: AppLifecycle,
    pub uptime: String,
    pub port: u16,
    pub host: String,
}

/// Response for lifecycle transitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifecycleResponse {
    pub previous: AppLifecycle,
    pub current: AppLifecycle,
    pub timer: TimerState,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
