//! Elapsed-time engine
//!
//! The only persisted state is the start instant. Elapsed time is always
//! recomputed from it, so missed ticks, backgrounding or a killed process
//! never cause drift.

pub mod clock;
pub mod format;

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{debug, warn};

use crate::{
    error::StoreResult,
    store::KeyValueStore,
};

pub use clock::{Clock, ManualClock, SystemClock};
pub use format::{format_duration, ZERO_LABEL};

/// Key the start instant is stored under unless configured otherwise
pub const DEFAULT_START_KEY: &str = "start_time";

/// Owns the start/stop/elapsed semantics on top of an injected store
///
/// Store failures never reach the caller of the plain operations: writes
/// are logged and absorbed, reads degrade to zero. The `try_*` variants
/// expose the underlying `StoreError` for callers that want it.
#[derive(Clone)]
pub struct ElapsedTimeEngine {
    store: Arc<dyn KeyValueStore>,
    key: String,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for ElapsedTimeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElapsedTimeEngine")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl ElapsedTimeEngine {
    /// Create an engine using the system clock
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self::with_clock(store, key, Arc::new(SystemClock))
    }

    pub fn with_clock(
        store: Arc<dyn KeyValueStore>,
        key: impl Into<String>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            key: key.into(),
            clock,
        }
    }

    /// Persist the current instant as the start time
    pub async fn record_start_time(&self) {
        let now = self.clock.now().to_rfc3339_opts(SecondsFormat::Millis, true);
        match self.store.set(&self.key, &now).await {
            Ok(()) => debug!("Recorded start time {}", now),
            Err(e) => warn!("Failed to record start time: {}", e),
        }
    }

    /// Remove the stored start time
    pub async fn clear_start_time(&self) {
        match self.store.delete(&self.key).await {
            Ok(()) => debug!("Cleared start time"),
            Err(e) => warn!("Failed to clear start time: {}", e),
        }
    }

    /// Whether a usable start instant is stored
    ///
    /// A value that does not parse as an instant counts as absent, matching
    /// `elapsed_seconds`, so a corrupt entry never restores a running timer
    /// stuck at zero.
    pub async fn try_has_start_time(&self) -> StoreResult<bool> {
        Ok(self.try_started_at().await?.is_some())
    }

    /// Whether a start time is currently stored. Read failures count as "no".
    pub async fn has_start_time(&self) -> bool {
        self.try_has_start_time().await.unwrap_or_else(|e| {
            warn!("Failed to check for start time: {}", e);
            false
        })
    }

    /// The stored start instant, if present and parseable
    pub async fn try_started_at(&self) -> StoreResult<Option<DateTime<Utc>>> {
        let Some(raw) = self.store.get(&self.key).await? else {
            return Ok(None);
        };

        match DateTime::parse_from_rfc3339(&raw) {
            Ok(start) => Ok(Some(start.with_timezone(&Utc))),
            Err(e) => {
                warn!("Ignoring unparseable start time {:?}: {}", raw, e);
                Ok(None)
            }
        }
    }

    pub async fn started_at(&self) -> Option<DateTime<Utc>> {
        self.try_started_at().await.unwrap_or_else(|e| {
            warn!("Failed to read start time: {}", e);
            None
        })
    }

    /// Whole seconds since the stored start, or `None` when nothing is stored
    ///
    /// May be negative if the wall clock moved backwards since the start was
    /// recorded.
    pub async fn try_elapsed_seconds(&self) -> StoreResult<Option<i64>> {
        Ok(self
            .try_started_at()
            .await?
            .map(|start| self.elapsed_since(start)))
    }

    /// Whole seconds between `start` and the engine clock's now
    pub fn elapsed_since(&self, start: DateTime<Utc>) -> i64 {
        (self.clock.now() - start).num_seconds()
    }

    /// Whole seconds since the stored start; 0 when stopped or unreadable
    pub async fn elapsed_seconds(&self) -> i64 {
        match self.try_elapsed_seconds().await {
            Ok(elapsed) => elapsed.unwrap_or(0),
            Err(e) => {
                warn!("Failed to read start time: {}", e);
                0
            }
        }
    }

    pub async fn formatted_elapsed_time(&self) -> String {
        format_duration(Some(self.elapsed_seconds().await))
    }
}
