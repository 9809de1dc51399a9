//! Timer session controller
//!
//! A `TimerSession` is the handle the rendering layer holds. It delegates
//! start/stop to the engine and publishes `TimerState` on a watch channel.
//! Background tasks keep the label fresh while the timer runs and after the
//! app returns to the foreground; the `SessionDisposer` returned alongside
//! the session tears them down.

use std::{
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, info};

use super::{LifecycleNotifier, TimerState};
use crate::{
    engine::{ElapsedTimeEngine, ZERO_LABEL},
    tasks::{lifecycle_refresh_task, refresh_ticker_task, startup_probe_task},
};

/// How often a running timer's label is recomputed by default
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// State shared between the session handle and its background tasks
#[derive(Debug)]
pub struct SessionShared {
    engine: ElapsedTimeEngine,
    tick_interval: Duration,
    state_tx: watch::Sender<TimerState>,
    /// Bumped by every start/stop. Work begun under an older run is
    /// discarded, and a slow startup probe cannot override a user action.
    run_epoch: AtomicU64,
    disposed: AtomicBool,
}

impl SessionShared {
    pub fn engine(&self) -> &ElapsedTimeEngine {
        &self.engine
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.state_tx.subscribe()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    /// Counter identifying the current run; changes on every start/stop
    pub fn run_epoch(&self) -> u64 {
        self.run_epoch.load(Ordering::Acquire)
    }

    fn bump_run_epoch(&self) {
        self.run_epoch.fetch_add(1, Ordering::AcqRel);
    }

    /// Recompute the label from the stored start time and publish it
    ///
    /// A result that lands after the timer was stopped or restarted (or the
    /// session was disposed) is dropped, so a stale read never overwrites
    /// the current run's label.
    pub async fn refresh_label(&self) {
        let epoch = self.run_epoch();
        let label = self.engine.formatted_elapsed_time().await;
        if self.is_disposed() {
            return;
        }

        self.state_tx.send_if_modified(|state| {
            if self.run_epoch() != epoch
                || !state.is_running
                || state.formatted_label == label
            {
                return false;
            }
            state.formatted_label = label;
            true
        });
    }

    /// Mark the timer running after a restart, unless the user already acted.
    /// Returns whether the state was changed.
    pub fn restore_running(&self) -> bool {
        if self.is_disposed() {
            return false;
        }
        self.state_tx.send_if_modified(|state| {
            if self.run_epoch() != 0 {
                return false;
            }
            let changed = !state.is_running;
            state.is_running = true;
            changed
        })
    }
}

/// Handle exposed to the rendering layer
///
/// Cheap to clone; all clones drive the same session.
#[derive(Debug, Clone)]
pub struct TimerSession {
    shared: Arc<SessionShared>,
}

impl TimerSession {
    /// Spawn a session with the default one-second tick
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(engine: ElapsedTimeEngine, lifecycle: &LifecycleNotifier) -> (Self, SessionDisposer) {
        Self::spawn_with_tick(engine, lifecycle, DEFAULT_TICK_INTERVAL)
    }

    pub fn spawn_with_tick(
        engine: ElapsedTimeEngine,
        lifecycle: &LifecycleNotifier,
        tick_interval: Duration,
    ) -> (Self, SessionDisposer) {
        let (state_tx, _) = watch::channel(TimerState::new());
        let shared = Arc::new(SessionShared {
            engine,
            tick_interval,
            state_tx,
            run_epoch: AtomicU64::new(0),
            disposed: AtomicBool::new(false),
        });

        // Subscribe before spawning so no transition is missed
        let subscription = lifecycle.subscribe();
        let initial_lifecycle = lifecycle.current();

        let handles = vec![
            tokio::spawn(startup_probe_task(Arc::clone(&shared))),
            tokio::spawn(refresh_ticker_task(Arc::clone(&shared))),
            tokio::spawn(lifecycle_refresh_task(
                Arc::clone(&shared),
                subscription,
                initial_lifecycle,
            )),
        ];

        debug!("Timer session spawned with tick interval {:?}", tick_interval);

        let disposer = SessionDisposer {
            shared: Arc::clone(&shared),
            handles,
        };
        (Self { shared }, disposer)
    }

    /// Record a start instant and mark the timer running
    ///
    /// Always notifies watchers, so the refresh ticker restarts with an
    /// immediate refresh even if the timer was already running.
    pub async fn start(&self) {
        self.shared.engine.record_start_time().await;
        self.shared.bump_run_epoch();
        self.shared.state_tx.send_modify(|state| {
            state.is_running = true;
        });
        info!("Timer started");
    }

    /// Clear the start instant, mark the timer stopped and reset the label
    pub async fn stop(&self) {
        // Invalidate in-flight refreshes before the store changes
        self.shared.bump_run_epoch();
        self.shared.engine.clear_start_time().await;
        self.shared.state_tx.send_modify(|state| {
            state.is_running = false;
            state.formatted_label = ZERO_LABEL.to_string();
        });
        info!("Timer stopped");
    }

    /// Snapshot of the current display state
    pub fn state(&self) -> TimerState {
        self.shared.state_tx.borrow().clone()
    }

    pub fn formatted_label(&self) -> String {
        self.shared.state_tx.borrow().formatted_label.clone()
    }

    pub fn is_running(&self) -> bool {
        self.shared.state_tx.borrow().is_running
    }

    /// Watch display state changes
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.shared.subscribe()
    }

    pub fn engine(&self) -> &ElapsedTimeEngine {
        &self.shared.engine
    }
}

/// Cancels a session's background work when disposed or dropped
#[derive(Debug)]
pub struct SessionDisposer {
    shared: Arc<SessionShared>,
    handles: Vec<JoinHandle<()>>,
}

impl SessionDisposer {
    /// Abort the startup probe, refresh ticker and lifecycle subscription.
    /// Calling this more than once is a no-op.
    pub fn dispose(&mut self) {
        if self.shared.disposed.swap(true, Ordering::AcqRel) {
            return;
        }
        for handle in self.handles.drain(..) {
            handle.abort();
        }
        info!("Timer session disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.is_disposed()
    }
}

impl Drop for SessionDisposer {
    fn drop(&mut self) {
        self.dispose();
    }
}
