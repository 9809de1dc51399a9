//! Periodic label refresh while the timer runs

use std::sync::Arc;

use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::state::{SessionShared, TimerState};

/// Background task that refreshes the label every tick while running
///
/// Each time a run begins the label is refreshed once right away, then on
/// every tick until the session stops. A stop/start pair that the watch
/// channel folds into one notification is still seen as a new run through
/// the session's run epoch. Every refresh recomputes from the stored start
/// time, so late or skipped ticks never show up as drift.
pub async fn refresh_ticker_task(session: Arc<SessionShared>) {
    info!("Starting refresh ticker task");

    let mut state_rx = session.subscribe();

    loop {
        // Wait until the timer is running
        let started = state_rx.wait_for(TimerState::is_running).await.is_ok();
        if !started {
            break;
        }

        let epoch = session.run_epoch();
        let tick = session.tick_interval();
        debug!("Timer running, refreshing label every {:?}", tick);
        session.refresh_label().await;

        let mut interval = interval_at(Instant::now() + tick, tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    session.refresh_label().await;
                }

                changed = state_rx.changed() => {
                    if changed.is_err() {
                        return;
                    }
                    let running = state_rx.borrow_and_update().is_running;
                    if !running {
                        debug!("Timer stopped, cancelling refresh ticks");
                        break;
                    }
                    if session.run_epoch() != epoch {
                        debug!("Timer restarted, refreshing immediately");
                        break;
                    }
                }
            }
        }
    }

    debug!("Refresh ticker task finished");
}
