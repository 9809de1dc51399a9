//! Running-state recovery after a restart

use std::sync::Arc;

use tracing::{debug, info};

use crate::state::SessionShared;

/// Background task that restores the running flag from the store
///
/// The store is ground truth: if a start instant survived the previous
/// process, the session comes back up running. The label itself is left to
/// the refresh ticker.
pub async fn startup_probe_task(session: Arc<SessionShared>) {
    if !session.engine().has_start_time().await {
        debug!("No stored start time, timer stays stopped");
        return;
    }

    if session.restore_running() {
        info!("Stored start time found, timer restored as running");
    } else {
        debug!("Stored start time found but session already changed");
    }
}
