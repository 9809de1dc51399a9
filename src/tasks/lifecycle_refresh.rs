//! Foreground-resume refresh task

use std::sync::Arc;

use tracing::{debug, info};

use crate::state::{AppLifecycle, LifecycleSubscription, SessionShared};

/// Background task that refreshes the label when the app returns to the
/// foreground
///
/// Ticks may have been suspended while the app was inactive or in the
/// background, so the label is recomputed immediately on the transition
/// back to active instead of waiting for the next tick.
pub async fn lifecycle_refresh_task(
    session: Arc<SessionShared>,
    mut subscription: LifecycleSubscription,
    initial: AppLifecycle,
) {
    info!("Starting lifecycle refresh task");

    let mut previous = initial;
    while let Some(next) = subscription.recv().await {
        if previous.is_suspended() && next == AppLifecycle::Active {
            info!("Returned to foreground from {}, refreshing label", previous);
            session.refresh_label().await;
        }
        previous = next;
    }

    subscription.unsubscribe();
    debug!("Lifecycle subscription ended");
}
