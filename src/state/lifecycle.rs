//! Foreground/background lifecycle notifications

use std::{
    fmt,
    str::FromStr,
    sync::{Arc, Mutex},
};

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Application lifecycle as reported by the host environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppLifecycle {
    Active,
    Inactive,
    Background,
}

impl AppLifecycle {
    /// Whether this state leaves the display un-refreshed
    pub fn is_suspended(self) -> bool {
        matches!(self, Self::Inactive | Self::Background)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Background => "background",
        }
    }
}

impl fmt::Display for AppLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppLifecycle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "background" => Ok(Self::Background),
            other => Err(format!("Unknown lifecycle state: {}", other)),
        }
    }
}

/// Publishes lifecycle transitions to any number of subscribers
#[derive(Debug, Clone)]
pub struct LifecycleNotifier {
    current: Arc<Mutex<AppLifecycle>>,
    tx: broadcast::Sender<AppLifecycle>,
}

impl LifecycleNotifier {
    pub fn new(initial: AppLifecycle) -> Self {
        let (tx, _) = broadcast::channel(32);
        Self {
            current: Arc::new(Mutex::new(initial)),
            tx,
        }
    }

    /// Last reported lifecycle state
    pub fn current(&self) -> AppLifecycle {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Record a new lifecycle state, notify subscribers and return the
    /// state it replaced
    pub fn set(&self, next: AppLifecycle) -> AppLifecycle {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        let previous = std::mem::replace(&mut *current, next);
        debug!("Lifecycle changed {} -> {}", previous, next);

        // Sent under the lock so subscribers see transitions in order.
        // No subscribers is fine.
        let _ = self.tx.send(next);
        previous
    }

    pub fn subscribe(&self) -> LifecycleSubscription {
        LifecycleSubscription {
            rx: Some(self.tx.subscribe()),
        }
    }
}

impl Default for LifecycleNotifier {
    fn default() -> Self {
        Self::new(AppLifecycle::Active)
    }
}

/// A live subscription to lifecycle transitions
#[derive(Debug)]
pub struct LifecycleSubscription {
    rx: Option<broadcast::Receiver<AppLifecycle>>,
}

impl LifecycleSubscription {
    /// Wait for the next transition. Returns `None` once unsubscribed or
    /// once the notifier is gone.
    pub async fn recv(&mut self) -> Option<AppLifecycle> {
        loop {
            let rx = self.rx.as_mut()?;
            match rx.recv().await {
                Ok(state) => return Some(state),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("Lifecycle subscriber lagged, skipped {} transitions", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => {
                    self.rx = None;
                    return None;
                }
            }
        }
    }

    /// Stop receiving transitions. Safe to call more than once.
    pub fn unsubscribe(&mut self) {
        self.rx = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_sets_report_a_consistent_history() {
        let notifier = LifecycleNotifier::new(AppLifecycle::Active);
        let states = [AppLifecycle::Background, AppLifecycle::Inactive, AppLifecycle::Active];

        let mut handles = Vec::new();
        for i in 0..64 {
            let notifier = notifier.clone();
            let next = states[i % states.len()];
            handles.push(tokio::spawn(async move { (notifier.set(next), next) }));
        }

        let mut pairs = Vec::new();
        for handle in handles {
            pairs.push(handle.await.unwrap());
        }

        // Atomic swaps chain together: every reported previous state is the
        // initial state or some other call's next, with only the final
        // state left unconsumed.
        let mut previous: Vec<_> = pairs.iter().map(|(p, _)| p.as_str()).collect();
        let mut expected: Vec<_> = pairs.iter().map(|(_, n)| n.as_str()).collect();
        expected.push(AppLifecycle::Active.as_str());
        let final_pos = expected
            .iter()
            .position(|s| *s == notifier.current().as_str())
            .unwrap();
        expected.swap_remove(final_pos);

        previous.sort_unstable();
        expected.sort_unstable();
        assert_eq!(previous, expected);
    }

    #[test]
    fn parses_and_displays_lowercase() {
        assert_eq!("active".parse::<AppLifecycle>().unwrap(), AppLifecycle::Active);
        assert_eq!("Background".parse::<AppLifecycle>().unwrap(), AppLifecycle::Background);
        assert!("asleep".parse::<AppLifecycle>().is_err());
        assert_eq!(AppLifecycle::Inactive.to_string(), "inactive");
        assert!(AppLifecycle::Inactive.is_suspended());
        assert!(!AppLifecycle::Active.is_suspended());
    }

    #[tokio::test]
    async fn subscribers_see_every_transition() {
        let notifier = LifecycleNotifier::default();
        let mut sub = notifier.subscribe();

        assert_eq!(notifier.set(AppLifecycle::Background), AppLifecycle::Active);
        assert_eq!(notifier.set(AppLifecycle::Active), AppLifecycle::Background);

        assert_eq!(sub.recv().await, Some(AppLifecycle::Background));
        assert_eq!(sub.recv().await, Some(AppLifecycle::Active));
        assert_eq!(notifier.current(), AppLifecycle::Active);
    }

    #[tokio::test]
    async fn unsubscribe_is_idempotent() {
        let notifier = LifecycleNotifier::default();
        let mut sub = notifier.subscribe();
        sub.unsubscribe();
        sub.unsubscribe();

        notifier.set(AppLifecycle::Inactive);
        assert_eq!(sub.recv().await, None);
    }
}
