//! State management module
//!
//! This module contains the observable timer state, lifecycle notifications
//! and the session controller that ties them to the engine.

pub mod lifecycle;
pub mod session;
pub mod timer_state;

// Re-export main types
pub use lifecycle::{AppLifecycle, LifecycleNotifier, LifecycleSubscription};
pub use session::{SessionDisposer, SessionShared, TimerSession, DEFAULT_TICK_INTERVAL};
pub use timer_state::TimerState;
