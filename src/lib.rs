//! Persistent stopwatch
//!
//! Records a start instant in a durable store and reports elapsed time as
//! `HH:MM:SS`, surviving process restarts and backgrounding. The engine
//! recomputes elapsed time from the stored instant on every query; the
//! timer session keeps an observable label fresh on a tick and on
//! foreground resume.

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;
pub mod store;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::{create_router, ApiState};
pub use config::Config;
pub use engine::{format_duration, ElapsedTimeEngine};
pub use error::StoreError;
pub use state::{AppLifecycle, LifecycleNotifier, SessionDisposer, TimerSession, TimerState};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use utils::signals::shutdown_signal;
