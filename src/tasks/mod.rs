//! Background tasks module
//!
//! Each timer session runs these tasks alongside the rendering layer.

pub mod lifecycle_refresh;
pub mod refresh_ticker;
pub mod startup_probe;

// Re-export main functions
pub use lifecycle_refresh::lifecycle_refresh_task;
pub use refresh_ticker::refresh_ticker_task;
pub use startup_probe::startup_probe_task;
