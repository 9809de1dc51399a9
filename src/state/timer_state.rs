//! Observable display state of a timer session

use serde::{Deserialize, Serialize};

use crate::engine::ZERO_LABEL;

/// What the rendering layer shows: the label and whether the timer runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub formatted_label: String,
    pub is_running: bool,
}

impl TimerState {
    /// Create a stopped timer state showing `00:00:00`
    pub fn new() -> Self {
        Self::stopped()
    }

    pub fn stopped() -> Self {
        Self {
            formatted_label: ZERO_LABEL.to_string(),
            is_running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
