//! Timer state structure and management

use serde::{Deserialize, Serialize};

use super::Mode;

/// Where the countdown currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Not counting. Either freshly armed or left at zero after a completion.
    Idle,
    Running,
    Paused,
}

/// Mutable countdown state owned by the timer engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub remaining_seconds: u64,
    pub phase: Phase,
    pub active_mode: Mode,
    pub completed_sessions: u64,
    pub total_focus_minutes: u64,
}

impl TimerState {
    /// Create an idle timer armed with the full duration of `mode`
    pub fn new(mode: Mode) -> Self {
        Self {
            remaining_seconds: mode.duration_seconds(),
            phase: Phase::Idle,
            active_mode: mode,
            completed_sessions: 0,
            total_focus_minutes: 0,
        }
    }

    /// Check if the countdown is actively decrementing
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Full countdown length of the active mode
    pub fn full_duration_seconds(&self) -> u64 {
        self.active_mode.duration_seconds()
    }

    /// True once some of the current countdown has been consumed
    pub fn is_partial(&self) -> bool {
        self.remaining_seconds < self.full_duration_seconds()
    }
}
