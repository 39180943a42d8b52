//! Error types shared across the timer, its driver and the HTTP surface

use thiserror::Error;

/// Errors surfaced by the timer engine and the tasks around it
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error("Unknown mode '{0}'")]
    UnknownMode(String),

    #[error("Invalid mode configuration: {0}")]
    InvalidModeConfig(String),

    #[error("Timer driver is not running")]
    DriverStopped,
}

pub type Result<T, E = TimerError> = std::result::Result<T, E>;
