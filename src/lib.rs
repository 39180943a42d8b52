//! Pomodoro Timer - a focus/break countdown with session stats
//!
//! This library provides the countdown state machine, the background task
//! that drives it once per second, and an HTTP surface front ends use to
//! control it and read the rendered view.

pub mod config;
pub mod engine;
pub mod error;
pub mod state;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

use std::{sync::Arc, time::Duration};
use tokio::sync::mpsc;

// Re-export commonly used types
pub use config::Config;
pub use engine::TimerEngine;
pub use error::TimerError;
pub use state::AppState;
pub use api::create_router;
pub use utils::signals::shutdown_signal;

use services::{DesktopNotifier, ViewSink};
use state::ModeSet;
use tasks::timer_driver_task;

/// Real-time tick period
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Build the engine with the host collaborators, spawn its driver and
/// return the shared state the HTTP handlers use
pub fn spawn_timer(
    modes: ModeSet,
    app_name: &str,
    pulse_duration: Duration,
    notifier: DesktopNotifier,
    port: u16,
    host: String,
) -> Arc<AppState> {
    let mode_list = modes.iter().cloned().collect();
    let (sink, view_rx) = ViewSink::new(pulse_duration);
    let engine = TimerEngine::new(modes, app_name, sink, notifier);

    let (command_tx, command_rx) = mpsc::channel(32);
    tokio::spawn(timer_driver_task(engine, command_rx, TICK_PERIOD));

    Arc::new(AppState::new(command_tx, view_rx, mode_list, port, host))
}
