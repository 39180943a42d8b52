//! Countdown state machine
//!
//! `TimerEngine` owns the timer state and drives the presentation and
//! notification collaborators. It never sleeps; the driver task calls `tick`.

pub mod format;
pub mod timer_engine;

pub use format::{format_time, format_title};
pub use timer_engine::{TickOutcome, TimerEngine, COMPLETION_BODY, COMPLETION_TITLE};
