//! Timer engine implementation.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Paused -> Running -> (Completed) -> Idle
//!   ^        |          |
//!   +--------+----------+   reset / switch_mode
//! ```
//!
//! `Completed` is transient: the tick that reaches zero applies the
//! completion side effects and leaves the engine `Idle` at `00:00`. The
//! countdown stays at zero until `reset` or `switch_mode` re-arms it.

use tracing::{debug, info, warn};

use super::format::{format_time, format_title};
use crate::{
    error::Result,
    services::{NotificationService, PresentationSink},
    state::{Mode, ModeSet, Phase, TimerState},
};

pub const COMPLETION_TITLE: &str = "Pomodoro Complete!";
pub const COMPLETION_BODY: &str = "Time to take a break!";

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The engine was not running; nothing changed
    Ignored,
    /// Still counting down
    Counting { remaining_seconds: u64 },
    /// The countdown reached zero and completion side effects ran
    Completed,
}

/// Core countdown engine.
///
/// Every public operation runs to completion and leaves the collaborators
/// consistent with the new state.
#[derive(Debug)]
pub struct TimerEngine<P, N> {
    modes: ModeSet,
    state: TimerState,
    app_name: String,
    presentation: P,
    notifier: N,
}

impl<P, N> TimerEngine<P, N>
where
    P: PresentationSink,
    N: NotificationService,
{
    /// Create an idle engine on the active mode of `modes` and render it
    pub fn new(modes: ModeSet, app_name: impl Into<String>, presentation: P, notifier: N) -> Self {
        let state = TimerState::new(modes.active().clone());
        let mut engine = Self {
            modes,
            state,
            app_name: app_name.into(),
            presentation,
            notifier,
        };
        engine.render_initial();
        engine
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn modes(&self) -> &ModeSet {
        &self.modes
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Begin counting down. Returns false when nothing changed.
    pub fn start(&mut self) -> bool {
        if self.state.is_running() {
            debug!("Start ignored, timer already running");
            return false;
        }
        if self.state.remaining_seconds == 0 {
            info!("Start ignored, countdown is at zero until reset or mode switch");
            return false;
        }

        self.state.phase = Phase::Running;
        self.show_controls();
        self.refresh_title();
        self.presentation.commit();
        info!(
            "Timer started: mode={}, remaining={}s",
            self.state.active_mode.id, self.state.remaining_seconds
        );
        true
    }

    /// Halt the countdown, keeping the remaining time. Returns false when not running.
    pub fn pause(&mut self) -> bool {
        if !self.halt(Phase::Paused) {
            debug!("Pause ignored, timer not running");
            return false;
        }

        self.refresh_title();
        self.presentation.commit();
        info!("Timer paused at {}s", self.state.remaining_seconds);
        true
    }

    /// Halt any countdown and re-arm the full duration of the active mode
    pub fn reset(&mut self) {
        self.state.phase = Phase::Idle;
        self.state.remaining_seconds = self.state.full_duration_seconds();
        self.show_controls();
        self.render_time();
        self.presentation.set_title(&self.app_name);
        self.presentation.commit();
        info!("Timer reset to {}s", self.state.remaining_seconds);
    }

    /// Halt any countdown and make `mode_id` the active mode at full duration
    pub fn switch_mode(&mut self, mode_id: &str) -> Result<&Mode> {
        let mode = match self.modes.activate(mode_id) {
            Ok(mode) => mode.clone(),
            Err(e) => {
                warn!("Mode switch rejected: {}", e);
                return Err(e);
            }
        };

        self.state.phase = Phase::Idle;
        self.state.remaining_seconds = mode.duration_seconds();
        self.state.active_mode = mode;
        self.show_controls();
        self.presentation.set_label(&self.state.active_mode.label);
        self.render_time();
        self.refresh_title();
        self.presentation.commit();
        info!(
            "Switched to mode {} ({} min)",
            self.state.active_mode.id, self.state.active_mode.duration_minutes
        );
        Ok(&self.state.active_mode)
    }

    /// Advance the countdown by one second
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_running() {
            debug!("Tick ignored, timer not running");
            return TickOutcome::Ignored;
        }

        self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);
        if self.state.remaining_seconds > 0 {
            self.render_time();
            self.refresh_title();
            self.presentation.commit();
            return TickOutcome::Counting {
                remaining_seconds: self.state.remaining_seconds,
            };
        }

        self.complete();
        TickOutcome::Completed
    }

    fn complete(&mut self) {
        // Leave Running before anything renders the zero
        self.halt(Phase::Idle);

        self.state.completed_sessions += 1;
        self.state.total_focus_minutes += self.state.active_mode.duration_minutes;
        info!(
            "Session complete: mode={}, completed_sessions={}, total_minutes={}",
            self.state.active_mode.id, self.state.completed_sessions, self.state.total_focus_minutes
        );

        self.render_time();
        self.refresh_title();
        self.presentation.pulse_complete();
        self.notifier.notify(COMPLETION_TITLE, COMPLETION_BODY);
        self.notifier.play_completion_sound();
        self.presentation
            .update_stats(self.state.completed_sessions, self.state.total_focus_minutes);
        self.presentation.commit();
    }

    /// Leave Running for `phase`. Returns false if the engine was not running.
    fn halt(&mut self, phase: Phase) -> bool {
        if !self.state.is_running() {
            return false;
        }
        self.state.phase = phase;
        self.show_controls();
        true
    }

    fn render_initial(&mut self) {
        self.presentation.set_label(&self.state.active_mode.label);
        self.show_controls();
        self.render_time();
        self.presentation
            .update_stats(self.state.completed_sessions, self.state.total_focus_minutes);
        self.refresh_title();
        self.presentation.commit();
    }

    fn show_controls(&mut self) {
        let running = self.state.is_running();
        self.presentation.set_start_enabled(!running);
        self.presentation.set_pause_enabled(running);
    }

    fn render_time(&mut self) {
        self.presentation
            .render_time(&format_time(self.state.remaining_seconds));
    }

    fn refresh_title(&mut self) {
        let title = if self.state.is_running() || self.state.is_partial() {
            format_title(
                &format_time(self.state.remaining_seconds),
                &self.state.active_mode.label,
                &self.app_name,
            )
        } else {
            self.app_name.clone()
        };
        self.presentation.set_title(&title);
    }
}
