//! Presentation side of the timer: the sink trait and a watch-channel view

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;

/// Rendering collaborator driven by the timer engine
pub trait PresentationSink {
    fn render_time(&mut self, text: &str);
    fn set_label(&mut self, text: &str);
    fn set_start_enabled(&mut self, enabled: bool);
    fn set_pause_enabled(&mut self, enabled: bool);
    /// Start the transient completion pulse. Clearing it is the sink's job.
    fn pulse_complete(&mut self);
    fn update_stats(&mut self, completed_sessions: u64, total_minutes: u64);
    fn set_title(&mut self, text: &str);

    /// Called once at the end of every engine operation. Sinks that buffer
    /// calls make the whole operation visible here.
    fn commit(&mut self) {}
}

/// Everything a front end needs to draw the timer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub time: String,
    pub label: String,
    pub start_enabled: bool,
    pub pause_enabled: bool,
    pub pulsing: bool,
    pub completed_sessions: u64,
    pub total_minutes: u64,
    pub title: String,
}

/// Sink that buffers changes and publishes one `ViewState` per engine
/// operation on a watch channel
#[derive(Debug)]
pub struct ViewSink {
    view_tx: watch::Sender<ViewState>,
    pending: ViewState,
    pulse_requested: bool,
    pulse_duration: Duration,
}

impl ViewSink {
    /// Create a sink and the receiver front ends read from
    pub fn new(pulse_duration: Duration) -> (Self, watch::Receiver<ViewState>) {
        let (view_tx, view_rx) = watch::channel(ViewState::default());
        let sink = Self {
            view_tx,
            pending: ViewState::default(),
            pulse_requested: false,
            pulse_duration,
        };
        (sink, view_rx)
    }

    fn clear_pulse_later(&self) {
        let view_tx = self.view_tx.clone();
        let pulse_duration = self.pulse_duration;
        tokio::spawn(async move {
            tokio::time::sleep(pulse_duration).await;
            view_tx.send_modify(|view| view.pulsing = false);
            debug!("Completion pulse cleared");
        });
    }
}

impl PresentationSink for ViewSink {
    fn render_time(&mut self, text: &str) {
        self.pending.time = text.to_string();
    }

    fn set_label(&mut self, text: &str) {
        self.pending.label = text.to_string();
    }

    fn set_start_enabled(&mut self, enabled: bool) {
        self.pending.start_enabled = enabled;
    }

    fn set_pause_enabled(&mut self, enabled: bool) {
        self.pending.pause_enabled = enabled;
    }

    fn pulse_complete(&mut self) {
        self.pulse_requested = true;
    }

    fn update_stats(&mut self, completed_sessions: u64, total_minutes: u64) {
        self.pending.completed_sessions = completed_sessions;
        self.pending.total_minutes = total_minutes;
    }

    fn set_title(&mut self, text: &str) {
        self.pending.title = text.to_string();
    }

    fn commit(&mut self) {
        let pulse = std::mem::take(&mut self.pulse_requested);
        let next = self.pending.clone();

        // The pulse flag belongs to the published view; only the clear task resets it
        self.view_tx.send_modify(|view| {
            let pulsing = view.pulsing || pulse;
            *view = next;
            view.pulsing = pulsing;
        });

        if pulse {
            self.clear_pulse_later();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publishes_only_on_commit() {
        let (mut sink, view_rx) = ViewSink::new(Duration::from_millis(500));
        sink.render_time("24:59");
        sink.set_label("Focus Time");
        sink.set_start_enabled(false);
        assert_eq!(*view_rx.borrow(), ViewState::default());

        sink.set_pause_enabled(true);
        sink.update_stats(3, 75);
        sink.set_title("24:59 - Focus Time - Pomodoro Timer");
        sink.commit();

        let view = view_rx.borrow().clone();
        assert_eq!(view.time, "24:59");
        assert_eq!(view.label, "Focus Time");
        assert!(!view.start_enabled);
        assert!(view.pause_enabled);
        assert_eq!(view.completed_sessions, 3);
        assert_eq!(view.total_minutes, 75);
        assert_eq!(view.title, "24:59 - Focus Time - Pomodoro Timer");
    }

    #[tokio::test(start_paused = true)]
    async fn pulse_clears_after_its_duration() {
        let (mut sink, view_rx) = ViewSink::new(Duration::from_millis(500));
        sink.pulse_complete();
        assert!(!view_rx.borrow().pulsing);
        sink.commit();
        assert!(view_rx.borrow().pulsing);

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(view_rx.borrow().pulsing);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!view_rx.borrow().pulsing);
    }

    #[tokio::test(start_paused = true)]
    async fn later_commits_keep_pulse_until_cleared() {
        let (mut sink, view_rx) = ViewSink::new(Duration::from_millis(500));
        sink.pulse_complete();
        sink.commit();

        sink.render_time("05:00");
        sink.commit();
        assert!(view_rx.borrow().pulsing);
        assert_eq!(view_rx.borrow().time, "05:00");

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert!(!view_rx.borrow().pulsing);

        sink.render_time("04:59");
        sink.commit();
        assert!(!view_rx.borrow().pulsing);
    }
}
