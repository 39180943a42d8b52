//! Recording fakes for the timer collaborators

use std::sync::{Arc, Mutex};

use crate::services::{NotificationService, PresentationSink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Time(String),
    Label(String),
    StartEnabled(bool),
    PauseEnabled(bool),
    Pulse,
    Stats(u64, u64),
    Title(String),
}

/// Presentation sink that records every call. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    calls: Arc<Mutex<Vec<Call>>>,
    committed: Arc<Mutex<usize>>,
}

impl RecordingSink {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
        *self.committed.lock().unwrap() = 0;
    }

    /// Calls made after the most recent commit
    pub fn uncommitted(&self) -> Vec<Call> {
        let committed = *self.committed.lock().unwrap();
        self.calls()[committed..].to_vec()
    }

    pub fn last_time(&self) -> Option<String> {
        self.calls().into_iter().rev().find_map(|call| match call {
            Call::Time(text) => Some(text),
            _ => None,
        })
    }

    pub fn last_title(&self) -> Option<String> {
        self.calls().into_iter().rev().find_map(|call| match call {
            Call::Title(text) => Some(text),
            _ => None,
        })
    }

    pub fn count(&self, wanted: &Call) -> usize {
        self.calls().iter().filter(|call| *call == wanted).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl PresentationSink for RecordingSink {
    fn render_time(&mut self, text: &str) {
        self.record(Call::Time(text.to_string()));
    }

    fn set_label(&mut self, text: &str) {
        self.record(Call::Label(text.to_string()));
    }

    fn set_start_enabled(&mut self, enabled: bool) {
        self.record(Call::StartEnabled(enabled));
    }

    fn set_pause_enabled(&mut self, enabled: bool) {
        self.record(Call::PauseEnabled(enabled));
    }

    fn pulse_complete(&mut self) {
        self.record(Call::Pulse);
    }

    fn update_stats(&mut self, completed_sessions: u64, total_minutes: u64) {
        self.record(Call::Stats(completed_sessions, total_minutes));
    }

    fn set_title(&mut self, text: &str) {
        self.record(Call::Title(text.to_string()));
    }

    fn commit(&mut self) {
        *self.committed.lock().unwrap() = self.calls.lock().unwrap().len();
    }
}

/// Notification service that records alerts. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    permission_requests: Arc<Mutex<usize>>,
    notifications: Arc<Mutex<Vec<(String, String)>>>,
    sounds: Arc<Mutex<usize>>,
}

impl RecordingNotifier {
    pub fn permission_requests(&self) -> usize {
        *self.permission_requests.lock().unwrap()
    }

    pub fn notifications(&self) -> Vec<(String, String)> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn sounds(&self) -> usize {
        *self.sounds.lock().unwrap()
    }
}

impl NotificationService for RecordingNotifier {
    fn request_permission_if_undetermined(&self) {
        *self.permission_requests.lock().unwrap() += 1;
    }

    fn notify(&self, title: &str, body: &str) {
        self.notifications
            .lock()
            .unwrap()
            .push((title.to_string(), body.to_string()));
    }

    fn play_completion_sound(&self) {
        *self.sounds.lock().unwrap() += 1;
    }
}
