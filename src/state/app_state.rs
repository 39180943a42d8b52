//! Shared state handed to the HTTP handlers

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::warn;

use super::{Mode, TimerState};
use crate::{
    error::{Result, TimerError},
    services::ViewState,
    tasks::{TimerAction, TimerCommand},
};

/// Handle to the running timer plus server metadata
#[derive(Debug)]
pub struct AppState {
    /// Commands for the timer driver task
    pub command_tx: mpsc::Sender<TimerCommand>,
    /// Latest rendered view published by the presentation sink
    pub view_rx: watch::Receiver<ViewState>,
    /// Configured modes in display order
    pub modes: Vec<Mode>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    pub fn new(
        command_tx: mpsc::Sender<TimerCommand>,
        view_rx: watch::Receiver<ViewState>,
        modes: Vec<Mode>,
        port: u16,
        host: String,
    ) -> Self {
        Self {
            command_tx,
            view_rx,
            modes,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        }
    }

    /// Send an action to the timer driver and wait for the resulting state
    pub async fn dispatch(&self, action: TimerAction) -> Result<TimerState> {
        let name = action.name();
        let tracked = action != TimerAction::Snapshot;

        let (reply, reply_rx) = oneshot::channel();
        self.command_tx
            .send(TimerCommand { action, reply })
            .await
            .map_err(|_| TimerError::DriverStopped)?;
        let state = reply_rx.await.map_err(|_| TimerError::DriverStopped)??;

        if tracked {
            self.record_action(name);
        }
        Ok(state)
    }

    /// Get the current view
    pub fn get_view(&self) -> ViewState {
        self.view_rx.borrow().clone()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    fn record_action(&self, action: &str) {
        match self.last_action.lock() {
            Ok(mut last_action) => *last_action = Some(action.to_string()),
            Err(e) => warn!("Failed to record last action: {}", e),
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }
}
