//! Completion alerts: desktop notification and sound

use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use super::system::{check_command_available, run_command};

/// Alerting collaborator invoked when a countdown completes
pub trait NotificationService {
    /// Ask the host for permission to notify. Never blocks; the outcome is
    /// only consulted by later `notify` calls.
    fn request_permission_if_undetermined(&self);
    fn notify(&self, title: &str, body: &str);
    fn play_completion_sound(&self);
}

/// Outcome of the notification permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Undetermined,
    Granted,
    Denied,
}

/// Notifies through `notify-send` and plays the sound through `canberra-gtk-play`
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    permission: Arc<Mutex<Permission>>,
    notifications_enabled: bool,
    sound_enabled: bool,
    notify_program: String,
    sound_program: String,
}

impl DesktopNotifier {
    pub fn new(notifications_enabled: bool, sound_enabled: bool) -> Self {
        Self::with_programs(notifications_enabled, sound_enabled, "notify-send", "canberra-gtk-play")
    }

    /// Same as `new` with explicit host programs
    pub fn with_programs(
        notifications_enabled: bool,
        sound_enabled: bool,
        notify_program: &str,
        sound_program: &str,
    ) -> Self {
        Self {
            permission: Arc::new(Mutex::new(Permission::Undetermined)),
            notifications_enabled,
            sound_enabled,
            notify_program: notify_program.to_string(),
            sound_program: sound_program.to_string(),
        }
    }

    /// Current permission state
    pub fn permission(&self) -> Permission {
        self.permission
            .lock()
            .map(|permission| *permission)
            .unwrap_or(Permission::Denied)
    }

    fn set_permission(permission: &Mutex<Permission>, value: Permission) {
        if let Ok(mut current) = permission.lock() {
            *current = value;
        }
    }
}

impl NotificationService for DesktopNotifier {
    fn request_permission_if_undetermined(&self) {
        if self.permission() != Permission::Undetermined {
            return;
        }

        if !self.notifications_enabled {
            info!("Desktop notifications disabled by configuration");
            Self::set_permission(&self.permission, Permission::Denied);
            return;
        }

        let permission = Arc::clone(&self.permission);
        let program = self.notify_program.clone();
        tokio::spawn(async move {
            match check_command_available(&program).await {
                Ok(()) => {
                    info!("Desktop notifications available via {}", program);
                    Self::set_permission(&permission, Permission::Granted);
                }
                Err(e) => {
                    warn!("Desktop notifications unavailable: {}", e);
                    Self::set_permission(&permission, Permission::Denied);
                }
            }
        });
    }

    fn notify(&self, title: &str, body: &str) {
        if self.permission() != Permission::Granted {
            debug!("Skipping notification, permission is {:?}", self.permission());
            return;
        }

        let program = self.notify_program.clone();
        let title = title.to_string();
        let body = body.to_string();
        tokio::spawn(async move {
            if let Err(e) = run_command(&program, &[title.as_str(), body.as_str()]).await {
                warn!("Failed to show notification: {}", e);
            }
        });
    }

    fn play_completion_sound(&self) {
        if !self.sound_enabled {
            return;
        }

        let program = self.sound_program.clone();
        tokio::spawn(async move {
            if let Err(e) = run_command(&program, &["--id", "complete"]).await {
                debug!("Sound player unavailable ({}), ringing terminal bell", e);
                eprint!("\x07");
            }
        });
    }
}
