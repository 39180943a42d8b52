//! External collaborators of the timer
//!
//! This module contains the presentation and notification interfaces the
//! timer engine drives, plus their host implementations.

pub mod notification;
pub mod presentation;
pub mod system;

// Re-export main types
pub use notification::{DesktopNotifier, NotificationService, Permission};
pub use presentation::{PresentationSink, ViewSink, ViewState};
pub use system::*;
