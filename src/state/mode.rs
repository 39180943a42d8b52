//! Countdown modes and the fixed set the timer chooses from

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimerError};

/// Longest mode that still renders as two-digit `MM:SS`
pub const MAX_DURATION_MINUTES: u64 = 99;

/// A named countdown configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mode {
    pub id: String,
    pub label: String,
    pub duration_minutes: u64,
}

impl Mode {
    pub fn new(id: impl Into<String>, label: impl Into<String>, duration_minutes: u64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            duration_minutes,
        }
    }

    /// Full countdown length of this mode
    pub fn duration_seconds(&self) -> u64 {
        self.duration_minutes * 60
    }
}

/// Ordered, fixed set of modes with exactly one active entry
#[derive(Debug, Clone)]
pub struct ModeSet {
    modes: Vec<Mode>,
    active: usize,
}

impl ModeSet {
    /// Validate the configured modes and mark `active_id` as the initial mode
    pub fn new(modes: Vec<Mode>, active_id: &str) -> Result<Self> {
        if modes.is_empty() {
            return Err(TimerError::InvalidModeConfig("no modes configured".to_string()));
        }

        let mut seen = HashSet::new();
        for mode in &modes {
            if !(1..=MAX_DURATION_MINUTES).contains(&mode.duration_minutes) {
                return Err(TimerError::InvalidModeConfig(format!(
                    "mode '{}' must last between 1 and {} minutes",
                    mode.id, MAX_DURATION_MINUTES
                )));
            }
            if !seen.insert(mode.id.as_str()) {
                return Err(TimerError::InvalidModeConfig(format!(
                    "mode '{}' is configured twice",
                    mode.id
                )));
            }
        }

        let active = modes
            .iter()
            .position(|mode| mode.id == active_id)
            .ok_or_else(|| {
                TimerError::InvalidModeConfig(format!("initial mode '{}' is not configured", active_id))
            })?;

        Ok(Self { modes, active })
    }

    /// The classic focus / short break / long break trio
    pub fn standard(focus: u64, short_break: u64, long_break: u64, active_id: &str) -> Result<Self> {
        Self::new(standard_modes(focus, short_break, long_break), active_id)
    }

    pub fn active(&self) -> &Mode {
        &self.modes[self.active]
    }

    /// Make `id` the single active mode. Unknown ids leave the selection untouched.
    pub fn activate(&mut self, id: &str) -> Result<&Mode> {
        let index = self
            .modes
            .iter()
            .position(|mode| mode.id == id)
            .ok_or_else(|| TimerError::UnknownMode(id.to_string()))?;
        self.active = index;
        Ok(&self.modes[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mode> {
        self.modes.iter()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active().id == id
    }
}

impl Default for ModeSet {
    fn default() -> Self {
        Self {
            modes: standard_modes(25, 5, 15),
            active: 0,
        }
    }
}

fn standard_modes(focus: u64, short_break: u64, long_break: u64) -> Vec<Mode> {
    vec![
        Mode::new("focus", "Focus Time", focus),
        Mode::new("short-break", "Short Break", short_break),
        Mode::new("long-break", "Long Break", long_break),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_set_starts_on_requested_mode() {
        let modes = ModeSet::standard(25, 5, 15, "short-break").unwrap();
        assert_eq!(modes.active().id, "short-break");
        assert_eq!(modes.active().duration_seconds(), 300);
        assert_eq!(modes.iter().count(), 3);
    }

    #[test]
    fn activate_is_exclusive() {
        let mut modes = ModeSet::default();
        modes.activate("long-break").unwrap();
        assert!(modes.is_active("long-break"));
        assert!(!modes.is_active("focus"));
        assert_eq!(modes.iter().filter(|m| modes.is_active(&m.id)).count(), 1);
    }

    #[test]
    fn activate_unknown_keeps_selection() {
        let mut modes = ModeSet::default();
        let err = modes.activate("nap").unwrap_err();
        assert_eq!(err, TimerError::UnknownMode("nap".to_string()));
        assert!(modes.is_active("focus"));
    }

    #[test]
    fn rejects_empty_set() {
        assert!(matches!(
            ModeSet::new(Vec::new(), "focus"),
            Err(TimerError::InvalidModeConfig(_))
        ));
    }

    #[test]
    fn rejects_zero_duration() {
        let modes = vec![Mode::new("focus", "Focus", 0)];
        assert!(matches!(
            ModeSet::new(modes, "focus"),
            Err(TimerError::InvalidModeConfig(_))
        ));
    }

    #[test]
    fn rejects_durations_beyond_two_digit_minutes() {
        let modes = vec![Mode::new("focus", "Focus", 100)];
        assert!(matches!(
            ModeSet::new(modes, "focus"),
            Err(TimerError::InvalidModeConfig(_))
        ));

        let modes = vec![Mode::new("focus", "Focus", 307_445_734_561_825_861)];
        assert!(matches!(
            ModeSet::new(modes, "focus"),
            Err(TimerError::InvalidModeConfig(_))
        ));

        let modes = ModeSet::new(vec![Mode::new("focus", "Focus", 99)], "focus").unwrap();
        assert_eq!(modes.active().duration_seconds(), 5940);
    }

    #[test]
    fn default_matches_standard_set() {
        let default: Vec<Mode> = ModeSet::default().iter().cloned().collect();
        let standard: Vec<Mode> = ModeSet::standard(25, 5, 15, "focus").unwrap().iter().cloned().collect();
        assert_eq!(default, standard);
        assert!(ModeSet::default().is_active("focus"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let modes = vec![Mode::new("focus", "Focus", 25), Mode::new("focus", "Again", 5)];
        assert!(matches!(
            ModeSet::new(modes, "focus"),
            Err(TimerError::InvalidModeConfig(_))
        ));
    }

    #[test]
    fn rejects_unknown_initial_mode() {
        assert!(matches!(
            ModeSet::standard(25, 5, 15, "siesta"),
            Err(TimerError::InvalidModeConfig(_))
        ));
    }
}
