//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

use crate::{error::Result, state::ModeSet};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "pomodoro-timer")]
#[command(about = "A focus/break countdown timer with session stats and desktop notifications")]
#[command(version)]
pub struct Config {
    /// Port to bind the control server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Focus session length in minutes
    #[arg(long, default_value = "25", value_parser = clap::value_parser!(u64).range(1..=99))]
    pub focus: u64,

    /// Short break length in minutes
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u64).range(1..=99))]
    pub short_break: u64,

    /// Long break length in minutes
    #[arg(long, default_value = "15", value_parser = clap::value_parser!(u64).range(1..=99))]
    pub long_break: u64,

    /// Mode selected at startup (focus, short-break, long-break)
    #[arg(long, default_value = "focus")]
    pub initial_mode: String,

    /// Baseline window title
    #[arg(long, default_value = "Pomodoro Timer")]
    pub app_name: String,

    /// How long the completion pulse stays visible, in milliseconds
    #[arg(long, default_value = "500")]
    pub pulse_ms: u64,

    /// Never show desktop notifications
    #[arg(long)]
    pub no_notifications: bool,

    /// Never play the completion sound
    #[arg(long)]
    pub no_sound: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Build the validated mode set
    pub fn modes(&self) -> Result<ModeSet> {
        ModeSet::standard(self.focus, self.short_break, self.long_break, &self.initial_mode)
    }

    pub fn pulse_duration(&self) -> Duration {
        Duration::from_millis(self.pulse_ms)
    }
}
