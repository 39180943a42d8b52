//! Display and title formatting

/// Render seconds as `MM:SS`, both fields zero padded
pub fn format_time(remaining_seconds: u64) -> String {
    format!("{:02}:{:02}", remaining_seconds / 60, remaining_seconds % 60)
}

/// Title shown while a countdown is in progress
pub fn format_title(time: &str, mode_label: &str, app_name: &str) -> String {
    format!("{} - {} - {}", time, mode_label, app_name)
}
