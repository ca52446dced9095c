//! `MM:SS` formatting for countdown displays.

/// Formats a number of seconds as zero-padded `MM:SS`.
///
/// Minutes are not wrapped into hours, so a full hour reads `60:00`.
///
/// ```rust
/// use bubbletea_pomodoro::clock::format_clock;
///
/// assert_eq!(format_clock(25 * 60), "25:00");
/// assert_eq!(format_clock(65), "01:05");
/// assert_eq!(format_clock(0), "00:00");
/// ```
pub fn format_clock(seconds: u32) -> String {
    let minutes = seconds / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}", minutes, secs)
}
