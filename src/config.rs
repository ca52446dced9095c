//! Serde-backed configuration for the Pomodoro widget.
//!
//! ```rust
//! use bubbletea_pomodoro::config::PomodoroConfig;
//!
//! let config = PomodoroConfig::from_json_str(r#"{ "session_minutes": 50 }"#).unwrap();
//! assert_eq!(config.session_minutes, 50);
//! assert_eq!(config.break_minutes, 5); // defaulted
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Shortest session length in minutes.
pub const SESSION_MIN_MINUTES: u32 = 1;
/// Longest session length in minutes.
pub const SESSION_MAX_MINUTES: u32 = 60;
/// Default session length in minutes.
pub const DEFAULT_SESSION_MINUTES: u32 = 25;
/// Shortest break length in minutes.
pub const BREAK_MIN_MINUTES: u32 = 1;
/// Longest break length in minutes.
pub const BREAK_MAX_MINUTES: u32 = 30;
/// Default break length in minutes.
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

/// Text and sound of one end-of-phase cue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CueConfig {
    /// Notification title.
    pub summary: String,
    /// Notification body.
    pub body: String,
    /// Sound to play, passed to the notification backend as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
}

impl CueConfig {
    fn session_end() -> Self {
        Self {
            summary: "Session complete".to_string(),
            body: "Time for a break.".to_string(),
            sound: Some("complete".to_string()),
        }
    }

    fn break_end() -> Self {
        Self {
            summary: "Break is over".to_string(),
            body: "Ready for the next session?".to_string(),
            sound: Some("bell".to_string()),
        }
    }
}

fn default_session_minutes() -> u32 {
    DEFAULT_SESSION_MINUTES
}

fn default_break_minutes() -> u32 {
    DEFAULT_BREAK_MINUTES
}

/// Initial lengths and cue settings for a Pomodoro widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroConfig {
    /// Work session length in minutes (1-60).
    #[serde(default = "default_session_minutes")]
    pub session_minutes: u32,
    /// Break length in minutes (1-30).
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
    /// Cue played when a session expires.
    #[serde(default = "CueConfig::session_end")]
    pub session_end_cue: CueConfig,
    /// Cue played when a break expires.
    #[serde(default = "CueConfig::break_end")]
    pub break_end_cue: CueConfig,
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            session_minutes: DEFAULT_SESSION_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
            session_end_cue: CueConfig::session_end(),
            break_end_cue: CueConfig::break_end(),
        }
    }
}

impl PomodoroConfig {
    /// Parses and validates a JSON config. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&contents)?;
        log::debug!(
            "loaded pomodoro config from {}: {}min session / {}min break",
            path.display(),
            config.session_minutes,
            config.break_minutes
        );
        Ok(config)
    }

    /// Writes the config as pretty JSON, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let io_err = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(io_err)
    }

    /// Checks both lengths against their slider ranges.
    pub fn validate(&self) -> Result<()> {
        check_range(
            "session_minutes",
            self.session_minutes,
            SESSION_MIN_MINUTES,
            SESSION_MAX_MINUTES,
        )?;
        check_range(
            "break_minutes",
            self.break_minutes,
            BREAK_MIN_MINUTES,
            BREAK_MAX_MINUTES,
        )
    }
}

fn check_range(field: &'static str, value: u32, min: u32, max: u32) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("bubbletea-pomodoro-{}-{}", std::process::id(), name))
            .join("config.json")
    }

    #[test]
    fn test_defaults() {
        let config = PomodoroConfig::default();
        assert_eq!(config.session_minutes, 25);
        assert_eq!(config.break_minutes, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_object_takes_defaults() {
        let config = PomodoroConfig::from_json_str("{}").unwrap();
        assert_eq!(config, PomodoroConfig::default());
    }

    #[test]
    fn test_cue_sound_is_optional() {
        let json = r#"{
            "session_end_cue": { "summary": "Done", "body": "Stretch" }
        }"#;
        let config = PomodoroConfig::from_json_str(json).unwrap();
        assert_eq!(config.session_end_cue.summary, "Done");
        assert_eq!(config.session_end_cue.sound, None);
    }

    #[test]
    fn test_rejects_out_of_range_session() {
        let err = PomodoroConfig::from_json_str(r#"{ "session_minutes": 61 }"#).unwrap_err();
        match err {
            Error::OutOfRange {
                field, value, max, ..
            } => {
                assert_eq!(field, "session_minutes");
                assert_eq!(value, 61);
                assert_eq!(max, 60);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_zero_break() {
        let err = PomodoroConfig::from_json_str(r#"{ "break_minutes": 0 }"#).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { field: "break_minutes", .. }));
        assert_eq!(
            err.to_string(),
            "break_minutes must be between 1 and 30 minutes, got 0"
        );
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = PomodoroConfig::from_json_str("{ session_minutes: ").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("save-load");
        let config = PomodoroConfig {
            session_minutes: 45,
            break_minutes: 15,
            ..PomodoroConfig::default()
        };

        config.save(&path).unwrap();
        let loaded = PomodoroConfig::load(&path).unwrap();
        assert_eq!(loaded, config);

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let path = scratch_path("missing");
        let err = PomodoroConfig::load(&path).unwrap_err();
        match err {
            Error::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
