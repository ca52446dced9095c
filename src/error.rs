//! Error types for the crate.
//!
//! Widget operations never fail. Errors come from loading, saving and
//! validating a [`PomodoroConfig`](crate::config::PomodoroConfig), and from
//! playing a [`Cue`](crate::cue::Cue), which the widget only logs.

use crate::cue::CueKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by configuration handling and cues.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a configuration file failed.
    #[error("failed to access config file {path}: {source}")]
    Io {
        /// The file that could not be accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for [`PomodoroConfig`](crate::config::PomodoroConfig).
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A length lies outside the range its slider accepts.
    #[error("{field} must be between {min} and {max} minutes, got {value}")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: u32,
        /// Smallest accepted value.
        min: u32,
        /// Largest accepted value.
        max: u32,
    },

    /// A cue could not be played.
    #[error("failed to play {kind} cue: {source}")]
    Cue {
        /// The cue that failed.
        kind: CueKind,
        /// What the cue backend reported.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Wraps a cue backend failure.
    pub fn cue(kind: CueKind, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Cue {
            kind,
            source: source.into(),
        }
    }
}

/// Result type alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
