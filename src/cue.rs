//! End-of-phase notification cues.
//!
//! The widget plays a cue when a session or a break expires. How the cue is
//! delivered (speaker, desktop notification, nothing at all) belongs to the
//! host, so it sits behind the [`Cue`] trait.

use crate::error::{Error, Result};
use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Which countdown just expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CueKind {
    /// The work session reached zero.
    SessionEnd,
    /// The break reached zero.
    BreakEnd,
}

impl CueKind {
    /// Human readable name, used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            CueKind::SessionEnd => "session-end",
            CueKind::BreakEnd => "break-end",
        }
    }
}

impl fmt::Display for CueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that can announce the end of a phase.
///
/// Implementations must not block for long; `play` runs inside the widget's
/// `update`. Failures are logged and never change the widget's state.
pub trait Cue: Send + Sync {
    /// Plays the cue for `kind`.
    fn play(&self, kind: CueKind) -> Result<()>;
}

/// Rings the terminal bell on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct BellCue;

impl Cue for BellCue {
    fn play(&self, kind: CueKind) -> Result<()> {
        let mut stderr = std::io::stderr();
        stderr
            .write_all(b"\x07")
            .and_then(|_| stderr.flush())
            .map_err(|e| Error::cue(kind, e))
    }
}

/// Plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentCue;

impl Cue for SilentCue {
    fn play(&self, _kind: CueKind) -> Result<()> {
        Ok(())
    }
}

/// Records every cue it is asked to play.
///
/// Clones share the same record, so a host can keep one clone and hand the
/// other to the widget.
///
/// ```rust
/// use bubbletea_pomodoro::cue::{Cue, CueKind, RecordingCue};
///
/// let cue = RecordingCue::new();
/// let observer = cue.clone();
/// cue.play(CueKind::SessionEnd).unwrap();
/// assert_eq!(observer.played(), vec![CueKind::SessionEnd]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingCue {
    played: Arc<Mutex<Vec<CueKind>>>,
}

impl RecordingCue {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cues played so far, oldest first.
    pub fn played(&self) -> Vec<CueKind> {
        match self.played.lock() {
            Ok(played) => played.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Cue for RecordingCue {
    fn play(&self, kind: CueKind) -> Result<()> {
        match self.played.lock() {
            Ok(mut played) => played.push(kind),
            Err(poisoned) => poisoned.into_inner().push(kind),
        }
        Ok(())
    }
}

/// Shows a desktop notification for each cue.
#[cfg(feature = "desktop-notify")]
#[derive(Debug, Clone)]
pub struct DesktopCue {
    session_end: crate::config::CueConfig,
    break_end: crate::config::CueConfig,
}

#[cfg(feature = "desktop-notify")]
impl DesktopCue {
    /// Builds a desktop cue from the cue settings of a config.
    pub fn from_config(config: &crate::config::PomodoroConfig) -> Self {
        Self {
            session_end: config.session_end_cue.clone(),
            break_end: config.break_end_cue.clone(),
        }
    }
}

#[cfg(feature = "desktop-notify")]
impl Cue for DesktopCue {
    fn play(&self, kind: CueKind) -> Result<()> {
        let settings = match kind {
            CueKind::SessionEnd => &self.session_end,
            CueKind::BreakEnd => &self.break_end,
        };

        let mut notification = notify_rust::Notification::new();
        notification
            .summary(&settings.summary)
            .body(&settings.body)
            .appname("pomodoro");
        if let Some(sound) = settings.sound.as_deref() {
            notification.sound_name(sound);
        }
        notification
            .show()
            .map(|_| ())
            .map_err(|e| Error::cue(kind, e.to_string()))
    }
}

/// Plays `kind` on `cue`, logging instead of propagating failures.
pub(crate) fn play_logged(cue: &dyn Cue, kind: CueKind) {
    if let Err(err) = cue.play(kind) {
        log::warn!("{}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingCue;

    impl Cue for FailingCue {
        fn play(&self, kind: CueKind) -> Result<()> {
            Err(Error::cue(
                kind,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no audio device"),
            ))
        }
    }

    #[test]
    fn test_recording_cue_shares_record_between_clones() {
        let cue = RecordingCue::new();
        let observer = cue.clone();

        cue.play(CueKind::SessionEnd).unwrap();
        cue.play(CueKind::BreakEnd).unwrap();

        assert_eq!(
            observer.played(),
            vec![CueKind::SessionEnd, CueKind::BreakEnd]
        );
    }

    #[test]
    fn test_silent_cue_succeeds() {
        assert!(SilentCue.play(CueKind::BreakEnd).is_ok());
    }

    #[test]
    fn test_play_logged_swallows_failures() {
        play_logged(&FailingCue, CueKind::SessionEnd);
    }

    #[test]
    fn test_failure_is_typed() {
        let err = FailingCue.play(CueKind::BreakEnd).unwrap_err();
        assert!(matches!(
            err,
            Error::Cue {
                kind: CueKind::BreakEnd,
                ..
            }
        ));
        assert_eq!(err.to_string(), "failed to play break-end cue: no audio device");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(CueKind::SessionEnd.to_string(), "session-end");
        assert_eq!(CueKind::BreakEnd.to_string(), "break-end");
    }
}
