//! The Pomodoro widget: a session countdown followed by a break countdown.
//!
//! # Phases
//!
//! ```text
//! Idle ──start_session──▶ SessionRunning ──expiry──▶ BreakRunning ──expiry──▶ Idle
//!   ▲                         │                          │
//!   └──────── pause / reset ──┴──────── pause / reset ───┘
//! ```
//!
//! Each phase owns one [`Repeater`]. Every exit from a phase (expiry, pause,
//! reset, teardown) cancels that repeater before anything else happens, so a
//! tick that is already in flight is discarded on arrival and no countdown can
//! be decremented twice per second.
//!
//! Pausing keeps the remaining seconds. Starting again continues from them;
//! there is no separate resume.
//!
//! # Change notifications
//!
//! The host re-renders with [`Model::view`] after every `update`. Hosts that
//! need to react to specific transitions drain [`Model::take_events`].
//!
//! ```rust
//! use bubbletea_pomodoro::pomodoro::{Event, Model, Phase};
//! use bubbletea_pomodoro::cue::SilentCue;
//!
//! let mut pomodoro = Model::new().with_cue(SilentCue);
//! pomodoro.start_session();
//! assert_eq!(pomodoro.phase(), Phase::SessionRunning);
//!
//! pomodoro.pause_session();
//! assert_eq!(pomodoro.phase(), Phase::Idle);
//! assert_eq!(
//!     pomodoro.take_events(),
//!     vec![Event::SessionStarted, Event::SessionPaused]
//! );
//! ```

mod keys;
mod view;

pub use keys::PomodoroKeyMap;
pub use view::Styles;

use crate::config::{
    PomodoroConfig, BREAK_MAX_MINUTES, BREAK_MIN_MINUTES, DEFAULT_BREAK_MINUTES,
    DEFAULT_SESSION_MINUTES, SESSION_MAX_MINUTES, SESSION_MIN_MINUTES,
};
use crate::cue::{self, BellCue, Cue, CueKind};
use crate::repeater::{Repeater, TickMsg};
use crate::slider;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Operating mode of the widget. Exactly one is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing is counting down.
    #[default]
    Idle,
    /// The work session is counting down.
    SessionRunning,
    /// The break is counting down.
    BreakRunning,
}

impl Phase {
    /// Status label: `"Off"`, `"Session"` or `"Break"`.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "Off",
            Phase::SessionRunning => "Session",
            Phase::BreakRunning => "Break",
        }
    }

    /// Whether either countdown is running.
    pub fn is_running(&self) -> bool {
        !matches!(self, Phase::Idle)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// State changes reported through [`Model::take_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A session started counting down.
    SessionStarted,
    /// The running session was paused.
    SessionPaused,
    /// The session reached zero. A [`Event::BreakStarted`] follows.
    SessionExpired,
    /// A break started counting down.
    BreakStarted,
    /// The running break was paused.
    BreakPaused,
    /// The break reached zero. A [`Event::Reset`] follows.
    BreakExpired,
    /// Both countdowns were restored and the widget is idle.
    Reset,
    /// The session length changed to the given minutes.
    SessionLengthChanged(u32),
    /// The break length changed to the given minutes.
    BreakLengthChanged(u32),
}

/// Which slider has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The session length slider.
    SessionLength,
    /// The break length slider.
    BreakLength,
}

/// The Pomodoro widget.
///
/// Every state change is queued as an [`Event`]. Hosts must drain the queue
/// with [`Model::take_events`] after each `update`, even if they ignore the
/// events, or it keeps growing.
///
/// A clone carries the same lengths and remaining seconds but its own
/// repeaters, and starts idle: a running countdown in the original is paused
/// in the clone.
pub struct Model {
    /// Key bindings. Their enabled state follows the phase.
    pub keymap: PomodoroKeyMap,
    /// Rendering styles.
    pub styles: Styles,
    /// Whether the help line is rendered.
    pub show_help: bool,
    session_slider: slider::Model,
    break_slider: slider::Model,
    session_seconds_left: u32,
    break_seconds_left: u32,
    phase: Phase,
    session_repeater: Repeater,
    break_repeater: Repeater,
    cue: Arc<dyn Cue>,
    events: Vec<Event>,
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("phase", &self.phase)
            .field("session_length", &self.session_length())
            .field("break_length", &self.break_length())
            .field("session_seconds_left", &self.session_seconds_left)
            .field("break_seconds_left", &self.break_seconds_left)
            .field("session_repeater", &self.session_repeater)
            .field("break_repeater", &self.break_repeater)
            .finish_non_exhaustive()
    }
}

impl Clone for Model {
    fn clone(&self) -> Self {
        let mut model = Self {
            keymap: self.keymap.clone(),
            styles: self.styles.clone(),
            show_help: self.show_help,
            session_slider: self.session_slider.clone(),
            break_slider: self.break_slider.clone(),
            session_seconds_left: self.session_seconds_left,
            break_seconds_left: self.break_seconds_left,
            phase: Phase::Idle,
            session_repeater: self.session_repeater.clone(),
            break_repeater: self.break_repeater.clone(),
            cue: Arc::clone(&self.cue),
            events: self.events.clone(),
        };
        model.sync_controls();
        model
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates an idle widget with a 25 minute session and a 5 minute break.
    pub fn new() -> Self {
        let mut session_slider = slider::Model::new(
            "Session Length",
            SESSION_MIN_MINUTES,
            SESSION_MAX_MINUTES,
            DEFAULT_SESSION_MINUTES,
        );
        session_slider.focus();
        let break_slider = slider::Model::new(
            "Break Length",
            BREAK_MIN_MINUTES,
            BREAK_MAX_MINUTES,
            DEFAULT_BREAK_MINUTES,
        );

        let mut model = Self {
            keymap: PomodoroKeyMap::default(),
            styles: Styles::default(),
            show_help: true,
            session_seconds_left: session_slider.value() * 60,
            break_seconds_left: break_slider.value() * 60,
            session_slider,
            break_slider,
            phase: Phase::Idle,
            session_repeater: Repeater::default(),
            break_repeater: Repeater::default(),
            cue: Arc::new(BellCue),
            events: Vec::new(),
        };
        model.sync_controls();
        model
    }

    /// Creates an idle widget with the lengths from `config`.
    ///
    /// Lengths are clamped into range; use [`PomodoroConfig::validate`] first to
    /// reject bad values instead.
    pub fn with_config(config: &PomodoroConfig) -> Self {
        let mut model = Self::new();
        model.set_session_length(config.session_minutes);
        model.set_break_length(config.break_minutes);
        model.events.clear();
        model
    }

    /// Replaces the end-of-phase cue.
    pub fn with_cue(mut self, cue: impl Cue + 'static) -> Self {
        self.cue = Arc::new(cue);
        self
    }

    /// Replaces the end-of-phase cue with a shared one.
    pub fn with_shared_cue(mut self, cue: Arc<dyn Cue>) -> Self {
        self.cue = cue;
        self
    }

    /// Changes the tick interval of both repeaters. One tick always counts as
    /// one second; a shorter interval runs the clock faster.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.session_repeater.interval = interval;
        self.break_repeater.interval = interval;
        self
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Configured session length in minutes.
    pub fn session_length(&self) -> u32 {
        self.session_slider.value()
    }

    /// Configured break length in minutes.
    pub fn break_length(&self) -> u32 {
        self.break_slider.value()
    }

    /// Seconds left in the session countdown.
    pub fn session_seconds_left(&self) -> u32 {
        self.session_seconds_left
    }

    /// Seconds left in the break countdown.
    pub fn break_seconds_left(&self) -> u32 {
        self.break_seconds_left
    }

    /// The session length slider.
    pub fn session_slider(&self) -> &slider::Model {
        &self.session_slider
    }

    /// The break length slider.
    pub fn break_slider(&self) -> &slider::Model {
        &self.break_slider
    }

    /// Which slider has focus.
    pub fn focused_field(&self) -> Field {
        if self.break_slider.focused() {
            Field::BreakLength
        } else {
            Field::SessionLength
        }
    }

    /// Whether either repeater has a tick in flight.
    pub fn has_active_repeater(&self) -> bool {
        self.session_repeater.active() || self.break_repeater.active()
    }

    /// The tick the runtime is waiting to deliver, if a countdown is running.
    ///
    /// Passing it to [`Model::update`] advances the running countdown by one
    /// second, which is how tests and headless hosts simulate time.
    pub fn pending_tick(&self) -> Option<TickMsg> {
        self.session_repeater
            .pending()
            .or_else(|| self.break_repeater.pending())
    }

    /// Drains the state changes since the last call, oldest first.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Starts counting the session down from its remaining seconds.
    ///
    /// Only valid while idle; otherwise nothing happens and `None` is returned.
    pub fn start_session(&mut self) -> Option<Cmd> {
        if self.phase != Phase::Idle {
            log::debug!("start ignored while {}", self.phase);
            return None;
        }
        self.break_repeater.cancel();
        self.phase = Phase::SessionRunning;
        self.sync_controls();
        self.emit(Event::SessionStarted);
        log::info!(
            "session started with {} left",
            crate::clock::format_clock(self.session_seconds_left)
        );
        Some(self.session_repeater.start())
    }

    /// Starts counting the break down from its remaining seconds.
    ///
    /// Runs automatically when a session expires. A running session is
    /// cancelled first. Does nothing if a break is already running.
    pub fn start_break(&mut self) -> Option<Cmd> {
        if self.phase == Phase::BreakRunning {
            log::debug!("break already running");
            return None;
        }
        self.session_repeater.cancel();
        self.phase = Phase::BreakRunning;
        self.sync_controls();
        self.emit(Event::BreakStarted);
        log::info!(
            "break started with {} left",
            crate::clock::format_clock(self.break_seconds_left)
        );
        Some(self.break_repeater.start())
    }

    /// Stops the session countdown, keeping its remaining seconds.
    pub fn pause_session(&mut self) {
        if self.phase != Phase::SessionRunning {
            return;
        }
        self.session_repeater.cancel();
        self.phase = Phase::Idle;
        self.sync_controls();
        self.emit(Event::SessionPaused);
        log::info!(
            "session paused with {} left",
            crate::clock::format_clock(self.session_seconds_left)
        );
    }

    /// Stops the break countdown, keeping its remaining seconds.
    pub fn pause_break(&mut self) {
        if self.phase != Phase::BreakRunning {
            return;
        }
        self.break_repeater.cancel();
        self.phase = Phase::Idle;
        self.sync_controls();
        self.emit(Event::BreakPaused);
        log::info!(
            "break paused with {} left",
            crate::clock::format_clock(self.break_seconds_left)
        );
    }

    /// Cancels any countdown and restores both to their full lengths.
    pub fn reset(&mut self) {
        self.session_repeater.cancel();
        self.break_repeater.cancel();
        self.phase = Phase::Idle;
        self.session_seconds_left = self.session_length() * 60;
        self.break_seconds_left = self.break_length() * 60;
        self.sync_controls();
        self.emit(Event::Reset);
        log::info!("timers reset");
    }

    /// Sets the session length, clamped to 1-60 minutes.
    ///
    /// Unless a session is running, the session countdown restarts from the
    /// new length.
    pub fn set_session_length(&mut self, minutes: u32) {
        if self.session_slider.set_value(minutes) {
            self.session_length_changed();
        } else if self.phase != Phase::SessionRunning {
            self.session_seconds_left = self.session_length() * 60;
        }
    }

    /// Sets the break length, clamped to 1-30 minutes.
    ///
    /// Unless a break is running, the break countdown restarts from the new
    /// length.
    pub fn set_break_length(&mut self, minutes: u32) {
        if self.break_slider.set_value(minutes) {
            self.break_length_changed();
        } else if self.phase != Phase::BreakRunning {
            self.break_seconds_left = self.break_length() * 60;
        }
    }

    /// Cancels both repeaters unconditionally. Runs on drop.
    pub fn teardown(&mut self) {
        if self.has_active_repeater() {
            log::debug!("teardown cancelled a running {}", self.phase);
        }
        self.session_repeater.cancel();
        self.break_repeater.cancel();
        self.phase = Phase::Idle;
        self.sync_controls();
    }

    /// Handles tick and key messages.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(tick) = msg.downcast_ref::<TickMsg>() {
            let tick = *tick;
            return self.on_tick(tick);
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.start.matches(key_msg) {
                return self.start_session();
            }
            if self.keymap.pause.matches(key_msg) {
                self.pause_session();
                return None;
            }
            if self.keymap.reset.matches(key_msg) {
                self.reset();
                return None;
            }
            if self.keymap.next_slider.matches(key_msg) || self.keymap.prev_slider.matches(key_msg)
            {
                // two sliders: forward and backward land on the same one
                self.switch_focus();
                return None;
            }
        }

        if self.session_slider.update(&msg) {
            self.session_length_changed();
        } else if self.break_slider.update(&msg) {
            self.break_length_changed();
        }
        None
    }

    fn on_tick(&mut self, tick: TickMsg) -> Option<Cmd> {
        if self.session_repeater.accept(&tick) {
            self.session_seconds_left = self.session_seconds_left.saturating_sub(1);
            if self.session_seconds_left == 0 {
                return self.expire_session();
            }
            return Some(self.session_repeater.rearm());
        }

        if self.break_repeater.accept(&tick) {
            self.break_seconds_left = self.break_seconds_left.saturating_sub(1);
            if self.break_seconds_left == 0 {
                self.expire_break();
                return None;
            }
            return Some(self.break_repeater.rearm());
        }

        None
    }

    fn expire_session(&mut self) -> Option<Cmd> {
        self.session_repeater.cancel();
        self.emit(Event::SessionExpired);
        log::info!("session expired");
        cue::play_logged(self.cue.as_ref(), CueKind::SessionEnd);
        self.start_break()
    }

    fn expire_break(&mut self) {
        self.break_repeater.cancel();
        self.emit(Event::BreakExpired);
        log::info!("break expired");
        cue::play_logged(self.cue.as_ref(), CueKind::BreakEnd);
        self.reset();
    }

    fn session_length_changed(&mut self) {
        let minutes = self.session_slider.value();
        log::debug!("session length set to {} minutes", minutes);
        self.emit(Event::SessionLengthChanged(minutes));
        if self.phase != Phase::SessionRunning {
            self.session_seconds_left = minutes * 60;
        }
    }

    fn break_length_changed(&mut self) {
        let minutes = self.break_slider.value();
        log::debug!("break length set to {} minutes", minutes);
        self.emit(Event::BreakLengthChanged(minutes));
        if self.phase != Phase::BreakRunning {
            self.break_seconds_left = minutes * 60;
        }
    }

    fn switch_focus(&mut self) {
        if self.session_slider.focused() {
            self.session_slider.blur();
            self.break_slider.focus();
        } else {
            self.break_slider.blur();
            self.session_slider.focus();
        }
    }

    /// Mirrors the phase onto the enabled state of every control.
    fn sync_controls(&mut self) {
        let idle = self.phase == Phase::Idle;
        self.keymap.start.set_enabled(idle);
        self.keymap.pause.set_enabled(self.phase == Phase::SessionRunning);
        self.keymap.next_slider.set_enabled(idle);
        self.keymap.prev_slider.set_enabled(idle);
        self.session_slider.set_disabled(!idle);
        self.break_slider.set_disabled(!idle);
    }

    fn emit(&mut self, event: Event) {
        self.events.push(event);
    }
}

impl Drop for Model {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
