#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-pomodoro/")]

//! # bubbletea-pomodoro
//!
//! A Pomodoro work/break countdown widget for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The widget runs a two-phase countdown: a work session followed by a break.
//! A one-second repeater drives the active countdown, start/pause/reset keys
//! control it, and two sliders adjust the phase lengths while the timer is off.
//! Like every bubbletea component it follows the Elm Architecture with
//! `init()`, `update()` and `view()`.
//!
//! ```text
//!                Idle ──start──▶ SessionRunning ──expiry──▶ BreakRunning
//!                 ▲                  │                          │
//!                 └──pause / reset───┘◀────────expiry / reset───┘
//! ```
//!
//! ## Features
//!
//! - **Leak-free timers**: every repeater carries an id and a generation tag, so
//!   pausing, resetting or dropping the widget invalidates in-flight ticks
//! - **Explicit change notifications**: a [`pomodoro::Event`] queue in addition
//!   to the usual re-render after `update`; hosts drain it with
//!   `take_events` after every `update`
//! - **Pluggable cues**: end-of-phase notifications go through the [`cue::Cue`]
//!   trait (terminal bell by default, desktop notifications behind the
//!   `desktop-notify` feature)
//! - **Serde configuration**: lengths and cue text load from JSON
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_pomodoro::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     pomodoro: Pomodoro,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         (Self { pomodoro: Pomodoro::new() }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         let cmd = self.pomodoro.update(msg);
//!         // drain every time, even when the events are not needed
//!         for event in self.pomodoro.take_events() {
//!             // react to SessionExpired, BreakExpired, ...
//!             let _ = event;
//!         }
//!         cmd
//!     }
//!
//!     fn view(&self) -> String {
//!         self.pomodoro.view()
//!     }
//! }
//! ```
//!
//! ## Driving the widget without a runtime
//!
//! The repeater only ever has one tick in flight. [`Pomodoro::pending_tick`]
//! returns it, which makes simulated time straightforward:
//!
//! ```rust
//! use bubbletea_pomodoro::prelude::*;
//!
//! let mut pomodoro = Pomodoro::new().with_cue(SilentCue);
//! pomodoro.set_session_length(1);
//! pomodoro.start_session();
//!
//! for _ in 0..60 {
//!     let tick = pomodoro.pending_tick().expect("a repeater is armed");
//!     pomodoro.update(Box::new(tick));
//! }
//!
//! assert_eq!(pomodoro.phase(), Phase::BreakRunning);
//! assert_eq!(pomodoro.break_seconds_left(), 5 * 60);
//! ```

pub mod clock;
pub mod config;
pub mod cue;
pub mod error;
pub mod key;
pub mod pomodoro;
pub mod repeater;
pub mod slider;

use bubbletea_rs::Cmd;

/// Core trait for components that take part in keyboard focus.
///
/// The Pomodoro widget moves focus between its two sliders; only the focused
/// slider reacts to the adjust keys.
///
/// ```rust
/// use bubbletea_pomodoro::prelude::*;
///
/// let mut slider = Slider::new("Break Length", 1, 30, 5);
/// assert!(!slider.focused());
///
/// slider.focus();
/// assert!(slider.focused());
///
/// slider.blur();
/// assert!(!slider.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    ///
    /// May return a command for the runtime, e.g. to trigger a redraw.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    fn blur(&mut self);

    /// Returns whether the component is currently focused.
    fn focused(&self) -> bool;
}

pub use clock::format_clock;
pub use config::{CueConfig, PomodoroConfig};
pub use cue::{BellCue, Cue, CueKind, RecordingCue, SilentCue};
#[cfg(feature = "desktop-notify")]
pub use cue::DesktopCue;
pub use error::{Error, Result};
pub use key::{
    matches, new_binding, with_disabled, with_help, with_keys_str, Binding, Help as KeyHelp,
    KeyMap, KeyPress,
};
pub use pomodoro::{Event as PomodoroEvent, Model as Pomodoro, PomodoroKeyMap, Phase};
pub use repeater::{Repeater, TickMsg};
pub use slider::Model as Slider;

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_pomodoro::prelude::*;
///
/// let pomodoro = Pomodoro::new();
/// assert_eq!(pomodoro.phase(), Phase::Idle);
/// ```
pub mod prelude {
    pub use crate::clock::format_clock;
    pub use crate::config::{CueConfig, PomodoroConfig};
    pub use crate::cue::{BellCue, Cue, CueKind, RecordingCue, SilentCue};
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::pomodoro::{Event as PomodoroEvent, Model as Pomodoro, PomodoroKeyMap, Phase};
    pub use crate::repeater::{Repeater, TickMsg};
    pub use crate::slider::Model as Slider;
    pub use crate::Component;
}
