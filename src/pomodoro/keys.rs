//! Default key bindings of the Pomodoro widget.

use crate::key::{self, KeyMap};

/// Key bindings for the Pomodoro controls.
///
/// The widget enables and disables these as the phase changes: start only
/// while idle, pause only while a session runs, reset always.
#[derive(Debug, Clone)]
pub struct PomodoroKeyMap {
    /// Start a work session.
    pub start: key::Binding,
    /// Pause the running session.
    pub pause: key::Binding,
    /// Stop everything and restore both countdowns.
    pub reset: key::Binding,
    /// Move slider focus forward.
    pub next_slider: key::Binding,
    /// Move slider focus backward.
    pub prev_slider: key::Binding,
}

impl Default for PomodoroKeyMap {
    fn default() -> Self {
        Self {
            start: key::new_binding(vec![
                key::with_keys_str(&["s", "enter"]),
                key::with_help("s", "start"),
            ]),
            pause: key::new_binding(vec![
                key::with_keys_str(&["p", "space"]),
                key::with_help("p", "pause"),
                key::with_disabled(),
            ]),
            reset: key::new_binding(vec![
                key::with_keys_str(&["r"]),
                key::with_help("r", "reset"),
            ]),
            next_slider: key::new_binding(vec![
                key::with_keys_str(&["tab", "down", "j"]),
                key::with_help("tab", "next length"),
            ]),
            prev_slider: key::new_binding(vec![
                key::with_keys_str(&["shift+tab", "up", "k"]),
                key::with_help("shift+tab", "prev length"),
            ]),
        }
    }
}

impl KeyMap for PomodoroKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.start, &self.pause, &self.reset, &self.next_slider]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.start, &self.pause, &self.reset],
            vec![&self.next_slider, &self.prev_slider],
        ]
    }
}
