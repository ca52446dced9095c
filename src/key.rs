//! Key bindings for the Pomodoro controls.
//!
//! A [`Binding`] pairs one or more key presses with help text and an enabled
//! flag. Disabled bindings never match and are hidden from help output, which
//! is how the widget expresses "this control is greyed out right now".
//!
//! ```rust
//! use bubbletea_pomodoro::key::{new_binding, with_help, with_keys_str};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let mut start = new_binding(vec![
//!     with_keys_str(&["s", "enter"]),
//!     with_help("s", "start"),
//! ]);
//!
//! let press = KeyMsg { key: KeyCode::Enter, modifiers: KeyModifiers::NONE };
//! assert!(start.matches(&press));
//!
//! start.set_enabled(false);
//! assert!(!start.matches(&press));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Parses a key name such as `"s"`, `"enter"`, `"shift+tab"` or `"ctrl+c"`.
    ///
    /// Returns `None` for names that do not describe a key.
    pub fn parse(name: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let mut rest = name;
        loop {
            if let Some(tail) = rest.strip_prefix("ctrl+") {
                modifiers |= KeyModifiers::CONTROL;
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("alt+") {
                modifiers |= KeyModifiers::ALT;
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("shift+") {
                modifiers |= KeyModifiers::SHIFT;
                rest = tail;
            } else {
                break;
            }
        }

        let code = match rest {
            "enter" => KeyCode::Enter,
            "esc" => KeyCode::Esc,
            "space" | " " => KeyCode::Char(' '),
            "tab" if modifiers.contains(KeyModifiers::SHIFT) => {
                // crossterm reports shift+tab as BackTab
                modifiers.remove(KeyModifiers::SHIFT);
                KeyCode::BackTab
            }
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pgup" => KeyCode::PageUp,
            "pgdown" => KeyCode::PageDown,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };

        Some(Self { code, modifiers })
    }

    fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        // Terminals disagree on whether SHIFT accompanies upper-case chars and
        // BackTab, so only CONTROL and ALT are compared strictly.
        let strict = KeyModifiers::CONTROL | KeyModifiers::ALT;
        (self.modifiers & strict) == (msg.modifiers & strict)
    }
}

/// Help text shown for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"s"` or `"←/h"`.
    pub key: String,
    /// What the key does.
    pub desc: String,
}

/// A set of key presses that trigger one control.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

/// Builder option for [`new_binding`].
pub enum BindingOpt {
    /// Keys given by name.
    Keys(Vec<KeyPress>),
    /// Help key label and description.
    Help(String, String),
    /// Start disabled.
    Disabled,
}

/// Creates a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        match opt {
            BindingOpt::Keys(keys) => binding.keys = keys,
            BindingOpt::Help(key, desc) => binding.help = Help { key, desc },
            BindingOpt::Disabled => binding.disabled = true,
        }
    }
    binding
}

/// Sets the keys of a binding by name. Unknown names are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    BindingOpt::Keys(keys.iter().filter_map(|k| KeyPress::parse(k)).collect())
}

/// Sets the help text of a binding.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    BindingOpt::Help(key.to_string(), desc.to_string())
}

/// Creates the binding disabled.
pub fn with_disabled() -> BindingOpt {
    BindingOpt::Disabled
}

impl Binding {
    /// Returns the key presses of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding currently responds to input.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns true when the binding is enabled and one of its keys was pressed.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Returns true when any of the given bindings matches the key message.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Types that expose their bindings for help rendering.
pub trait KeyMap {
    /// Bindings for the one-line help.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped in columns for the expanded help.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
