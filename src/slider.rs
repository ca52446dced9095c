//! A bounded integer range control.
//!
//! The slider is the terminal counterpart of an `<input type="range">`: an
//! integer constrained to `min..=max`, adjusted one step at a time with the
//! arrow keys while focused, and rendered as a label plus a track.
//!
//! ```rust
//! use bubbletea_pomodoro::slider::Model;
//!
//! let mut slider = Model::new("Session Length", 1, 60, 25);
//! slider.increment();
//! assert_eq!(slider.value(), 26);
//!
//! slider.set_value(500);
//! assert_eq!(slider.value(), 60);
//! ```

use crate::key::{self, KeyMap as KeyMapTrait};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use lipgloss_extras::prelude::*;

const DEFAULT_WIDTH: usize = 30;

/// Key bindings that move a focused slider.
#[derive(Debug, Clone)]
pub struct SliderKeyMap {
    /// Raise the value by one step.
    pub increase: key::Binding,
    /// Lower the value by one step.
    pub decrease: key::Binding,
}

impl Default for SliderKeyMap {
    fn default() -> Self {
        Self {
            increase: key::new_binding(vec![
                key::with_keys_str(&["right", "l", "+"]),
                key::with_help("→/+", "longer"),
            ]),
            decrease: key::new_binding(vec![
                key::with_keys_str(&["left", "h", "-"]),
                key::with_help("←/-", "shorter"),
            ]),
        }
    }
}

impl KeyMapTrait for SliderKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.decrease, &self.increase]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.decrease, &self.increase]]
    }
}

/// Colors and glyphs of the track.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Label text.
    pub label: Style,
    /// Label text while focused.
    pub focused_label: Style,
    /// Track left of the handle.
    pub filled: Style,
    /// Track right of the handle.
    pub empty: Style,
    /// The handle.
    pub handle: Style,
    /// Everything while disabled.
    pub disabled: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            label: Style::new().foreground(Color::from("#FFFFFF")),
            focused_label: Style::new().foreground(Color::from("#FFC107")).bold(true),
            filled: Style::new().foreground(Color::from("#28A745")),
            empty: Style::new().foreground(Color::from("#606060")),
            handle: Style::new().foreground(Color::from("#FFFFFF")).bold(true),
            disabled: Style::new().foreground(Color::from("#4A4A4A")),
        }
    }
}

/// A labelled integer slider.
#[derive(Debug, Clone)]
pub struct Model {
    /// Text shown before the value, e.g. `"Session Length"`.
    pub label: String,
    /// Unit appended to the value in the label.
    pub unit: String,
    /// Track width in cells.
    pub width: usize,
    /// Key bindings.
    pub keymap: SliderKeyMap,
    /// Rendering styles.
    pub styles: Styles,
    /// Track glyph.
    pub track: char,
    /// Handle glyph.
    pub knob: char,
    min: u32,
    max: u32,
    value: u32,
    focus: bool,
    disabled: bool,
}

impl Model {
    /// Creates a slider over `min..=max`. `value` is clamped into range.
    ///
    /// If `max < min` the bounds are swapped.
    pub fn new(label: impl Into<String>, min: u32, max: u32, value: u32) -> Self {
        let (min, max) = if max < min { (max, min) } else { (min, max) };
        Self {
            label: label.into(),
            unit: "minutes".to_string(),
            width: DEFAULT_WIDTH,
            keymap: SliderKeyMap::default(),
            styles: Styles::default(),
            track: '─',
            knob: '●',
            min,
            max,
            value: value.clamp(min, max),
            focus: false,
            disabled: false,
        }
    }

    /// Sets the track width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Current value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Lower bound.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Sets the value, clamped into range. Returns true if it changed.
    pub fn set_value(&mut self, value: u32) -> bool {
        let clamped = value.clamp(self.min, self.max);
        let changed = clamped != self.value;
        self.value = clamped;
        changed
    }

    /// Raises the value by one, stopping at `max`. Returns true if it changed.
    pub fn increment(&mut self) -> bool {
        self.set_value(self.value.saturating_add(1))
    }

    /// Lowers the value by one, stopping at `min`. Returns true if it changed.
    pub fn decrement(&mut self) -> bool {
        self.set_value(self.value.saturating_sub(1))
    }

    /// Whether the slider ignores input.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Enables or disables input, updating the key bindings to match.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.keymap.increase.set_enabled(!disabled);
        self.keymap.decrease.set_enabled(!disabled);
    }

    /// Position of the value within the range, from 0.0 to 1.0.
    pub fn fraction(&self) -> f64 {
        if self.max == self.min {
            return 1.0;
        }
        f64::from(self.value - self.min) / f64::from(self.max - self.min)
    }

    /// Handles adjust keys while focused and enabled.
    ///
    /// Returns true when the value changed.
    pub fn update(&mut self, msg: &Msg) -> bool {
        if !self.focus || self.disabled {
            return false;
        }
        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            return false;
        };
        if self.keymap.increase.matches(key_msg) {
            self.increment()
        } else if self.keymap.decrease.matches(key_msg) {
            self.decrement()
        } else {
            false
        }
    }

    /// The label line, e.g. `"Session Length: 25 minutes"`, unstyled.
    pub fn label_text(&self) -> String {
        format!("{}: {} {}", self.label, self.value, self.unit)
    }

    /// Renders the label line and the track.
    pub fn view(&self) -> String {
        let label_style = if self.disabled {
            &self.styles.disabled
        } else if self.focus {
            &self.styles.focused_label
        } else {
            &self.styles.label
        };
        let label = label_style.clone().inline(true).render(&self.label_text());
        format!("{}\n{}", label, self.track_view())
    }

    fn track_view(&self) -> String {
        if self.width == 0 {
            return String::new();
        }
        let slots = self.width - 1;
        let pos = (slots as f64 * self.fraction()).round() as usize;
        let pos = pos.min(slots);

        let (filled, empty, handle) = if self.disabled {
            let d = &self.styles.disabled;
            (d, d, d)
        } else {
            (&self.styles.filled, &self.styles.empty, &self.styles.handle)
        };

        let mut out = String::new();
        if pos > 0 {
            let left: String = std::iter::repeat(self.track).take(pos).collect();
            out.push_str(&filled.clone().inline(true).render(&left));
        }
        out.push_str(&handle.clone().inline(true).render(&self.knob.to_string()));
        let rest = slots - pos;
        if rest > 0 {
            let right: String = std::iter::repeat(self.track).take(rest).collect();
            out.push_str(&empty.clone().inline(true).render(&right));
        }
        out
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn plain(s: &str) -> String {
        strip_ansi_escapes::strip_str(s)
    }

    #[test]
    fn test_new_clamps_initial_value() {
        assert_eq!(Model::new("x", 1, 30, 0).value(), 1);
        assert_eq!(Model::new("x", 1, 30, 99).value(), 30);
    }

    #[test]
    fn test_new_swaps_inverted_bounds() {
        let slider = Model::new("x", 30, 1, 5);
        assert_eq!((slider.min(), slider.max()), (1, 30));
    }

    #[test]
    fn test_increment_and_decrement_stop_at_bounds() {
        let mut slider = Model::new("x", 1, 3, 3);
        assert!(!slider.increment());
        assert_eq!(slider.value(), 3);

        assert!(slider.decrement());
        assert!(slider.decrement());
        assert!(!slider.decrement());
        assert_eq!(slider.value(), 1);
    }

    #[test]
    fn test_update_requires_focus() {
        let mut slider = Model::new("x", 1, 60, 25);
        assert!(!slider.update(&key(KeyCode::Right)));
        assert_eq!(slider.value(), 25);

        slider.focus();
        assert!(slider.update(&key(KeyCode::Right)));
        assert!(slider.update(&key(KeyCode::Char('+'))));
        assert!(slider.update(&key(KeyCode::Left)));
        assert_eq!(slider.value(), 26);
    }

    #[test]
    fn test_disabled_slider_ignores_keys() {
        let mut slider = Model::new("x", 1, 60, 25);
        slider.focus();
        slider.set_disabled(true);

        assert!(!slider.update(&key(KeyCode::Right)));
        assert_eq!(slider.value(), 25);
        assert!(!slider.keymap.increase.enabled());
    }

    #[test]
    fn test_fraction() {
        let mut slider = Model::new("x", 1, 61, 1);
        assert_eq!(slider.fraction(), 0.0);
        slider.set_value(31);
        assert_eq!(slider.fraction(), 0.5);
        slider.set_value(61);
        assert_eq!(slider.fraction(), 1.0);
    }

    #[test]
    fn test_view_shows_label_and_fixed_width_track() {
        let slider = Model::new("Break Length", 1, 30, 5).with_width(20);
        let view = plain(&slider.view());
        let mut lines = view.lines();

        assert_eq!(lines.next(), Some("Break Length: 5 minutes"));
        let track = lines.next().expect("track line");
        assert_eq!(track.chars().count(), 20);
        assert_eq!(track.chars().filter(|c| *c == '●').count(), 1);
    }

    #[test]
    fn test_handle_at_ends() {
        let low = Model::new("x", 1, 10, 1).with_width(10);
        let high = Model::new("x", 1, 10, 10).with_width(10);

        let low_track = plain(&low.view()).lines().nth(1).unwrap().to_string();
        let high_track = plain(&high.view()).lines().nth(1).unwrap().to_string();

        assert!(low_track.starts_with('●'));
        assert!(high_track.ends_with('●'));
    }
}
