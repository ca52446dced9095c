//! Rendering of the Pomodoro widget.

use super::{Model, Phase};
use crate::clock::format_clock;
use crate::key::{self, KeyMap};
use crate::Component;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles used by [`Model::view`].
///
/// The container style changes with the phase: a deep purple while a session
/// runs, a dark teal during a break, and no background while idle.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Container while idle.
    pub idle: Style,
    /// Container while a session runs.
    pub session: Style,
    /// Container while a break runs.
    pub break_: Style,
    /// The phase label.
    pub status: Style,
    /// Both countdown lines.
    pub clock: Style,
    /// Help key labels.
    pub help_key: Style,
    /// Help descriptions.
    pub help_desc: Style,
    /// Separator between help items.
    pub help_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        let container = Style::new().padding(1, 2, 1, 2);
        Self {
            idle: container.clone(),
            session: container
                .clone()
                .background(Color::from("#2C003E"))
                .foreground(Color::from("#FFFFFF")),
            break_: container
                .background(Color::from("#004E63"))
                .foreground(Color::from("#FFFFFF")),
            status: Style::new().bold(true),
            clock: Style::new().bold(true),
            help_key: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            help_desc: Style::new().foreground(AdaptiveColor {
                Light: "#B2B2B2",
                Dark: "#4A4A4A",
            }),
            help_separator: Style::new().foreground(AdaptiveColor {
                Light: "#DDDADA",
                Dark: "#3C3C3C",
            }),
        }
    }
}

/// Accent color of the status label for each phase.
fn accent(phase: Phase) -> Option<&'static str> {
    match phase {
        Phase::Idle => None,
        Phase::SessionRunning => Some("#6A0572"),
        Phase::BreakRunning => Some("#008B8B"),
    }
}

impl Model {
    /// Renders the status, both countdowns, both sliders and the help line.
    pub fn view(&self) -> String {
        let mut status_style = self.styles.status.clone();
        if let Some(color) = accent(self.phase) {
            status_style = status_style.background(Color::from(color));
        }
        let status = status_style
            .inline(true)
            .render(&format!(" {} ", self.phase.label().to_uppercase()));

        let clock = &self.styles.clock;
        let session_line = clock.clone().inline(true).render(&format!(
            "Session: {}",
            format_clock(self.session_seconds_left)
        ));
        let break_line = clock.clone().inline(true).render(&format!(
            "Break: {}",
            format_clock(self.break_seconds_left)
        ));

        let mut sections = vec![
            status,
            String::new(),
            session_line,
            break_line,
            String::new(),
            self.session_slider.view(),
            self.break_slider.view(),
        ];
        if self.show_help {
            let help = self.help_view();
            if !help.is_empty() {
                sections.push(String::new());
                sections.push(help);
            }
        }

        let container = match self.phase {
            Phase::Idle => &self.styles.idle,
            Phase::SessionRunning => &self.styles.session,
            Phase::BreakRunning => &self.styles.break_,
        };
        container.render(&sections.join("\n"))
    }

    /// One-line help for the controls that are currently enabled.
    pub fn help_view(&self) -> String {
        let mut bindings = self.keymap.short_help();
        let focused = if self.session_slider.focused() {
            &self.session_slider
        } else {
            &self.break_slider
        };
        bindings.extend(focused.keymap.short_help());
        self.short_help_view(&bindings)
    }

    fn short_help_view(&self, bindings: &[&key::Binding]) -> String {
        let separator = self.styles.help_separator.clone().inline(true).render(" • ");
        bindings
            .iter()
            .filter(|b| b.enabled())
            .map(|b| {
                let help = b.help();
                format!(
                    "{} {}",
                    self.styles.help_key.clone().inline(true).render(&help.key),
                    self.styles.help_desc.clone().inline(true).render(&help.desc)
                )
            })
            .collect::<Vec<_>>()
            .join(&separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cue::SilentCue;

    fn plain(s: &str) -> String {
        strip_ansi_escapes::strip_str(s)
    }

    #[test]
    fn test_idle_view() {
        let model = Model::new().with_cue(SilentCue);
        let view = plain(&model.view());

        assert!(view.contains("OFF"));
        assert!(view.contains("Session: 25:00"));
        assert!(view.contains("Break: 05:00"));
        assert!(view.contains("Session Length: 25 minutes"));
        assert!(view.contains("Break Length: 5 minutes"));
    }

    #[test]
    fn test_running_view_shows_phase_and_remaining() {
        let mut model = Model::new().with_cue(SilentCue);
        let _ = model.start_session();
        for _ in 0..61 {
            let tick = model.pending_tick().unwrap();
            model.update(Box::new(tick));
        }
        let view = plain(&model.view());

        assert!(view.contains("SESSION"));
        assert!(view.contains("Session: 23:59"));
    }

    #[test]
    fn test_help_hides_disabled_controls() {
        let mut model = Model::new().with_cue(SilentCue);
        let idle_help = plain(&model.help_view());
        assert!(idle_help.contains("start"));
        assert!(!idle_help.contains("pause"));
        assert!(idle_help.contains("reset"));
        assert!(idle_help.contains("longer"));

        let _ = model.start_session();
        let running_help = plain(&model.help_view());
        assert!(!running_help.contains("start"));
        assert!(running_help.contains("pause"));
        assert!(running_help.contains("reset"));
        assert!(!running_help.contains("longer"));
    }

    #[test]
    fn test_help_can_be_hidden() {
        let mut model = Model::new().with_cue(SilentCue);
        model.show_help = false;
        assert!(!plain(&model.view()).contains("reset"));
    }
}
