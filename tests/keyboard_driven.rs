//! Drives the widget purely through `bubbletea_rs::Msg` values, the way the
//! runtime does.

use bubbletea_pomodoro::cue::SilentCue;
use bubbletea_pomodoro::pomodoro::{Event, Field, Model, Phase};
use bubbletea_pomodoro::PomodoroConfig;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

fn tick(model: &mut Model) {
    let pending = model.pending_tick().expect("a countdown is running");
    model.update(Box::new(pending));
}

#[test]
fn configure_with_keys_then_run_a_cycle() {
    let mut model = Model::new().with_cue(SilentCue);

    // session: 25 -> 1
    for _ in 0..30 {
        model.update(key(KeyCode::Left));
    }
    assert_eq!(model.session_length(), 1);

    // break: 5 -> 2
    model.update(key(KeyCode::Tab));
    assert_eq!(model.focused_field(), Field::BreakLength);
    model.update(key(KeyCode::Char('-')));
    model.update(key(KeyCode::Char('-')));
    model.update(key(KeyCode::Char('-')));
    assert_eq!(model.break_length(), 2);
    model.take_events();

    assert!(model.update(key(KeyCode::Char('s'))).is_some());
    for _ in 0..60 {
        tick(&mut model);
    }
    assert_eq!(model.phase(), Phase::BreakRunning);

    // adjusting is locked while the break runs
    model.update(key(KeyCode::Right));
    assert_eq!(model.break_length(), 2);

    for _ in 0..120 {
        tick(&mut model);
    }
    assert_eq!(model.phase(), Phase::Idle);
    assert_eq!(
        model.take_events(),
        vec![
            Event::SessionStarted,
            Event::SessionExpired,
            Event::BreakStarted,
            Event::BreakExpired,
            Event::Reset,
        ]
    );
}

#[test]
fn reset_key_works_during_break() {
    let config = PomodoroConfig {
        session_minutes: 1,
        break_minutes: 3,
        ..PomodoroConfig::default()
    };
    let mut model = Model::with_config(&config).with_cue(SilentCue);
    model.update(key(KeyCode::Enter));
    for _ in 0..70 {
        tick(&mut model);
    }
    assert_eq!(model.phase(), Phase::BreakRunning);
    assert_eq!(model.break_seconds_left(), 3 * 60 - 10);

    model.update(key(KeyCode::Char('r')));
    assert_eq!(model.phase(), Phase::Idle);
    assert_eq!(model.session_seconds_left(), 60);
    assert_eq!(model.break_seconds_left(), 3 * 60);
    assert!(model.pending_tick().is_none());
}

#[test]
fn unrelated_messages_are_ignored() {
    let mut model = Model::new().with_cue(SilentCue);
    assert!(model.update(Box::new("not a key")).is_none());
    assert!(model.update(key(KeyCode::Char('z'))).is_none());
    assert_eq!(model.phase(), Phase::Idle);
    assert!(model.take_events().is_empty());
}
