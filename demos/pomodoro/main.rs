//! Terminal Pomodoro timer.
//!
//! Usage: `pomodoro [config.json]`
//!
//! s start • p pause • r reset • tab switch slider • ←/→ adjust • q quit

use bubbletea_pomodoro::key::{self, Binding};
use bubbletea_pomodoro::prelude::*;
use bubbletea_rs::{quit, Cmd, KeyMsg, Model, Msg, Program};

struct App {
    pomodoro: Pomodoro,
    quit: Binding,
}

fn load_config() -> PomodoroConfig {
    match std::env::args().nth(1) {
        Some(path) => match PomodoroConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{err}; using defaults");
                PomodoroConfig::default()
            }
        },
        None => PomodoroConfig::default(),
    }
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let config = load_config();
        #[allow(unused_mut)]
        let mut pomodoro = Pomodoro::with_config(&config);
        #[cfg(feature = "desktop-notify")]
        {
            pomodoro = pomodoro.with_cue(bubbletea_pomodoro::DesktopCue::from_config(&config));
        }

        let quit = key::new_binding(vec![
            key::with_keys_str(&["q", "ctrl+c"]),
            key::with_help("q", "quit"),
        ]);
        (Self { pomodoro, quit }, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.quit.matches(key_msg) {
                return Some(quit());
            }
        }
        let cmd = self.pomodoro.update(msg);
        // the view already reflects every change; events are only drained so
        // the queue does not grow
        self.pomodoro.take_events();
        cmd
    }

    fn view(&self) -> String {
        format!("{}\n\n  q quit\n", self.pomodoro.view())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<App>::builder()
        .alt_screen(true)
        .signal_handler(true)
        .build()?;

    program.run().await?;
    Ok(())
}
