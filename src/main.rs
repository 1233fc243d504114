//! Pitch Dash entry point
//!
//! Headless demo harness: pumps the session with a scripted input source and
//! logs the run outcome. A browser shell (canvas, key listeners, audio
//! element) plugs into the same `App` seams.

use pitch_dash::app::{App, InputSource, RenderSink};
use pitch_dash::audio::NullAudio;
use pitch_dash::sim::{GameSession, TickInput};

/// Jogs left and right across the field on a fixed cadence
#[derive(Default)]
struct ScriptedInput {
    frame: u64,
}

impl InputSource for ScriptedInput {
    fn snapshot(&mut self) -> TickInput {
        self.frame += 1;
        let phase = (self.frame / 120) % 2;
        TickInput {
            left: phase == 0,
            right: phase == 1,
            ..Default::default()
        }
    }
}

/// Logs a state line once a second of simulated time
#[derive(Default)]
struct LogRender {
    frames: u64,
}

impl RenderSink for LogRender {
    fn present(&mut self, session: &GameSession) {
        self.frames += 1;
        if self.frames % 60 == 0 {
            log::info!(
                "score {} | lives {} | {} obstacles | streaker {}",
                session.score,
                session.player.lives,
                session.obstacles.len(),
                if session.streaker.active { "on" } else { "off" },
            );
        }
        for event in &session.life_events {
            if event.ticks_left == pitch_dash::consts::LIFE_EVENT_TICKS - 1 {
                log::info!("{} Life", if event.delta > 0 { "+1" } else { "-1" });
            }
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Pitch Dash (headless) starting...");

    let mut app = App::new(12345, ScriptedInput::default(), LogRender::default(), NullAudio);
    app.start();

    // ~100 seconds of play at 60 fps, with a pause break partway through
    for frame in 0..6000u32 {
        if frame == 1800 || frame == 1860 {
            app.toggle_pause();
        }
        app.frame(1000.0 / 60.0);
        if app.session().phase == pitch_dash::sim::GamePhase::GameOver {
            break;
        }
    }

    let session = app.session();
    println!(
        "run over: score {}, {} obstacles on the field",
        session.score,
        session.obstacles.len()
    );
}
