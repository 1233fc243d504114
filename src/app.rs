//! Command surface and collaborator seams
//!
//! The host environment pumps [`App::frame`] once per animation callback and
//! forwards user commands to [`App::start`] / [`App::toggle_pause`]. Input,
//! render, and audio stay behind narrow traits so the core never touches the
//! DOM, a canvas, or a media element directly.

use crate::audio::AudioSink;
use crate::sim::{GamePhase, GameSession, TickInput, tick};

/// Source of the held-direction key state
///
/// Implementations are updated asynchronously by device events (key
/// listeners, touch buttons); the shell reads one snapshot per frame.
pub trait InputSource {
    fn snapshot(&mut self) -> TickInput;
}

/// Consumer of the per-frame state snapshot
///
/// Pure consumer: draws the field, entities, HUD, and life popups, and never
/// mutates core state. It runs every frame, including paused ones, so a
/// frozen frame stays on screen.
pub trait RenderSink {
    fn present(&mut self, session: &GameSession);
}

/// The game shell: one session plus its three external collaborators
pub struct App<I, R, A> {
    session: GameSession,
    input: I,
    render: R,
    audio: A,
    last_phase: GamePhase,
}

impl<I: InputSource, R: RenderSink, A: AudioSink> App<I, R, A> {
    pub fn new(seed: u64, input: I, render: R, audio: A) -> Self {
        Self {
            session: GameSession::new(seed),
            input,
            render,
            audio,
            last_phase: GamePhase::Idle,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Start (or, after a game over, restart) a run
    pub fn start(&mut self) {
        if self.session.start() {
            self.audio.started();
            self.last_phase = self.session.phase;
        }
    }

    /// Toggle pause, suspending or resuming the audio collaborator
    pub fn toggle_pause(&mut self) {
        if self.session.toggle_pause() {
            match self.session.phase {
                GamePhase::Paused => self.audio.paused(),
                GamePhase::Running => self.audio.resumed(),
                _ => {}
            }
            self.last_phase = self.session.phase;
        }
    }

    /// One host animation frame: input snapshot → simulation step → present
    pub fn frame(&mut self, elapsed_ms: f32) {
        let input = self.input.snapshot();
        tick(&mut self.session, &input, elapsed_ms);

        if self.session.phase != self.last_phase {
            if self.session.phase == GamePhase::GameOver {
                self.audio.game_over();
                log::info!("final score: {}", self.session.score);
            }
            self.last_phase = self.session.phase;
        }

        self.render.present(&self.session);
    }
}
