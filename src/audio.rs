//! Audio collaborator seam
//!
//! The core emits lifecycle signals; whatever owns the background track (an
//! HTMLAudioElement in the browser shell, rodio on native, nothing at all in
//! tests) lives behind this trait. Signals are fire-and-forget: the core
//! never queries playback state back.

/// Receiver for session lifecycle signals
pub trait AudioSink {
    /// A run started; begin the background track from the top
    fn started(&mut self) {}
    /// The run paused; suspend playback
    fn paused(&mut self) {}
    /// The run resumed
    fn resumed(&mut self) {}
    /// The run ended
    fn game_over(&mut self) {}
}

/// Silent sink for headless runs and tests
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {}
