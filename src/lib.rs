//! Pitch Dash - a top-down obstacle-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, game state)
//! - `app`: Command surface wiring the input/render/audio collaborators
//! - `audio`: Lifecycle signal seam for the background track
//! - `settings`: Player preferences

pub mod app;
pub mod audio;
pub mod settings;
pub mod sim;

pub use app::{App, InputSource, RenderSink};
pub use audio::{AudioSink, NullAudio};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Field dimensions in logical pixels
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 50.0;
    /// Movement per held direction, pixels per frame
    pub const PLAYER_SPEED: f32 = 7.0;
    pub const PLAYER_START_LIVES: u32 = 1;
    /// The player spawns this far above the bottom touchline
    pub const PLAYER_BOTTOM_OFFSET: f32 = 140.0;

    /// Obstacle scroll speed floor; grows with score
    pub const BASE_OBSTACLE_SPEED: f32 = 1.5;
    /// Obstacles are culled this far past the bottom edge
    pub const DESPAWN_MARGIN: f32 = 50.0;
    /// Upward jitter applied to the spawn row so obstacles stagger in
    pub const SPAWN_JITTER: f32 = 80.0;
    /// Placement attempts before a spawn is dropped
    pub const SPAWN_MAX_ATTEMPTS: u32 = 12;

    /// Gameplay hitboxes are this fraction of the visual bounds
    pub const HITBOX_SCALE: f32 = 0.72;

    /// Streaker defaults
    pub const STREAKER_SIZE: f32 = 50.0;
    /// Pixels per frame along its direction of travel
    pub const STREAKER_SPEED: f32 = 4.0;
    /// Spawn/exit margin beyond the side touchlines
    pub const STREAKER_MARGIN: f32 = 50.0;
    /// Score between streaker appearances
    pub const STREAKER_SCORE_STEP: u64 = 1000;

    /// Life popup lifetime in ticks
    pub const LIFE_EVENT_TICKS: u32 = 60;
}
