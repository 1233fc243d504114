//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Phase-gated inside the tick, never by the host scheduler
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{hitboxes_collide, rects_overlap};
pub use rect::Rect;
pub use spawn::{spawn_interval, spawn_obstacles};
pub use state::{GamePhase, GameSession, LifeEvent, Obstacle, ObstacleKind, Player, Streaker};
pub use tick::{TickInput, tick};
