//! Game state and core entity types
//!
//! Everything the simulation mutates lives in [`GameSession`]. There are no
//! module-level singletons: the host owns one session and passes it to
//! [`tick`](super::tick::tick) each frame.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Menu / attract screen, nothing simulated yet
    Idle,
    /// Active gameplay
    Running,
    /// Frozen mid-run; the render layer may keep showing the last frame
    Paused,
    /// Run ended; a new start command is required
    GameOver,
}

/// The fixed obstacle catalog
///
/// Each kind carries a footprint and a sprite tag. The tag is opaque to the
/// simulation; the render layer resolves it to a drawable, and gameplay never
/// waits on asset loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Mud,
    Puddle,
    Defender,
    Blitzer,
    TackleSled,
    DragSled,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 6] = [
        ObstacleKind::Mud,
        ObstacleKind::Puddle,
        ObstacleKind::Defender,
        ObstacleKind::Blitzer,
        ObstacleKind::TackleSled,
        ObstacleKind::DragSled,
    ];

    /// Visual footprint in field pixels
    pub fn size(&self) -> Vec2 {
        match self {
            ObstacleKind::Mud => Vec2::new(100.0, 80.0),
            ObstacleKind::Puddle => Vec2::new(100.0, 60.0),
            ObstacleKind::Defender => Vec2::new(150.0, 150.0),
            ObstacleKind::Blitzer => Vec2::new(100.0, 100.0),
            ObstacleKind::TackleSled => Vec2::new(200.0, 100.0),
            ObstacleKind::DragSled => Vec2::new(200.0, 100.0),
        }
    }

    /// Opaque asset tag for the presentation layer
    pub fn sprite(&self) -> &'static str {
        match self {
            ObstacleKind::Mud => "mud",
            ObstacleKind::Puddle => "puddle",
            ObstacleKind::Defender => "defender",
            ObstacleKind::Blitzer => "defender2",
            ObstacleKind::TackleSled => "sled",
            ObstacleKind::DragSled => "sled2",
        }
    }
}

/// A falling obstacle
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Top-left corner; y starts above the visible field and scrolls down
    pub pos: Vec2,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.kind.size(),
        }
    }
}

/// The player sprite
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub lives: u32,
}

impl Player {
    /// Centered horizontally, a short run above the bottom touchline
    fn at_kickoff() -> Self {
        Self {
            pos: Vec2::new(
                (FIELD_WIDTH - PLAYER_SIZE) / 2.0,
                FIELD_HEIGHT - PLAYER_BOTTOM_OFFSET,
            ),
            lives: PLAYER_START_LIVES,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: Vec2::splat(PLAYER_SIZE),
        }
    }
}

/// The bonus-life runner crossing the field
///
/// At most one exists. While it is on the field the trigger score keeps
/// climbing in the background, but a second activation is gated on the
/// current one resolving first.
#[derive(Debug, Clone)]
pub struct Streaker {
    pub x: f32,
    /// +1.0 left-to-right, -1.0 right-to-left
    pub direction: f32,
    pub active: bool,
    /// Score at which the next crossing begins
    pub next_trigger_score: u64,
}

impl Streaker {
    fn armed() -> Self {
        Self {
            x: -STREAKER_MARGIN,
            direction: 1.0,
            active: false,
            next_trigger_score: STREAKER_SCORE_STEP,
        }
    }

    /// Collision box, pinned to the field's vertical midpoint
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, FIELD_HEIGHT / 2.0, STREAKER_SIZE, STREAKER_SIZE)
    }
}

/// Transient "+1 Life" / "-1 Life" popup for the render layer
#[derive(Debug, Clone)]
pub struct LifeEvent {
    /// +1 or -1
    pub delta: i32,
    /// Remaining ticks before the popup expires
    pub ticks_left: u32,
    /// Vertical position; floats upward as it ages
    pub y: f32,
}

/// Complete state for one run
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    /// Survival score, +1 per running tick
    pub score: u64,
    /// Milliseconds accumulated since the last spawn burst
    pub spawn_timer: f32,
    /// Current scroll speed; recomputed from score each tick
    pub obstacle_speed: f32,
    pub player: Player,
    /// Active obstacles; membership matters, order does not
    pub obstacles: Vec<Obstacle>,
    pub streaker: Streaker,
    /// Popups awaiting the render sink
    pub life_events: Vec<LifeEvent>,
}

impl GameSession {
    /// Create a session sitting at the menu
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            score: 0,
            spawn_timer: 0.0,
            obstacle_speed: BASE_OBSTACLE_SPEED,
            player: Player::at_kickoff(),
            obstacles: Vec::new(),
            streaker: Streaker::armed(),
            life_events: Vec::new(),
        }
    }

    /// Begin a run
    ///
    /// Valid from `Idle` or `GameOver`; ignored in any other phase. Always
    /// performs a full reset first: no entity survives across runs.
    pub fn start(&mut self) -> bool {
        match self.phase {
            GamePhase::Idle | GamePhase::GameOver => {
                self.reset();
                self.phase = GamePhase::Running;
                log::info!("run started (seed {})", self.seed);
                true
            }
            _ => false,
        }
    }

    /// Toggle `Running` ↔ `Paused`; ignored in any other phase
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Running => {
                self.phase = GamePhase::Paused;
                true
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Running;
                true
            }
            _ => false,
        }
    }

    /// Whether the next tick will advance the simulation
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.score = 0;
        self.spawn_timer = 0.0;
        self.obstacle_speed = BASE_OBSTACLE_SPEED;
        self.player = Player::at_kickoff();
        self.obstacles.clear();
        self.streaker = Streaker::armed();
        self.life_events.clear();
    }

    /// Queue a life popup anchored just above the player
    pub(crate) fn push_life_event(&mut self, delta: i32) {
        self.life_events.push(LifeEvent {
            delta,
            ticks_left: LIFE_EVENT_TICKS,
            y: self.player.pos.y - 10.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let session = GameSession::new(12345);
        assert_eq!(session.phase, GamePhase::Idle);
        assert_eq!(session.score, 0);
        assert_eq!(session.player.lives, PLAYER_START_LIVES);
        assert!(session.obstacles.is_empty());
        assert!(!session.streaker.active);
    }

    #[test]
    fn test_start_only_from_idle_or_game_over() {
        let mut session = GameSession::new(1);
        assert!(session.start());
        assert_eq!(session.phase, GamePhase::Running);

        // Already running: ignored
        assert!(!session.start());

        // Paused: ignored (resume, don't restart)
        session.toggle_pause();
        assert!(!session.start());
        assert_eq!(session.phase, GamePhase::Paused);

        session.phase = GamePhase::GameOver;
        assert!(session.start());
        assert_eq!(session.phase, GamePhase::Running);
    }

    #[test]
    fn test_pause_only_toggles_a_live_run() {
        let mut session = GameSession::new(1);
        // No pausing from the menu
        assert!(!session.toggle_pause());
        assert_eq!(session.phase, GamePhase::Idle);

        session.start();
        assert!(session.toggle_pause());
        assert_eq!(session.phase, GamePhase::Paused);
        assert!(session.toggle_pause());
        assert_eq!(session.phase, GamePhase::Running);

        session.phase = GamePhase::GameOver;
        assert!(!session.toggle_pause());
        assert_eq!(session.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_start_performs_full_reset() {
        let mut session = GameSession::new(7);
        session.start();
        session.score = 4321;
        session.spawn_timer = 999.0;
        session.player.lives = 3;
        session.obstacles.push(Obstacle {
            kind: ObstacleKind::Mud,
            pos: Vec2::new(100.0, 100.0),
        });
        session.streaker.active = true;
        session.streaker.next_trigger_score = 5000;
        session.phase = GamePhase::GameOver;

        session.start();
        assert_eq!(session.score, 0);
        assert_eq!(session.spawn_timer, 0.0);
        assert_eq!(session.player.lives, PLAYER_START_LIVES);
        assert!(session.obstacles.is_empty());
        assert!(!session.streaker.active);
        assert_eq!(session.streaker.next_trigger_score, STREAKER_SCORE_STEP);
        assert_eq!(session.player.pos, Player::at_kickoff().pos);
    }

    #[test]
    fn test_obstacle_catalog_footprints() {
        // Wide sleds, square defenders, flat puddles
        assert_eq!(ObstacleKind::TackleSled.size(), Vec2::new(200.0, 100.0));
        assert_eq!(ObstacleKind::Defender.size(), Vec2::new(150.0, 150.0));
        assert_eq!(ObstacleKind::Puddle.size(), Vec2::new(100.0, 60.0));
        for kind in ObstacleKind::ALL {
            assert!(!kind.sprite().is_empty());
        }
    }
}
