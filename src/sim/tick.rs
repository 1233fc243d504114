//! Per-frame simulation step
//!
//! One externally pumped tick advances everything: player movement, spawn
//! cadence, obstacle scroll and collisions, the streaker sub-event, and
//! popup aging. The tick gates on the session phase internally, so the host
//! may keep calling it from its animation callback in any phase.

use rand::Rng;

use super::collision::hitboxes_collide;
use super::spawn::{spawn_interval, spawn_obstacles};
use super::state::{GamePhase, GameSession};
use crate::consts::*;

/// Held-direction snapshot for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Advance the session by one frame
///
/// `elapsed_ms` feeds the spawn timer only; movement and scoring are
/// frame-counted. Negative elapsed time violates the monotonic-tick contract
/// and is clamped to 0.
pub fn tick(session: &mut GameSession, input: &TickInput, elapsed_ms: f32) {
    if session.phase != GamePhase::Running {
        return;
    }
    let elapsed_ms = elapsed_ms.max(0.0);

    move_player(session, input);

    session.spawn_timer += elapsed_ms;
    session.score += 1;

    if session.spawn_timer >= spawn_interval(session.score) {
        spawn_obstacles(session);
        session.spawn_timer = 0.0;
    }

    session.obstacle_speed = BASE_OBSTACLE_SPEED + session.score as f32 / 4000.0;

    if advance_obstacles(session) {
        // Fatal collision already moved us to GameOver; the streaker and
        // remaining obstacles keep their pre-collision state.
        return;
    }

    update_streaker(session);
    age_life_events(session);
}

/// Apply held directions, each axis clamped to the field independently
fn move_player(session: &mut GameSession, input: &TickInput) {
    let player = &mut session.player;
    if input.left {
        player.pos.x -= PLAYER_SPEED;
    }
    if input.right {
        player.pos.x += PLAYER_SPEED;
    }
    player.pos.x = player.pos.x.clamp(0.0, FIELD_WIDTH - PLAYER_SIZE);

    if input.up {
        player.pos.y -= PLAYER_SPEED;
    }
    if input.down {
        player.pos.y += PLAYER_SPEED;
    }
    player.pos.y = player.pos.y.clamp(0.0, FIELD_HEIGHT - PLAYER_SIZE);
}

/// Scroll obstacles, resolve hits, cull the ones past the bottom edge
///
/// Returns true when a collision ended the run this tick.
fn advance_obstacles(session: &mut GameSession) -> bool {
    let player_rect = session.player.rect();
    let speed = session.obstacle_speed;

    let mut i = 0;
    while i < session.obstacles.len() {
        session.obstacles[i].pos.y += speed;

        if hitboxes_collide(&player_rect, &session.obstacles[i].rect()) {
            if session.player.lives > 1 {
                session.player.lives -= 1;
                session.push_life_event(-1);
                session.obstacles.swap_remove(i);
                continue;
            }
            session.phase = GamePhase::GameOver;
            log::info!("tackled at score {}", session.score);
            return true;
        }

        if session.obstacles[i].pos.y > FIELD_HEIGHT + DESPAWN_MARGIN {
            session.obstacles.swap_remove(i);
            continue;
        }

        i += 1;
    }
    false
}

/// The bonus-life runner
///
/// Activation and movement share a tick: a streaker triggered this frame
/// takes its first step immediately.
fn update_streaker(session: &mut GameSession) {
    let trigger = session.score >= session.streaker.next_trigger_score && !session.streaker.active;
    if trigger {
        let rightward = session.rng.random_bool(0.5);
        session.streaker.active = true;
        session.streaker.direction = if rightward { 1.0 } else { -1.0 };
        session.streaker.x = if rightward {
            -STREAKER_MARGIN
        } else {
            FIELD_WIDTH + STREAKER_MARGIN
        };
        session.streaker.next_trigger_score += STREAKER_SCORE_STEP;
        log::debug!(
            "streaker on the pitch at score {}, heading {}",
            session.score,
            if rightward { "right" } else { "left" }
        );
    }

    if !session.streaker.active {
        return;
    }

    session.streaker.x += STREAKER_SPEED * session.streaker.direction;

    let off_right =
        session.streaker.direction > 0.0 && session.streaker.x > FIELD_WIDTH + STREAKER_MARGIN;
    let off_left = session.streaker.direction < 0.0 && session.streaker.x < -STREAKER_MARGIN;
    if off_right || off_left {
        session.streaker.active = false;
    }

    if hitboxes_collide(&session.player.rect(), &session.streaker.rect()) {
        session.player.lives += 1;
        session.push_life_event(1);
        session.streaker.active = false;
    }
}

/// Age the life popups the render sink displays
fn age_life_events(session: &mut GameSession) {
    for event in session.life_events.iter_mut() {
        event.y -= 1.0;
        event.ticks_left -= 1;
    }
    session.life_events.retain(|e| e.ticks_left > 0);
}
