//! Obstacle spawning
//!
//! Spawn cadence is score-driven, not time-driven: the interval between
//! bursts tightens as the run progresses, with a floor per difficulty
//! segment. Placement retries a bounded number of times and drops the spawn
//! rather than allow overlapping obstacles.

use rand::Rng;

use super::collision::rects_overlap;
use super::rect::Rect;
use super::state::{GameSession, Obstacle, ObstacleKind};
use crate::consts::*;

/// Milliseconds between spawn bursts at the given score
///
/// Piecewise by difficulty segment. The segments use different slopes and
/// floors, so the interval jumps from 1200 back up to ~1533 as the score
/// crosses 2000; that step is part of the tuning, not an artifact.
pub fn spawn_interval(score: u64) -> f32 {
    if score < 500 {
        2000.0
    } else if score < 2000 {
        (2200.0 - score as f32 / 2.0).max(600.0)
    } else {
        (2200.0 - score as f32 / 3.0).max(800.0)
    }
}

/// Spawn one or two obstacles above the visible field
///
/// Each placement draws a random kind, a random x fully inside the side
/// touchlines, and a random y above the top edge so the obstacle scrolls in.
/// Positions overlapping an active obstacle are rejected and redrawn; after
/// [`SPAWN_MAX_ATTEMPTS`] rejections the spawn is dropped silently. A missed
/// spawn is cheaper than a stacked one.
pub fn spawn_obstacles(session: &mut GameSession) {
    let count = session.rng.random_range(1..=2);
    for _ in 0..count {
        let kind = ObstacleKind::ALL[session.rng.random_range(0..ObstacleKind::ALL.len())];
        let size = kind.size();

        let mut placed = None;
        for _ in 0..SPAWN_MAX_ATTEMPTS {
            let x = session.rng.random_range(0.0..FIELD_WIDTH - size.x);
            let y = -size.y - session.rng.random_range(0.0..SPAWN_JITTER);
            let candidate = Rect::new(x, y, size.x, size.y);
            if !session
                .obstacles
                .iter()
                .any(|o| rects_overlap(&candidate, &o.rect()))
            {
                placed = Some(candidate.pos);
                break;
            }
        }

        match placed {
            Some(pos) => session.obstacles.push(Obstacle { kind, pos }),
            None => log::debug!("no clear placement for {:?}, spawn skipped", kind),
        }
    }
}
