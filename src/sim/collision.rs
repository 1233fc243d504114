//! Collision detection
//!
//! Two tests with distinct jobs: the raw overlap test keeps freshly spawned
//! obstacles apart, and the shrunk-hitbox test resolves gameplay hits.
//! Gameplay uses hitboxes at 72% of the visual bounds so grazing an
//! obstacle's sprite edge doesn't cost a life.

use super::rect::Rect;
use crate::consts::HITBOX_SCALE;

/// Check whether two rectangles properly intersect
///
/// Strict inequalities throughout: rectangles that merely share an edge or
/// corner do not overlap.
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// Gameplay hit test
///
/// Both rectangles shrink to [`HITBOX_SCALE`] of their visual bounds,
/// centered, before the overlap test. Every life-affecting collision in the
/// simulation goes through here, never through [`rects_overlap`] directly.
pub fn hitboxes_collide(a: &Rect, b: &Rect) -> bool {
    rects_overlap(&a.shrunk(HITBOX_SCALE), &b.shrunk(HITBOX_SCALE))
}
