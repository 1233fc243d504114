//! Axis-aligned rectangle geometry
//!
//! Every entity on the field is a rectangle: top-left corner plus size.
//! All collision work reduces to AABB overlap tests on these.

use glam::Vec2;

/// An axis-aligned rectangle in field coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Rectangle scaled to `factor` of each dimension, centered on the original
    pub fn shrunk(&self, factor: f32) -> Self {
        let size = self.size * factor;
        Self {
            pos: self.pos + (self.size - size) / 2.0,
            size,
        }
    }

    /// Check if a point lies strictly inside the rectangle
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x > self.left()
            && point.x < self.right()
            && point.y > self.top()
            && point.y < self.bottom()
    }
}
