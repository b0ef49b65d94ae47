//! Axis-aligned rectangle geometry
//!
//! Everything in the playfield - ship, bullets, aliens, the play button - is
//! an axis-aligned rect in screen coordinates (origin top-left, y down).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle: top-left corner + size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (both positive)
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Build a rect of `size` centered on `center`
    pub fn centered_at(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
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

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Exact overlap test. Rects that merely share an edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Point-in-rect test (edges inclusive on top/left, exclusive on bottom/right)
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}
