//! Axis-aligned rectangle geometry for entities and collision
//!
//! Everything on the field is an axis-aligned box: the farmer, crops and
//! scarecrows. Overlap uses strict inequalities, so rectangles that merely
//! touch along an edge do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left position + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width/height, both > 0
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        debug_assert!(w > 0.0 && h > 0.0);
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Center point (spawn placement, presentation)
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Clamp position so the rect stays inside [0, world_w] x [0, world_h]
    pub fn clamp_to(&mut self, world_w: f32, world_h: f32) {
        self.pos.x = crate::clamp(self.pos.x, 0.0, world_w - self.size.x);
        self.pos.y = crate::clamp(self.pos.y, 0.0, world_h - self.size.y);
    }
}

/// AABB overlap with nonzero area; touching edges do not count
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.pos.x < b.right() && a.right() > b.pos.x && a.pos.y < b.bottom() && a.bottom() > b.pos.y
}
