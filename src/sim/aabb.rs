//! Axis-aligned bounding boxes for world entities
//!
//! Every entity is a top-left position plus a size. Screen space is y-down,
//! so `bottom()` is the larger y value.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in world space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
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

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x * 0.5
    }

    /// Strict overlap test; touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Move so the bottom edge sits at `y`
    #[inline]
    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
    }

    /// Clamp horizontally into `[min_x, max_x - width]`
    pub fn clamp_x(&mut self, min_x: f32, max_x: f32) {
        let hi = (max_x - self.size.x).max(min_x);
        self.pos.x = self.pos.x.clamp(min_x, hi);
    }

    /// Draw position relative to a camera offset
    #[inline]
    pub fn screen_pos(&self, camera: Vec2) -> Vec2 {
        self.pos - camera
    }
}

/// Position/velocity integration shared by moving entities
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Body {
    pub rect: Aabb,
    pub vel: Vec2,
}

impl Body {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Aabb::new(x, y, w, h),
            vel: Vec2::ZERO,
        }
    }

    /// Add `accel` to vertical velocity, then move by the velocity
    #[inline]
    pub fn fall(&mut self, accel: f32) {
        self.vel.y += accel;
        self.rect.pos.y += self.vel.y;
    }
}
