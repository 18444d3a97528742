//! Playfield geometry
//!
//! Two axis-aligned rectangles bound the world:
//! - inner (soft): players are clamped to it, enemies bounce off it
//! - outer (hard): projectiles, goodies and debris die once they leave it

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Axis-aligned rectangle in screen coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    /// True if a box at `pos` with `size` is at least partly inside
    pub fn intersects(&self, pos: Vec2, size: Vec2) -> bool {
        pos.x + size.x > self.left
            && pos.x < self.right
            && pos.y + size.y > self.top
            && pos.y < self.bottom
    }
}

/// Soft and hard world bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub inner: Rect,
    pub outer: Rect,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            inner: Rect::new(
                INNER_MARGIN,
                INNER_MARGIN,
                WORLD_WIDTH - INNER_MARGIN,
                WORLD_HEIGHT - INNER_MARGIN,
            ),
            outer: Rect::new(
                -OUTER_MARGIN,
                -OUTER_MARGIN,
                WORLD_WIDTH + OUTER_MARGIN,
                WORLD_HEIGHT + OUTER_MARGIN,
            ),
        }
    }
}
