//! Formation controller
//!
//! All enemies share one direction and one speed multiplier. The block sweeps
//! sideways until any enemy reaches the soft bounds, then drops for a fixed
//! number of ticks, reverses and speeds up a little.

use serde::Serialize;

use super::enemy::Enemy;
use super::world::Rect;
use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Formation {
    /// +1 moving right, -1 moving left
    pub direction: f32,
    pub multiplier: f32,
    /// Ticks of straight descent left
    pub descend_ticks: u32,
}

impl Default for Formation {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Formation {
    /// Fresh formation; faster on every pass through the level list
    pub fn new(recurrence: u32) -> Self {
        Self {
            direction: 1.0,
            multiplier: 1.0 + FORMATION_RECURRENCE_SPEEDUP * recurrence as f32,
            descend_ticks: 0,
        }
    }

    /// Move every enemy one tick; returns true if the formation bounced
    pub fn advance(&mut self, enemies: &mut [Enemy], dt: f32, inner: &Rect) -> bool {
        if self.descend_ticks > 0 {
            for enemy in enemies.iter_mut() {
                let dy = dt * enemy.body.speed.y * self.multiplier;
                enemy.descend(dy);
            }
            self.descend_ticks -= 1;
            return false;
        }

        let mut hit_bounds = false;
        for enemy in enemies.iter_mut() {
            let dx = self.direction * dt * enemy.body.speed.x * self.multiplier;
            hit_bounds |= enemy.sweep(dx, inner);
        }

        if hit_bounds {
            self.direction = -self.direction;
            self.descend_ticks = FORMATION_DESCEND_TICKS;
            self.multiplier += FORMATION_SPEEDUP;
            log::debug!(
                "Formation bounced: direction={}, multiplier={:.2}",
                self.direction,
                self.multiplier
            );
        }
        hit_bounds
    }
}
