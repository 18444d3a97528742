//! Bonus saucer crossing the top of the screen
//!
//! Flies horizontally at constant speed while bobbing around `base_y`.

use glam::Vec2;
use serde::Serialize;

use super::entity::{Animation, Body, Entity, EntityKind, EntityView, Sprite};
use super::goody::Goody;
use super::rng::RandomSource;
use super::world::WorldBounds;
use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mystery {
    pub body: Body,
    /// Vertical rest position of the top edge
    pub base_y: f32,
    pub amplitude: f32,
    /// Radians per second
    pub frequency: f32,
    /// Seconds since spawn, drives the bobbing
    pub elapsed: f32,
    pub sprite: Sprite,
    pub anim: Animation,
}

impl Mystery {
    /// Spawn just outside the soft bounds, heading in `direction` (±1)
    pub fn new(direction: f32, world: &WorldBounds) -> Self {
        let direction = if direction < 0.0 { -1.0 } else { 1.0 };
        let start_x = if direction > 0.0 {
            world.inner.left - MYSTERY_WIDTH / 2.0
        } else {
            world.inner.right + MYSTERY_WIDTH / 2.0
        };
        let body = Body::centered(
            Vec2::new(start_x, MYSTERY_Y),
            Vec2::new(MYSTERY_WIDTH, MYSTERY_HEIGHT),
            Vec2::new(direction * MYSTERY_SPEED, 0.0),
            MYSTERY_SCORE,
        );
        Self {
            base_y: body.pos.y,
            body,
            amplitude: MYSTERY_AMPLITUDE,
            frequency: MYSTERY_FREQUENCY,
            elapsed: 0.0,
            sprite: Sprite::Normal,
            anim: Animation::new(2),
        }
    }

    pub fn update(&mut self, dt: f32, world: &WorldBounds) {
        self.anim.tick(dt);

        if self.body.tick_off_time(dt) {
            self.body.active = false;
            return;
        }

        if self.body.collidable {
            self.elapsed += dt;
            self.body.pos.x += self.body.speed.x * dt;
            self.body.pos.y = self.base_y + self.amplitude * (self.elapsed * self.frequency).sin();
        }

        if !world.outer.intersects(self.body.pos, self.body.size) {
            self.body.active = false;
        }
    }
}

impl Entity for Mystery {
    fn body(&self) -> &Body {
        &self.body
    }

    fn kill(&mut self, _rng: &mut dyn RandomSource) -> Option<Goody> {
        self.body.start_dying(MYSTERY_EXPLOSION_TIME);
        self.body.speed = Vec2::ZERO;
        self.sprite = Sprite::Explosion;
        self.anim.reset();
        None
    }

    fn view(&self) -> EntityView {
        EntityView {
            kind: EntityKind::Mystery,
            pos: self.body.pos,
            size: self.body.size,
            sprite: self.sprite,
            frame: self.anim.frame,
        }
    }
}
