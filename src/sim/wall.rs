//! Destructible fort cells
//!
//! A wall cell is static until hit; then it turns into debris that flies off
//! under gravity until it leaves the world or its debris timer runs out.

use glam::Vec2;
use serde::Serialize;

use super::entity::{Body, Entity, EntityKind, EntityView, Sprite};
use super::goody::Goody;
use super::rng::RandomSource;
use super::world::WorldBounds;
use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wall {
    pub body: Body,
    /// Downward acceleration applied to debris
    pub gravity: f32,
    pub sprite: Sprite,
}

impl Wall {
    pub fn new(center: Vec2) -> Self {
        Self {
            body: Body::centered(center, Vec2::splat(WALL_CELL), Vec2::ZERO, 0),
            gravity: WALL_GRAVITY,
            sprite: Sprite::Normal,
        }
    }

    pub fn update(&mut self, dt: f32, world: &WorldBounds) {
        if self.body.tick_off_time(dt) {
            self.body.active = false;
            return;
        }

        if !self.body.collidable {
            self.body.speed.y += self.gravity * dt;
            self.body.pos += self.body.speed * dt;
            if !world.outer.intersects(self.body.pos, self.body.size) {
                self.body.active = false;
            }
        }
    }
}

impl Entity for Wall {
    fn body(&self) -> &Body {
        &self.body
    }

    fn kill(&mut self, rng: &mut dyn RandomSource) -> Option<Goody> {
        self.body.start_dying(WALL_DEBRIS_TIME);
        self.body.speed = Vec2::new(rng.range(-120.0, 120.0), rng.range(-240.0, -80.0));
        self.sprite = Sprite::Explosion;
        None
    }

    fn view(&self) -> EntityView {
        EntityView {
            kind: EntityKind::Wall,
            pos: self.body.pos,
            size: self.body.size,
            sprite: self.sprite,
            frame: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedRandom;

    #[test]
    fn test_static_until_hit() {
        let world = WorldBounds::default();
        let mut wall = Wall::new(Vec2::new(108.0, 448.0));
        let before = wall.body.clone();
        wall.update(1.0, &world);
        assert_eq!(wall.body, before);
    }

    #[test]
    fn test_debris_falls_under_gravity() {
        let world = WorldBounds::default();
        let mut rng = ScriptedRandom::new(vec![0.5, 0.0]);
        let mut wall = Wall::new(Vec2::new(108.0, 448.0));
        assert!(wall.kill(&mut rng).is_none());
        assert!(!wall.body.collidable);
        assert_eq!(wall.body.speed, Vec2::new(0.0, -240.0));
        assert_eq!(wall.gravity, WALL_GRAVITY);

        wall.update(0.1, &world);
        // Gravity applied before moving
        assert_eq!(wall.body.speed.y, -240.0 + WALL_GRAVITY * 0.1);
        assert!(wall.body.pos.y < 440.0);
        assert!(wall.body.active);
    }

    #[test]
    fn test_debris_expires() {
        let world = WorldBounds::default();
        let mut rng = ScriptedRandom::new(vec![0.5, 0.0]);
        let mut wall = Wall::new(Vec2::new(108.0, 100.0));
        wall.kill(&mut rng);
        let mut ticks = 0;
        while wall.body.active && ticks < 100 {
            wall.update(0.1, &world);
            ticks += 1;
        }
        assert!(!wall.body.active);
        assert!(ticks <= 16);
    }
}
