//! Projectiles fired by players and enemies

use glam::Vec2;
use serde::Serialize;

use super::entity::{Animation, Body, Entity, EntityKind, EntityView, Sprite};
use super::goody::Goody;
use super::rng::RandomSource;
use super::world::WorldBounds;
use crate::consts::*;
use crate::error::Error;

/// Bullet visuals; code 0 is the player laser, 1-3 are enemy skins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BulletKind {
    Laser,
    Zigzag,
    Plunger,
    Rolling,
}

impl BulletKind {
    /// Enemy skins take codes `1..=ENEMY_SKIN_COUNT`
    pub const ENEMY_SKIN_COUNT: u8 = 3;

    pub fn code(self) -> u8 {
        match self {
            BulletKind::Laser => 0,
            BulletKind::Zigzag => 1,
            BulletKind::Plunger => 2,
            BulletKind::Rolling => 3,
        }
    }

    fn size(self) -> Vec2 {
        match self {
            BulletKind::Laser => Vec2::new(PLAYER_BULLET_WIDTH, PLAYER_BULLET_HEIGHT),
            _ => Vec2::new(ENEMY_BULLET_WIDTH, ENEMY_BULLET_HEIGHT),
        }
    }
}

impl TryFrom<u8> for BulletKind {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(BulletKind::Laser),
            1 => Ok(BulletKind::Zigzag),
            2 => Ok(BulletKind::Plunger),
            3 => Ok(BulletKind::Rolling),
            _ => Err(Error::UnknownBulletType(code)),
        }
    }
}

/// A bullet in flight (or exploding)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bullet {
    pub body: Body,
    /// Index of the player that fired it; `None` for enemy fire
    pub owner: Option<usize>,
    pub kind: BulletKind,
    pub sprite: Sprite,
    pub anim: Animation,
}

impl Bullet {
    pub fn new(center: Vec2, speed: Vec2, owner: Option<usize>, kind: BulletKind) -> Self {
        Self {
            body: Body::centered(center, kind.size(), speed, BULLET_SCORE),
            owner,
            kind,
            sprite: Sprite::Normal,
            anim: Animation::new(2),
        }
    }

    /// Player laser heading up
    pub fn laser(center: Vec2, owner: usize) -> Self {
        Self::new(
            center,
            Vec2::new(0.0, -PLAYER_BULLET_SPEED),
            Some(owner),
            BulletKind::Laser,
        )
    }

    pub fn update(&mut self, dt: f32, world: &WorldBounds) {
        self.anim.tick(dt);

        if self.body.tick_off_time(dt) {
            self.body.active = false;
            return;
        }

        self.body.pos += self.body.speed * dt;
        if !world.outer.intersects(self.body.pos, self.body.size) {
            self.body.active = false;
        }
    }
}

impl Entity for Bullet {
    fn body(&self) -> &Body {
        &self.body
    }

    fn kill(&mut self, _rng: &mut dyn RandomSource) -> Option<Goody> {
        self.body.start_dying(BULLET_EXPLOSION_TIME);
        self.body.speed = Vec2::ZERO;
        self.sprite = Sprite::Explosion;
        self.anim.reset();
        None
    }

    fn view(&self) -> EntityView {
        EntityView {
            kind: EntityKind::Bullet {
                code: self.kind.code(),
            },
            pos: self.body.pos,
            size: self.body.size,
            sprite: self.sprite,
            frame: self.anim.frame,
        }
    }
}
