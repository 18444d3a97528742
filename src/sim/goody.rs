//! Falling pickups dropped by destroyed enemies

use glam::Vec2;
use serde::Serialize;

use super::entity::{Animation, Body, Entity, EntityKind, EntityView, Sprite};
use super::rng::RandomSource;
use super::world::WorldBounds;
use crate::consts::*;
use crate::error::Error;

/// Pickup effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GoodyKind {
    KillPlayer,
    AddLife,
    Invulnerability,
    /// Reserved: collecting it has no effect
    BreakOut,
    DoubleLaser,
    RapidFire,
    BonusScore,
}

impl GoodyKind {
    pub const ALL: [GoodyKind; 7] = [
        GoodyKind::KillPlayer,
        GoodyKind::AddLife,
        GoodyKind::Invulnerability,
        GoodyKind::BreakOut,
        GoodyKind::DoubleLaser,
        GoodyKind::RapidFire,
        GoodyKind::BonusScore,
    ];

    pub fn code(self) -> u8 {
        match self {
            GoodyKind::KillPlayer => 0,
            GoodyKind::AddLife => 1,
            GoodyKind::Invulnerability => 2,
            GoodyKind::BreakOut => 3,
            GoodyKind::DoubleLaser => 4,
            GoodyKind::RapidFire => 5,
            GoodyKind::BonusScore => 6,
        }
    }

    /// Short label for floating pickup text
    pub fn label(self) -> &'static str {
        match self {
            GoodyKind::KillPlayer => "Ouch!",
            GoodyKind::AddLife => "1UP",
            GoodyKind::Invulnerability => "Shield",
            GoodyKind::BreakOut => "Break-out",
            GoodyKind::DoubleLaser => "Double laser",
            GoodyKind::RapidFire => "Rapid fire",
            GoodyKind::BonusScore => "Bonus",
        }
    }
}

impl TryFrom<u8> for GoodyKind {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        GoodyKind::ALL
            .get(code as usize)
            .copied()
            .ok_or(Error::UnknownGoodyType(code))
    }
}

/// A pickup falling toward the players
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Goody {
    pub body: Body,
    pub kind: GoodyKind,
    pub sprite: Sprite,
    pub anim: Animation,
}

impl Goody {
    pub fn new(kind: GoodyKind, center: Vec2, fall_speed: f32) -> Self {
        Self {
            body: Body::centered(
                center,
                Vec2::splat(GOODY_SIZE),
                Vec2::new(0.0, fall_speed),
                0,
            ),
            kind,
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

        self.body.pos += self.body.speed * dt;
        if !world.outer.intersects(self.body.pos, self.body.size) {
            self.body.active = false;
        }
    }
}

impl Entity for Goody {
    fn body(&self) -> &Body {
        &self.body
    }

    fn kill(&mut self, _rng: &mut dyn RandomSource) -> Option<Goody> {
        self.body.start_dying(GOODY_EXPLOSION_TIME);
        self.body.speed = Vec2::ZERO;
        self.sprite = Sprite::Explosion;
        self.anim.reset();
        None
    }

    fn view(&self) -> EntityView {
        EntityView {
            kind: EntityKind::Goody {
                code: self.kind.code(),
            },
            pos: self.body.pos,
            size: self.body.size,
            sprite: self.sprite,
            frame: self.anim.frame,
        }
    }
}
