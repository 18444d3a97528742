//! Formation invaders
//!
//! Enemies do not steer themselves: the formation controller moves them.
//! Their own `update` only runs timers and tries to fire.

use glam::Vec2;
use serde::Serialize;

use super::bullet::{Bullet, BulletKind};
use super::entity::{Animation, Body, Entity, EntityKind, EntityView, Sprite};
use super::goody::{Goody, GoodyKind};
use super::rng::RandomSource;
use super::world::{Rect, WorldBounds};
use crate::consts::*;
use crate::error::Error;

/// Enemy types by row code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EnemyKind {
    Octopus,
    Crab,
    Squid,
}

impl EnemyKind {
    pub fn code(self) -> u8 {
        match self {
            EnemyKind::Octopus => 0,
            EnemyKind::Crab => 1,
            EnemyKind::Squid => 2,
        }
    }

    pub fn size(self) -> Vec2 {
        match self {
            EnemyKind::Octopus => Vec2::new(48.0, 32.0),
            EnemyKind::Crab => Vec2::new(44.0, 32.0),
            EnemyKind::Squid => Vec2::new(32.0, 32.0),
        }
    }

    pub fn score(self) -> u32 {
        match self {
            EnemyKind::Octopus => 10,
            EnemyKind::Crab => 20,
            EnemyKind::Squid => 30,
        }
    }
}

impl TryFrom<u8> for EnemyKind {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(EnemyKind::Octopus),
            1 => Ok(EnemyKind::Crab),
            2 => Ok(EnemyKind::Squid),
            _ => Err(Error::UnknownEnemyType(code)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enemy {
    pub body: Body,
    pub kind: EnemyKind,
    /// Seconds until the next fire attempt
    pub cooldown: f32,
    /// Gap between the enemy's bottom edge and a spawned bullet's center
    pub bullet_offset: f32,
    /// Fall speed of dropped goodies
    pub goody_speed: f32,
    pub sprite: Sprite,
    pub anim: Animation,
}

impl Enemy {
    pub fn new(kind: EnemyKind, center: Vec2) -> Self {
        Self {
            body: Body::centered(
                center,
                kind.size(),
                Vec2::new(ENEMY_SPEED, ENEMY_SPEED),
                kind.score(),
            ),
            kind,
            cooldown: ENEMY_MAX_COOLDOWN,
            bullet_offset: ENEMY_BULLET_HEIGHT / 2.0,
            goody_speed: ENEMY_GOODY_SPEED,
            sprite: Sprite::Normal,
            anim: Animation::new(2),
        }
    }

    /// Run timers and try to fire; movement belongs to the formation
    pub fn update(
        &mut self,
        dt: f32,
        world: &WorldBounds,
        rng: &mut dyn RandomSource,
    ) -> Vec<Bullet> {
        self.anim.tick(dt);

        if self.body.tick_off_time(dt) || !world.outer.intersects(self.body.pos, self.body.size) {
            self.body.active = false;
            return Vec::new();
        }

        self.cooldown -= dt;
        if self.cooldown > 0.0 || !self.body.collidable {
            self.cooldown = self.cooldown.max(0.0);
            return Vec::new();
        }

        self.cooldown = ENEMY_MAX_COOLDOWN;
        if !rng.chance(ENEMY_FIRE_CHANCE) {
            return Vec::new();
        }
        self.fire(rng)
    }

    /// Drop a bullet with a random enemy skin from the bottom center
    pub fn fire(&self, rng: &mut dyn RandomSource) -> Vec<Bullet> {
        let code = 1 + rng.index(BulletKind::ENEMY_SKIN_COUNT as usize) as u8;
        let skin = match BulletKind::try_from(code) {
            Ok(skin) => skin,
            Err(err) => {
                log::warn!("{err}");
                return Vec::new();
            }
        };
        let center = Vec2::new(
            self.body.center().x,
            self.body.bottom() + self.bullet_offset,
        );
        vec![Bullet::new(
            center,
            Vec2::new(0.0, ENEMY_BULLET_SPEED),
            None,
            skin,
        )]
    }

    /// Step sideways; true if this enemy now reaches past the soft bounds
    pub fn sweep(&mut self, dx: f32, inner: &Rect) -> bool {
        self.body.pos.x += dx;
        if !self.body.collidable {
            return false;
        }
        (dx > 0.0 && self.body.right() > inner.right)
            || (dx < 0.0 && self.body.pos.x < inner.left)
            || self.body.bottom() > inner.bottom
    }

    pub fn descend(&mut self, dy: f32) {
        self.body.pos.y += dy;
    }
}

impl Entity for Enemy {
    fn body(&self) -> &Body {
        &self.body
    }

    fn kill(&mut self, rng: &mut dyn RandomSource) -> Option<Goody> {
        self.body.start_dying(ENEMY_EXPLOSION_TIME);
        self.body.speed = Vec2::ZERO;
        self.sprite = Sprite::Explosion;
        self.anim.reset();

        if !rng.chance(GOODY_DROP_CHANCE) {
            return None;
        }
        let code = rng.index(GoodyKind::ALL.len()) as u8;
        match GoodyKind::try_from(code) {
            Ok(kind) => Some(Goody::new(kind, self.body.center(), self.goody_speed)),
            Err(err) => {
                log::warn!("{err}");
                None
            }
        }
    }

    fn view(&self) -> EntityView {
        EntityView {
            kind: EntityKind::Enemy {
                code: self.kind.code(),
            },
            pos: self.body.pos,
            size: self.body.size,
            sprite: self.sprite,
            frame: self.anim.frame,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedRandom;

    fn world() -> WorldBounds {
        WorldBounds::default()
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(matches!(
            EnemyKind::try_from(3),
            Err(Error::UnknownEnemyType(3))
        ));
        assert_eq!(EnemyKind::try_from(1).unwrap(), EnemyKind::Crab);
    }

    #[test]
    fn test_fires_when_cooldown_expires_and_roll_passes() {
        // Fire roll 0.0 passes, skin roll 0.5 picks Plunger
        let mut rng = ScriptedRandom::new(vec![0.0, 0.5]);
        let mut enemy = Enemy::new(EnemyKind::Octopus, Vec2::new(400.0, 100.0));

        assert!(enemy.update(0.5, &world(), &mut rng).is_empty());
        assert_eq!(enemy.cooldown, 0.5);

        let bullets = enemy.update(0.5, &world(), &mut rng);
        assert_eq!(bullets.len(), 1);
        assert_eq!(enemy.cooldown, ENEMY_MAX_COOLDOWN);
        let bullet = &bullets[0];
        assert_eq!(bullet.owner, None);
        assert_eq!(bullet.kind, BulletKind::Plunger);
        assert_eq!(bullet.body.center().x, enemy.body.center().x);
        assert_eq!(bullet.body.pos.y, enemy.body.bottom());
    }

    #[test]
    fn test_fire_roll_at_threshold_misses() {
        let mut rng = ScriptedRandom::constant(ENEMY_FIRE_CHANCE);
        let mut enemy = Enemy::new(EnemyKind::Squid, Vec2::new(400.0, 100.0));
        assert!(enemy.update(ENEMY_MAX_COOLDOWN, &world(), &mut rng).is_empty());
        assert_eq!(enemy.cooldown, ENEMY_MAX_COOLDOWN);
    }

    #[test]
    fn test_kill_drops_goody_below_threshold() {
        // Drop roll passes, type roll picks index 4 (DoubleLaser)
        let mut rng = ScriptedRandom::new(vec![0.0, 4.5 / 7.0]);
        let mut enemy = Enemy::new(EnemyKind::Crab, Vec2::new(400.0, 100.0));
        let goody = enemy.kill(&mut rng).expect("goody");
        assert_eq!(goody.kind, GoodyKind::DoubleLaser);
        assert_eq!(goody.body.speed, Vec2::new(0.0, ENEMY_GOODY_SPEED));
        assert!(!enemy.body.collidable);
        assert!(enemy.body.active);
        assert_eq!(enemy.sprite, Sprite::Explosion);
    }

    #[test]
    fn test_kill_roll_at_threshold_drops_nothing() {
        let mut rng = ScriptedRandom::constant(GOODY_DROP_CHANCE);
        let mut enemy = Enemy::new(EnemyKind::Crab, Vec2::new(400.0, 100.0));
        assert!(enemy.kill(&mut rng).is_none());
    }

    #[test]
    fn test_dying_enemy_expires_and_never_fires() {
        let mut rng = ScriptedRandom::constant(0.9);
        let mut enemy = Enemy::new(EnemyKind::Octopus, Vec2::new(400.0, 100.0));
        enemy.kill(&mut rng);

        let mut rng = ScriptedRandom::constant(0.0);
        assert!(enemy.update(0.3, &world(), &mut rng).is_empty());
        assert!(enemy.body.active);
        assert!(enemy.update(0.3, &world(), &mut rng).is_empty());
        assert!(!enemy.body.active);
    }

    #[test]
    fn test_enemy_past_outer_bounds_deactivates() {
        let world = world();
        let mut rng = ScriptedRandom::constant(0.0);
        let below = Vec2::new(400.0, world.outer.bottom + 100.0);
        let mut enemy = Enemy::new(EnemyKind::Crab, below);
        assert!(enemy.update(ENEMY_MAX_COOLDOWN, &world, &mut rng).is_empty());
        assert!(!enemy.body.active);

        // Still overlapping the outer bounds: stays
        let edge = Vec2::new(400.0, world.outer.bottom - 4.0);
        let mut enemy = Enemy::new(EnemyKind::Crab, edge);
        enemy.update(0.1, &world, &mut rng);
        assert!(enemy.body.active);
    }
}
