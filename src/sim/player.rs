//! Player fighter
//!
//! Timer rules that matter for feel:
//! - firing is gated on `cooldown == 0`; rapid fire shortens the reset value
//! - status timers (invulnerable, double laser, rapid fire, speed up) stack
//!   additively when the same goody is collected again
//! - a hit player explodes for `PLAYER_KILL_TIME`, then [`Player::resurrect`]
//!   either respawns it in place or marks it dead for good

use glam::Vec2;
use serde::Serialize;

use super::bullet::Bullet;
use super::entity::{Animation, Body, Entity, EntityKind, EntityView, OFF_TIME_IDLE, Sprite};
use super::goody::{Goody, GoodyKind};
use super::rng::RandomSource;
use super::world::WorldBounds;
use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub body: Body,
    /// Player index (0 or 1)
    pub num: usize,
    /// Can go negative: "no fighter left" until the next resurrect check
    pub lives: i32,
    pub score: u32,
    /// Horizontal intent: -1, 0 or 1
    pub moving: i32,
    pub firing: bool,
    pub cooldown: f32,
    pub max_cooldown: f32,
    pub rapid_cooldown: f32,
    pub invulnerable: f32,
    pub double_laser: f32,
    pub rapid_fire: f32,
    pub speed_up: f32,
    pub is_dead: bool,
    pub sprite: Sprite,
    pub anim: Animation,
}

impl Player {
    pub fn new(num: usize, center: Vec2, lives: i32) -> Self {
        Self {
            body: Body::centered(
                center,
                Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
                Vec2::new(PLAYER_SPEED, 0.0),
                0,
            ),
            num,
            lives,
            score: 0,
            moving: 0,
            firing: false,
            cooldown: 0.0,
            max_cooldown: PLAYER_MAX_COOLDOWN,
            rapid_cooldown: PLAYER_RAPID_COOLDOWN,
            invulnerable: 0.0,
            double_laser: 0.0,
            rapid_fire: 0.0,
            speed_up: 0.0,
            is_dead: false,
            sprite: Sprite::Normal,
            anim: Animation::new(1),
        }
    }

    /// True while exploding after a hit
    pub fn is_dying(&self) -> bool {
        self.body.off_time > 0.0 && !self.is_dead
    }

    /// Whether the player still reacts to input
    pub fn has_control(&self) -> bool {
        !self.is_dead && !self.is_dying()
    }

    /// Set movement/fire intent from input
    pub fn steer(&mut self, moving: i32, firing: bool) {
        if self.has_control() {
            self.moving = moving.signum();
            self.firing = firing;
        } else {
            self.moving = 0;
            self.firing = false;
        }
    }

    pub fn update(&mut self, dt: f32, world: &WorldBounds) -> Vec<Bullet> {
        if self.is_dead {
            return Vec::new();
        }
        self.anim.tick(dt);

        self.cooldown = (self.cooldown - dt).max(0.0);
        self.invulnerable = (self.invulnerable - dt).max(0.0);
        self.double_laser = (self.double_laser - dt).max(0.0);
        self.rapid_fire = (self.rapid_fire - dt).max(0.0);
        if self.speed_up > 0.0 {
            self.speed_up -= dt;
            if self.speed_up <= 0.0 {
                self.body.speed.x /= 2.0;
            }
            self.speed_up = self.speed_up.max(0.0);
        }

        if self.body.tick_off_time(dt) {
            self.resurrect();
            return Vec::new();
        }

        if self.has_control() {
            let inner = &world.inner;
            let x = self.body.pos.x + self.moving as f32 * self.body.speed.x * dt;
            self.body.pos.x = x.clamp(inner.left, inner.right - self.body.size.x);
        }

        self.fire()
    }

    /// Shoot if the trigger is held and the gun is ready
    pub fn fire(&mut self) -> Vec<Bullet> {
        if !self.firing || self.cooldown != 0.0 || !self.has_control() {
            return Vec::new();
        }
        self.cooldown = if self.rapid_fire > 0.0 {
            self.rapid_cooldown
        } else {
            self.max_cooldown
        };

        let muzzle = Vec2::new(self.body.center().x, self.body.pos.y);
        if self.double_laser > 0.0 {
            vec![
                Bullet::laser(muzzle - Vec2::new(DOUBLE_LASER_OFFSET, 0.0), self.num),
                Bullet::laser(muzzle + Vec2::new(DOUBLE_LASER_OFFSET, 0.0), self.num),
            ]
        } else {
            vec![Bullet::laser(muzzle, self.num)]
        }
    }

    /// Take a hit. Ignored while invulnerable unless `force` is set;
    /// returns whether a life was lost.
    pub fn hit(&mut self, force: bool) -> bool {
        if !force && self.invulnerable > 0.0 {
            return false;
        }
        self.lives -= 1;
        self.body.off_time = PLAYER_KILL_TIME;
        self.cooldown = PLAYER_KILL_TIME;
        self.body.collidable = false;
        self.moving = 0;
        self.firing = false;
        self.sprite = Sprite::Explosion;
        self.anim.reset();
        log::debug!("Player {} hit, {} lives left", self.num, self.lives);
        true
    }

    /// Respawn in place after the explosion, or die for good if out of lives
    pub fn resurrect(&mut self) {
        if self.lives < 0 {
            self.is_dead = true;
            self.body.size = Vec2::ZERO;
            self.body.collidable = false;
            self.body.off_time = f32::INFINITY;
            self.sprite = Sprite::Empty;
            log::debug!("Player {} is out of fighters", self.num);
            return;
        }
        self.reset();
        log::debug!("Player {} respawned", self.num);
    }

    /// Back to fresh-spawn state, keeping position, score and lives
    pub fn reset(&mut self) {
        self.body.size = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        self.body.speed = Vec2::new(PLAYER_SPEED, 0.0);
        self.body.active = true;
        self.body.collidable = true;
        self.body.off_time = OFF_TIME_IDLE;
        self.moving = 0;
        self.firing = false;
        self.cooldown = 0.0;
        self.max_cooldown = PLAYER_MAX_COOLDOWN;
        self.rapid_cooldown = PLAYER_RAPID_COOLDOWN;
        self.invulnerable = 0.0;
        self.double_laser = 0.0;
        self.rapid_fire = 0.0;
        self.speed_up = 0.0;
        self.is_dead = false;
        self.sprite = Sprite::Normal;
        self.anim.reset();
    }

    pub fn add_invulnerable(&mut self, seconds: f32) {
        self.invulnerable += seconds;
    }

    pub fn add_double_laser(&mut self, seconds: f32) {
        self.double_laser += seconds;
    }

    /// Rapid fire takes effect on the shot already cooling down
    pub fn add_rapid_fire(&mut self, seconds: f32) {
        if self.rapid_fire == 0.0 && self.cooldown > 0.0 {
            let discount = self.max_cooldown - self.rapid_cooldown;
            self.cooldown = (self.cooldown - discount).max(0.0);
        }
        self.rapid_fire += seconds;
    }

    /// Doubles horizontal speed; extending an active boost does not compound
    pub fn add_speed_up(&mut self, seconds: f32) {
        if self.speed_up == 0.0 {
            self.body.speed.x *= 2.0;
        }
        self.speed_up += seconds;
    }

    /// Apply a collected goody
    pub fn apply_goody(&mut self, kind: GoodyKind) {
        match kind {
            GoodyKind::KillPlayer => {
                self.hit(false);
            }
            GoodyKind::AddLife => self.lives += 1,
            GoodyKind::Invulnerability => self.add_invulnerable(INVULNERABLE_TIME),
            GoodyKind::BreakOut => {
                log::debug!("Break-out goody collected by player {}: no effect", self.num);
            }
            GoodyKind::DoubleLaser => self.add_double_laser(DOUBLE_LASER_TIME),
            GoodyKind::RapidFire => self.add_rapid_fire(RAPID_FIRE_TIME),
            GoodyKind::BonusScore => self.score += BONUS_SCORE,
        }
    }

    /// Lives as shown on the HUD
    pub fn display_lives(&self) -> i32 {
        self.lives.clamp(0, MAX_LIFE_GLYPHS)
    }
}

impl Entity for Player {
    fn body(&self) -> &Body {
        &self.body
    }

    fn kill(&mut self, _rng: &mut dyn RandomSource) -> Option<Goody> {
        self.hit(false);
        None
    }

    fn view(&self) -> EntityView {
        EntityView {
            kind: EntityKind::Player { num: self.num },
            pos: self.body.pos,
            size: self.body.size,
            sprite: self.sprite,
            frame: self.anim.frame,
        }
    }
}
