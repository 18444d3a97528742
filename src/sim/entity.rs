//! Shared entity shape and the kill capability
//!
//! Every simulated object embeds a [`Body`] and implements [`Entity`].
//! `kill()` only starts dying: the entity stays active until its `off_time`
//! runs out in a later `update`, so the explosion is always shown in full.
//!
//! `update` is not part of the trait: each variant has its own inherent
//! `update(dt, ..)` taking the context it needs (world bounds, and the random
//! source for enemies), and only players and enemies return new bullets.

use glam::Vec2;
use serde::Serialize;

use super::goody::Goody;
use super::rng::RandomSource;
use crate::consts::ANIMATION_FRAME_TIME;

/// `off_time` value meaning "not counting down"
pub const OFF_TIME_IDLE: f32 = -1.0;

/// Fields common to every entity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Body {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per second
    pub speed: Vec2,
    pub active: bool,
    pub collidable: bool,
    /// Countdown to deactivation, or [`OFF_TIME_IDLE`]
    pub off_time: f32,
    /// Points awarded to whoever destroys this entity
    pub score_value: u32,
}

impl Body {
    /// Build a body from its center; the corner is floored to whole pixels
    pub fn centered(center: Vec2, size: Vec2, speed: Vec2, score_value: u32) -> Self {
        Self {
            pos: (center - size / 2.0).floor(),
            size,
            speed,
            active: true,
            collidable: true,
            off_time: OFF_TIME_IDLE,
            score_value,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Advance `off_time`; returns true on the tick it crosses zero
    pub fn tick_off_time(&mut self, dt: f32) -> bool {
        if self.off_time > 0.0 {
            self.off_time -= dt;
            if self.off_time <= 0.0 {
                return true;
            }
        }
        false
    }

    /// Start dying: stop colliding and count down `duration`
    pub fn start_dying(&mut self, duration: f32) {
        self.collidable = false;
        self.off_time = duration;
    }
}

/// Which picture the renderer should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sprite {
    Normal,
    Explosion,
    Empty,
}

/// Frame timer for looping sprite animations
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Animation {
    pub frame: u32,
    pub frames: u32,
    pub frame_time: f32,
    pub timer: f32,
}

impl Animation {
    pub fn new(frames: u32) -> Self {
        Self {
            frame: 0,
            frames: frames.max(1),
            frame_time: ANIMATION_FRAME_TIME,
            timer: 0.0,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.timer += dt;
        while self.timer >= self.frame_time {
            self.timer -= self.frame_time;
            self.frame = (self.frame + 1) % self.frames;
        }
    }

    pub fn reset(&mut self) {
        self.frame = 0;
        self.timer = 0.0;
    }
}

/// What kind of thing a snapshot describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntityKind {
    Player { num: usize },
    Enemy { code: u8 },
    Bullet { code: u8 },
    Wall,
    Goody { code: u8 },
    Mystery,
    /// HUD glyph: one per remaining life
    LifeGlyph { player: usize },
}

/// Renderer-facing snapshot of one drawable
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityView {
    pub kind: EntityKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub sprite: Sprite,
    pub frame: u32,
}

/// Capability shared by every simulated object
pub trait Entity {
    fn body(&self) -> &Body;

    /// Turn a live entity into a dying one; only enemies may drop a goody
    fn kill(&mut self, rng: &mut dyn RandomSource) -> Option<Goody>;

    fn view(&self) -> EntityView;

    fn is_active(&self) -> bool {
        self.body().active
    }

    fn is_collidable(&self) -> bool {
        self.body().collidable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_floors_corner() {
        let body = Body::centered(Vec2::new(100.0, 36.0), Vec2::new(7.0, 16.0), Vec2::ZERO, 0);
        assert_eq!(body.pos, Vec2::new(96.0, 28.0));
        assert_eq!(body.off_time, OFF_TIME_IDLE);
        assert!(body.active && body.collidable);
    }

    #[test]
    fn test_off_time_idle_never_fires() {
        let mut body = Body::centered(Vec2::ZERO, Vec2::ONE, Vec2::ZERO, 0);
        for _ in 0..10 {
            assert!(!body.tick_off_time(0.5));
        }
        assert_eq!(body.off_time, OFF_TIME_IDLE);
    }

    #[test]
    fn test_off_time_reports_crossing_once() {
        let mut body = Body::centered(Vec2::ZERO, Vec2::ONE, Vec2::ZERO, 0);
        body.start_dying(0.25);
        assert!(!body.collidable);
        assert!(!body.tick_off_time(0.1));
        assert!(!body.tick_off_time(0.1));
        assert!(body.tick_off_time(0.1));
        // The negative crossing value is left for the caller to act on
        assert!(body.off_time < 0.0);
        assert!(!body.tick_off_time(0.1));
    }

    #[test]
    fn test_animation_wraps() {
        let mut anim = Animation::new(2);
        anim.tick(ANIMATION_FRAME_TIME);
        assert_eq!(anim.frame, 1);
        anim.tick(ANIMATION_FRAME_TIME);
        assert_eq!(anim.frame, 0);
    }
}
