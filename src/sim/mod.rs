//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Caller-supplied timestep only
//! - Injected randomness only
//! - Stable iteration order (list order decides collision winners)
//! - No rendering or platform dependencies

pub mod bullet;
pub mod collision;
pub mod enemy;
pub mod engine;
pub mod entity;
pub mod formation;
pub mod goody;
pub mod hud;
pub mod input;
pub mod level;
pub mod mystery;
pub mod player;
pub mod rng;
pub mod wall;
pub mod world;

pub use bullet::{Bullet, BulletKind};
pub use collision::{BulletHit, aabb_overlap, collides};
pub use enemy::{Enemy, EnemyKind};
pub use engine::{Engine, GameOver, Stage};
pub use entity::{Body, Entity, EntityKind, EntityView, OFF_TIME_IDLE, Sprite};
pub use formation::Formation;
pub use goody::{Goody, GoodyKind};
pub use hud::{FloatingText, Hud, TextElement, TextGroups};
pub use input::{Action, InputState, Key, KeySet};
pub use level::{FortDescriptor, LevelDescriptor, LevelLayout};
pub use mystery::Mystery;
pub use player::Player;
pub use rng::{RandomSource, ScriptedRandom, SeededRandom};
pub use wall::Wall;
pub use world::{Rect, WorldBounds};
