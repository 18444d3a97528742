//! Star Invaders - fixed-step simulation core for a 2D shoot-'em-up
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, formation, collisions, engine)
//! - `settings`: Data-driven engine configuration
//! - `error`: Construction/configuration errors
//!
//! Rendering, key mapping and persistence are left to the embedding program:
//! the engine reads an [`sim::InputState`] and hands out snapshots.

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the driver (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Default playfield dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;
    /// Margin of the soft (movement) bounds inside the playfield
    pub const INNER_MARGIN: f32 = 10.0;
    /// Margin of the hard (projectile lifetime) bounds outside the playfield
    pub const OUTER_MARGIN: f32 = 64.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 52.0;
    pub const PLAYER_HEIGHT: f32 = 32.0;
    pub const PLAYER_SPEED: f32 = 200.0;
    /// Center line of the player ships
    pub const PLAYER_Y: f32 = 550.0;
    pub const PLAYER_LIVES: i32 = 3;
    pub const PLAYER_MAX_COOLDOWN: f32 = 0.5;
    pub const PLAYER_RAPID_COOLDOWN: f32 = 0.15;
    /// How long a hit player stays exploded and out of control
    pub const PLAYER_KILL_TIME: f32 = 2.0;
    /// Lateral offset of each barrel while double laser is active
    pub const DOUBLE_LASER_OFFSET: f32 = 12.0;

    /// Bullet defaults
    pub const PLAYER_BULLET_WIDTH: f32 = 4.0;
    pub const PLAYER_BULLET_HEIGHT: f32 = 16.0;
    pub const PLAYER_BULLET_SPEED: f32 = 400.0;
    pub const ENEMY_BULLET_WIDTH: f32 = 8.0;
    pub const ENEMY_BULLET_HEIGHT: f32 = 16.0;
    pub const ENEMY_BULLET_SPEED: f32 = 128.0;
    pub const BULLET_EXPLOSION_TIME: f32 = 0.25;
    /// Points for shooting down an enemy bullet
    pub const BULLET_SCORE: u32 = 5;

    /// Enemy defaults
    pub const ENEMY_SPEED: f32 = 24.0;
    pub const ENEMY_MAX_COOLDOWN: f32 = 1.0;
    /// Chance that an enemy fires when its cooldown runs out
    pub const ENEMY_FIRE_CHANCE: f32 = 0.05;
    pub const ENEMY_EXPLOSION_TIME: f32 = 0.5;
    pub const ENEMY_GOODY_SPEED: f32 = 90.0;

    /// Formation movement
    pub const FORMATION_DESCEND_TICKS: u32 = 10;
    pub const FORMATION_SPEEDUP: f32 = 0.05;
    /// Extra starting speed per completed pass through the level list
    pub const FORMATION_RECURRENCE_SPEEDUP: f32 = 0.33;

    /// Level layout
    pub const ENEMY_COLUMN_SPACING: f32 = 60.0;
    pub const ENEMY_ROW_SPACING: f32 = 50.0;
    pub const ENEMY_GRID_TOP: f32 = 60.0;
    pub const WALL_CELL: f32 = 16.0;
    pub const FORT_TOP: f32 = 440.0;

    /// Wall debris
    pub const WALL_GRAVITY: f32 = 600.0;
    pub const WALL_DEBRIS_TIME: f32 = 1.5;

    /// Goody defaults
    pub const GOODY_SIZE: f32 = 24.0;
    pub const GOODY_DROP_CHANCE: f32 = 1.0 / 3.0;
    pub const GOODY_EXPLOSION_TIME: f32 = 0.3;
    pub const INVULNERABLE_TIME: f32 = 10.0;
    pub const DOUBLE_LASER_TIME: f32 = 10.0;
    pub const RAPID_FIRE_TIME: f32 = 10.0;
    pub const SPEED_UP_TIME: f32 = 10.0;
    pub const BONUS_SCORE: u32 = 250;

    /// Mystery ship
    pub const MYSTERY_WIDTH: f32 = 64.0;
    pub const MYSTERY_HEIGHT: f32 = 28.0;
    pub const MYSTERY_Y: f32 = 36.0;
    pub const MYSTERY_SPEED: f32 = 110.0;
    pub const MYSTERY_AMPLITUDE: f32 = 12.0;
    pub const MYSTERY_FREQUENCY: f32 = 3.0;
    pub const MYSTERY_SCORE: u32 = 100;
    pub const MYSTERY_EXPLOSION_TIME: f32 = 0.6;

    /// HUD
    pub const MAX_LIFE_GLYPHS: i32 = 9;
    pub const FLOATING_TEXT_TIME: f32 = 1.5;
    pub const FLOATING_TEXT_RISE: f32 = 30.0;

    /// Animation frame length for two-frame sprites
    pub const ANIMATION_FRAME_TIME: f32 = 0.5;
}
