//! Level descriptions and the loader that lays them out
//!
//! A level is two character grids:
//! - enemies: `0`/`1`/`2` per cell (enemy type), `_` for a gap
//! - fort: `X` for a wall cell, anything else empty, repeated across the
//!   screen `repeat` times
//!
//! Descriptors are validated once into a [`LevelLayout`]; spawning entities
//! from a layout cannot fail.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::enemy::{Enemy, EnemyKind};
use super::wall::Wall;
use super::world::WorldBounds;
use crate::consts::*;
use crate::error::{Error, Result};

/// Built-in level list
const BUILTIN_LEVELS: &str = include_str!("../../assets/levels.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FortDescriptor {
    pub pattern: Vec<String>,
    pub repeat: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDescriptor {
    #[serde(default)]
    pub name: String,
    pub fort: FortDescriptor,
    pub enemies: Vec<String>,
}

/// Validated positions for one level
#[derive(Debug, Clone, PartialEq)]
pub struct LevelLayout {
    pub name: String,
    /// Enemy types and centers
    pub enemies: Vec<(EnemyKind, Vec2)>,
    /// Wall cell centers
    pub walls: Vec<Vec2>,
}

impl LevelDescriptor {
    /// Check every cell and compute positions inside `world`
    pub fn layout(&self, world: &WorldBounds) -> Result<LevelLayout> {
        let inner = &world.inner;

        let columns = self.enemies.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let grid_left = inner.center_x() - columns as f32 * ENEMY_COLUMN_SPACING / 2.0;
        let mut enemies = Vec::new();
        for (row, line) in self.enemies.iter().enumerate() {
            for (col, cell) in line.chars().enumerate() {
                if cell == '_' {
                    continue;
                }
                let code = cell
                    .to_digit(10)
                    .ok_or(Error::InvalidEnemyCell { row, col, cell })?;
                let kind = EnemyKind::try_from(code as u8)?;
                let center = Vec2::new(
                    grid_left + (col as f32 + 0.5) * ENEMY_COLUMN_SPACING,
                    ENEMY_GRID_TOP + (row as f32 + 0.5) * ENEMY_ROW_SPACING,
                );
                enemies.push((kind, center));
            }
        }

        let fort_width = self
            .fort
            .pattern
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0) as f32
            * WALL_CELL;
        let mut walls = Vec::new();
        if self.fort.repeat > 0 {
            let slot = inner.width() / self.fort.repeat as f32;
            for fort in 0..self.fort.repeat {
                let fort_left = inner.left + slot * (fort as f32 + 0.5) - fort_width / 2.0;
                for (row, line) in self.fort.pattern.iter().enumerate() {
                    for (col, cell) in line.chars().enumerate() {
                        if cell == 'X' {
                            walls.push(Vec2::new(
                                fort_left + (col as f32 + 0.5) * WALL_CELL,
                                FORT_TOP + (row as f32 + 0.5) * WALL_CELL,
                            ));
                        }
                    }
                }
            }
        }

        Ok(LevelLayout {
            name: self.name.clone(),
            enemies,
            walls,
        })
    }
}

impl LevelLayout {
    pub fn spawn_enemies(&self) -> Vec<Enemy> {
        self.enemies
            .iter()
            .map(|&(kind, center)| Enemy::new(kind, center))
            .collect()
    }

    pub fn spawn_walls(&self) -> Vec<Wall> {
        self.walls.iter().map(|&center| Wall::new(center)).collect()
    }
}

/// Parse a JSON level list
pub fn parse_levels(json: &str) -> Result<Vec<LevelDescriptor>> {
    let levels: Vec<LevelDescriptor> = serde_json::from_str(json)?;
    if levels.is_empty() {
        return Err(Error::NoLevels);
    }
    Ok(levels)
}

/// The level list shipped with the crate
pub fn builtin_levels() -> Result<Vec<LevelDescriptor>> {
    parse_levels(BUILTIN_LEVELS)
}

/// Load a JSON level list from disk
pub fn load_levels(path: &Path) -> Result<Vec<LevelDescriptor>> {
    let json = std::fs::read_to_string(path)?;
    let levels = parse_levels(&json)?;
    log::info!("Loaded {} levels from {}", levels.len(), path.display());
    Ok(levels)
}

/// Validate a whole list up front
pub fn layout_all(levels: &[LevelDescriptor], world: &WorldBounds) -> Result<Vec<LevelLayout>> {
    if levels.is_empty() {
        return Err(Error::NoLevels);
    }
    levels.iter().map(|level| level.layout(world)).collect()
}
