//! Engine settings
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::PLAYER_LIVES;
use crate::error::Result;
use crate::sim::WorldBounds;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of players (1 or 2)
    pub players: u8,
    /// Lives each player starts a fresh game with
    pub starting_lives: i32,
    /// Seed for the production random source
    pub seed: u64,
    /// Soft and hard playfield bounds
    pub world: WorldBounds,
    /// Optional JSON level list; the built-in list is used when absent
    pub levels_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            players: 1,
            starting_lives: PLAYER_LIVES,
            seed: 0x5eed_1978,
            world: WorldBounds::default(),
            levels_path: None,
        }
    }
}

impl Settings {
    /// Settings for a one- or two-player game with everything else default
    pub fn with_players(players: u8) -> Self {
        Self {
            players,
            ..Self::default()
        }
    }

    /// Player count clamped to the supported range
    pub fn player_count(&self) -> usize {
        self.players.clamp(1, 2) as usize
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
