//! Engine: owns every entity collection and advances them one tick at a time
//!
//! Per-tick order:
//! 1. players (game over if none left alive)
//! 2. formation movement, then enemy fire
//! 3. bullets, goodies, walls, mysteries
//! 4. floating text
//! 5. prune inactive entities
//! 6. collisions, in a fixed pass order
//! 7. next level once the enemy list is empty

use glam::Vec2;
use serde::Serialize;

use super::bullet::Bullet;
use super::collision::{self, BulletHit};
use super::enemy::Enemy;
use super::entity::{Entity, EntityView};
use super::formation::Formation;
use super::goody::Goody;
use super::hud::{Hud, TextGroups};
use super::input::{Action, InputState, Key};
use super::level::{self, LevelDescriptor, LevelLayout};
use super::mystery::Mystery;
use super::player::Player;
use super::rng::{RandomSource, SeededRandom};
use super::wall::Wall;
use super::world::WorldBounds;
use crate::consts::*;
use crate::error::Result;
use crate::settings::Settings;

/// Where the game goes after it ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stage {
    #[serde(rename = "highscore")]
    HighScore,
}

/// Final result handed to the high score screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameOver {
    pub next_stage: Stage,
    pub scores: Vec<u32>,
    /// Levels completed
    pub level: u32,
}

pub struct Engine {
    pub settings: Settings,
    pub world: WorldBounds,
    layouts: Vec<LevelLayout>,
    /// Levels completed so far; the layout index wraps around
    pub level: u32,
    pub players: Vec<Player>,
    pub enemies: Vec<Enemy>,
    pub player_bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<Bullet>,
    pub walls: Vec<Wall>,
    pub goodies: Vec<Goody>,
    pub mysteries: Vec<Mystery>,
    pub formation: Formation,
    pub hud: Hud,
    rng: Box<dyn RandomSource>,
    finished: bool,
}

impl Engine {
    /// Build an engine on the first level; every level is validated up front
    pub fn new(
        settings: Settings,
        levels: &[LevelDescriptor],
        rng: Box<dyn RandomSource>,
    ) -> Result<Self> {
        let world = settings.world;
        let layouts = level::layout_all(levels, &world)?;
        let mut engine = Self {
            settings,
            world,
            layouts,
            level: 0,
            players: Vec::new(),
            enemies: Vec::new(),
            player_bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            walls: Vec::new(),
            goodies: Vec::new(),
            mysteries: Vec::new(),
            formation: Formation::default(),
            hud: Hud::new(&[], 0, &world),
            rng,
            finished: false,
        };
        engine.load_level(true);
        Ok(engine)
    }

    /// Levels from `settings.levels_path` (or the built-in list), seeded RNG
    pub fn from_settings(settings: Settings) -> Result<Self> {
        let levels = match &settings.levels_path {
            Some(path) => level::load_levels(path)?,
            None => level::builtin_levels()?,
        };
        let rng = Box::new(SeededRandom::new(settings.seed));
        Self::new(settings, &levels, rng)
    }

    /// Completed passes through the level list
    pub fn recurrence(&self) -> u32 {
        self.level / self.layouts.len() as u32
    }

    fn spawn_players(&self) -> Vec<Player> {
        let count = self.settings.player_count();
        let inner = &self.world.inner;
        (0..count)
            .map(|num| {
                let x = if count == 1 {
                    inner.center_x()
                } else {
                    inner.left + inner.width() * (num as f32 + 1.0) / 3.0
                };
                Player::new(num, Vec2::new(x, PLAYER_Y), self.settings.starting_lives)
            })
            .collect()
    }

    /// Set up the current level; a fresh start also replaces the players
    pub fn load_level(&mut self, fresh_start: bool) {
        let index = self.level as usize % self.layouts.len();
        self.formation = Formation::new(self.recurrence());
        if fresh_start {
            self.players = self.spawn_players();
            self.finished = false;
        }

        let layout = &self.layouts[index];
        self.enemies = layout.spawn_enemies();
        self.walls = layout.spawn_walls();
        self.player_bullets.clear();
        self.enemy_bullets.clear();
        self.goodies.clear();
        self.mysteries.clear();

        self.hud = Hud::new(&self.players, self.level, &self.world);
        if !layout.name.is_empty() {
            let pos = Vec2::new(self.world.inner.center_x(), FORT_TOP - 40.0);
            self.hud.float(layout.name.clone(), pos);
        }
        log::info!(
            "Level {} \"{}\": {} enemies, {} walls, multiplier {:.2}",
            self.level + 1,
            layout.name,
            self.enemies.len(),
            self.walls.len(),
            self.formation.multiplier
        );
    }

    /// Advance to the next level, keeping the players
    pub fn next_level(&mut self) {
        self.level += 1;
        self.load_level(false);
    }

    /// Release a mystery ship heading in `direction` (±1)
    pub fn spawn_mystery(&mut self, direction: f32) {
        self.mysteries.push(Mystery::new(direction, &self.world));
    }

    /// Read movement and fire intent; fire any ready guns
    pub fn handle_input(&mut self, input: &impl InputState) {
        let shared = self.players.len() == 1;
        for player in self.players.iter_mut().filter(|p| !p.is_dead) {
            let held = |action: Action| {
                if shared {
                    input.any_down(&[Key::new(0, action), Key::new(1, action)])
                } else {
                    input.is_down(Key::new(player.num, action))
                }
            };
            let moving = held(Action::Right) as i32 - held(Action::Left) as i32;
            let firing = held(Action::Fire);
            player.steer(moving, firing);
            self.player_bullets.extend(player.fire());
        }
    }

    /// Advance one tick; returns the final result once no player is left
    pub fn update(&mut self, dt: f32) -> Option<GameOver> {
        for player in self.players.iter_mut().filter(|p| !p.is_dead) {
            self.player_bullets.extend(player.update(dt, &self.world));
        }
        if let Some(over) = self.game_over() {
            if !self.finished {
                self.finished = true;
                log::info!("Game over on level {}: scores {:?}", over.level + 1, over.scores);
            }
            return Some(over);
        }

        self.formation.advance(&mut self.enemies, dt, &self.world.inner);
        for enemy in &mut self.enemies {
            self.enemy_bullets.extend(enemy.update(dt, &self.world, self.rng.as_mut()));
        }

        for bullet in self.player_bullets.iter_mut().chain(self.enemy_bullets.iter_mut()) {
            bullet.update(dt, &self.world);
        }
        for goody in &mut self.goodies {
            goody.update(dt, &self.world);
        }
        for wall in &mut self.walls {
            wall.update(dt, &self.world);
        }
        for mystery in &mut self.mysteries {
            mystery.update(dt, &self.world);
        }

        self.hud.update(dt);

        self.enemies.retain(|e| e.is_active());
        self.player_bullets.retain(|b| b.is_active());
        self.enemy_bullets.retain(|b| b.is_active());
        self.walls.retain(|w| w.is_active());
        self.goodies.retain(|g| g.is_active());
        self.mysteries.retain(|m| m.is_active());

        self.resolve_collisions();

        if self.enemies.is_empty() {
            self.next_level();
        }
        None
    }

    /// Final result if every player is out
    pub fn game_over(&self) -> Option<GameOver> {
        if self.players.iter().any(|p| !p.is_dead) {
            return None;
        }
        Some(GameOver {
            next_stage: Stage::HighScore,
            scores: self.players.iter().map(|p| p.score).collect(),
            level: self.level,
        })
    }

    fn resolve_collisions(&mut self) {
        let hits = collision::shoot(
            &mut self.player_bullets,
            &mut self.enemy_bullets,
            self.rng.as_mut(),
        );
        self.award(hits);

        let hits = collision::shoot(&mut self.player_bullets, &mut self.enemies, self.rng.as_mut());
        self.award(hits);

        let hits = collision::shoot(&mut self.enemy_bullets, &mut self.players, self.rng.as_mut());
        for hit in &hits {
            if let Some(player) = self.players.get(hit.target) {
                self.hud.refresh_lives(player);
            }
        }
        self.award(hits);

        let hits = collision::shoot(&mut self.player_bullets, &mut self.walls, self.rng.as_mut());
        self.award(hits);

        let hits = collision::shoot(&mut self.enemy_bullets, &mut self.walls, self.rng.as_mut());
        self.award(hits);

        for (index, kind) in collision::collect_goodies(&mut self.goodies, &mut self.players) {
            let player = &self.players[index];
            log::debug!("Player {} collected {:?}", player.num, kind);
            self.hud.refresh_lives(player);
            self.hud.refresh_score(player);
            let pos = player.body.pos - Vec2::new(0.0, 8.0);
            self.hud.float(kind.label(), pos);
        }

        let hits = collision::shoot(
            &mut self.player_bullets,
            &mut self.mysteries,
            self.rng.as_mut(),
        );
        for hit in &hits {
            if let Some(mystery) = self.mysteries.get(hit.target) {
                let pos = mystery.body.pos;
                self.hud.float(format!("+{}", hit.score), pos);
            }
        }
        self.award(hits);
    }

    /// Credit shooters and collect dropped goodies
    fn award(&mut self, hits: Vec<BulletHit>) {
        for hit in hits {
            if let Some(goody) = hit.goody {
                self.goodies.push(goody);
            }
            if let Some(player) = hit.owner.and_then(|owner| self.players.get_mut(owner)) {
                player.score += hit.score;
                self.hud.refresh_score(player);
            }
        }
    }

    /// Every drawable, in draw order
    pub fn get_entities(&self) -> Vec<EntityView> {
        let mut views: Vec<EntityView> = Vec::new();
        views.extend(self.players.iter().filter(|p| !p.is_dead).map(Entity::view));
        views.extend(self.enemies.iter().map(Entity::view));
        views.extend(self.player_bullets.iter().map(Entity::view));
        views.extend(self.enemy_bullets.iter().map(Entity::view));
        views.extend(self.walls.iter().map(Entity::view));
        views.extend(self.goodies.iter().map(Entity::view));
        views.extend(self.mysteries.iter().map(Entity::view));
        views.extend(self.hud.glyph_views());
        views
    }

    pub fn get_texts(&self) -> TextGroups {
        self.hud.texts()
    }
}
