//! Heads-up display state: life and score readouts, level label, floating text
//!
//! The engine refreshes these after the events that change them; a renderer
//! reads them through [`TextGroups`].

use glam::Vec2;
use serde::Serialize;

use super::entity::{EntityKind, EntityView, Sprite};
use super::player::Player;
use super::world::WorldBounds;
use crate::consts::*;

/// A positioned line of text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextElement {
    pub text: String,
    pub pos: Vec2,
}

/// Text that drifts upward and disappears
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloatingText {
    pub text: String,
    pub pos: Vec2,
    /// Seconds left
    pub ttl: f32,
}

impl FloatingText {
    pub fn update(&mut self, dt: f32) {
        self.ttl -= dt;
        self.pos.y -= FLOATING_TEXT_RISE * dt;
    }
}

/// Text snapshot for a renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextGroups {
    pub lives: Vec<TextElement>,
    pub scores: Vec<TextElement>,
    pub level: TextElement,
    pub floating: Vec<FloatingText>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub lives: Vec<TextElement>,
    pub scores: Vec<TextElement>,
    pub level: TextElement,
    pub floating: Vec<FloatingText>,
    /// Life glyphs shown per player (0-9)
    life_glyphs: Vec<i32>,
    world: WorldBounds,
}

impl Hud {
    pub fn new(players: &[Player], level: u32, world: &WorldBounds) -> Self {
        let mut hud = Self {
            lives: Vec::new(),
            scores: Vec::new(),
            level: TextElement {
                text: String::new(),
                pos: Vec2::new(world.inner.center_x(), world.inner.top),
            },
            floating: Vec::new(),
            life_glyphs: Vec::new(),
            world: *world,
        };
        for player in players {
            let lives_pos = hud.corner(player.num, world.inner.bottom);
            let score_pos = hud.corner(player.num, world.inner.top);
            hud.lives.push(TextElement {
                text: String::new(),
                pos: lives_pos,
            });
            hud.scores.push(TextElement {
                text: String::new(),
                pos: score_pos,
            });
            hud.life_glyphs.push(0);
            hud.refresh_lives(player);
            hud.refresh_score(player);
        }
        hud.set_level(level);
        hud
    }

    /// Left edge for player 0, right side for player 1
    fn corner(&self, num: usize, y: f32) -> Vec2 {
        let inner = &self.world.inner;
        if num == 0 {
            Vec2::new(inner.left, y)
        } else {
            Vec2::new(inner.right - 160.0, y)
        }
    }

    pub fn refresh_lives(&mut self, player: &Player) {
        let shown = player.display_lives();
        if let Some(text) = self.lives.get_mut(player.num) {
            text.text = format!("{shown}");
        }
        if let Some(glyphs) = self.life_glyphs.get_mut(player.num) {
            *glyphs = shown;
        }
    }

    pub fn refresh_score(&mut self, player: &Player) {
        if let Some(text) = self.scores.get_mut(player.num) {
            text.text = format!("{:06}", player.score);
        }
    }

    /// Label shows the 1-based level number
    pub fn set_level(&mut self, level: u32) {
        self.level.text = format!("Level {}", level + 1);
    }

    pub fn float(&mut self, text: impl Into<String>, pos: Vec2) {
        self.floating.push(FloatingText {
            text: text.into(),
            pos,
            ttl: FLOATING_TEXT_TIME,
        });
    }

    /// Advance floating text and drop expired lines
    pub fn update(&mut self, dt: f32) {
        for text in &mut self.floating {
            text.update(dt);
        }
        self.floating.retain(|t| t.ttl > 0.0);
    }

    /// One small ship per remaining life, next to the life counter
    pub fn glyph_views(&self) -> Vec<EntityView> {
        let size = Vec2::new(PLAYER_WIDTH / 2.0, PLAYER_HEIGHT / 2.0);
        let mut views = Vec::new();
        for (num, &count) in self.life_glyphs.iter().enumerate() {
            let origin = self.corner(num, self.world.inner.bottom - size.y) + Vec2::new(24.0, 0.0);
            for i in 0..count {
                views.push(EntityView {
                    kind: EntityKind::LifeGlyph { player: num },
                    pos: origin + Vec2::new(i as f32 * (size.x + 2.0), 0.0),
                    size,
                    sprite: Sprite::Normal,
                    frame: 0,
                });
            }
        }
        views
    }

    pub fn texts(&self) -> TextGroups {
        TextGroups {
            lives: self.lives.clone(),
            scores: self.scores.clone(),
            level: self.level.clone(),
            floating: self.floating.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lives_clamped_for_display() {
        let world = WorldBounds::default();
        let mut player = Player::new(0, Vec2::new(400.0, PLAYER_Y), 12);
        let mut hud = Hud::new(std::slice::from_ref(&player), 0, &world);
        assert_eq!(hud.lives[0].text, "9");
        assert_eq!(hud.glyph_views().len(), 9);

        player.lives = -1;
        hud.refresh_lives(&player);
        assert_eq!(hud.lives[0].text, "0");
        assert!(hud.glyph_views().is_empty());
    }

    #[test]
    fn test_score_and_level_text() {
        let world = WorldBounds::default();
        let mut player = Player::new(1, Vec2::new(400.0, PLAYER_Y), 3);
        let players = vec![Player::new(0, Vec2::new(200.0, PLAYER_Y), 3), player.clone()];
        let mut hud = Hud::new(&players, 4, &world);
        assert_eq!(hud.level.text, "Level 5");
        player.score = 250;
        hud.refresh_score(&player);
        assert_eq!(hud.scores[1].text, "000250");
        assert_eq!(hud.scores[0].text, "000000");
    }

    #[test]
    fn test_floating_text_expires() {
        let world = WorldBounds::default();
        let mut hud = Hud::new(&[], 0, &world);
        hud.float("+250", Vec2::new(100.0, 100.0));
        hud.update(1.0);
        assert_eq!(hud.floating.len(), 1);
        assert!(hud.floating[0].pos.y < 100.0);
        hud.update(1.0);
        assert!(hud.floating.is_empty());
    }
}
