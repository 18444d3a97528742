use star_invaders::consts::*;
use star_invaders::sim::level::parse_levels;
use star_invaders::sim::{Engine, EntityKind, ScriptedRandom};
use star_invaders::Settings;

/// One type-0 enemy, no forts
const LONE_ENEMY: &str = r#"[{"name":"lone","fort":{"pattern":[],"repeat":0},"enemies":["0"]}]"#;

#[test]
fn enemy_bullet_costs_stationary_player_one_life() {
    let levels = parse_levels(LONE_ENEMY).unwrap();
    // Every roll 0.0: the enemy fires whenever its cooldown runs out
    let mut engine = Engine::new(
        Settings::default(),
        &levels,
        Box::new(ScriptedRandom::constant(0.0)),
    )
    .unwrap();
    assert_eq!(engine.players[0].invulnerable, 0.0);
    let lives = engine.players[0].lives;

    let mut ticks = 0;
    while engine.enemy_bullets.is_empty() {
        assert!(engine.update(SIM_DT).is_none());
        ticks += 1;
        assert!(ticks < 200, "enemy never fired");
    }

    // Park the player under the shot; no input afterwards, so it stays put
    let shot_x = engine.enemy_bullets[0].body.center().x;
    engine.players[0].body.pos.x = shot_x - PLAYER_WIDTH / 2.0;
    let parked_x = engine.players[0].body.pos.x;

    let mut ticks = 0;
    while engine.players[0].lives == lives {
        assert!(engine.update(SIM_DT).is_none());
        ticks += 1;
        assert!(ticks < 600, "bullet never reached the player");
    }

    let player = &engine.players[0];
    assert_eq!(player.lives, lives - 1);
    assert_eq!(player.body.pos.x, parked_x);
    assert!(!player.body.collidable);
    assert!(player.is_dying());

    let texts = engine.get_texts();
    assert_eq!(texts.lives[0].text, (lives - 1).to_string());
    let glyphs = engine
        .get_entities()
        .iter()
        .filter(|v| matches!(v.kind, EntityKind::LifeGlyph { player: 0 }))
        .count();
    assert_eq!(glyphs, (lives - 1) as usize);
}

#[test]
fn game_over_result_serializes_for_highscore_screen() {
    let levels = parse_levels(LONE_ENEMY).unwrap();
    let settings = Settings {
        starting_lives: 0,
        ..Settings::default()
    };
    let mut engine = Engine::new(settings, &levels, Box::new(ScriptedRandom::constant(0.9))).unwrap();
    engine.players[0].hit(true);

    let mut result = None;
    for _ in 0..300 {
        result = engine.update(SIM_DT);
        if result.is_some() {
            break;
        }
    }
    let over = result.expect("game over");
    let json = serde_json::to_value(&over).unwrap();
    assert_eq!(json["next_stage"], "highscore");
    assert_eq!(json["scores"], serde_json::json!([0]));
    assert_eq!(json["level"], 0);
}

#[test]
fn enemy_below_the_world_is_dropped_and_level_advances() {
    let levels = parse_levels(LONE_ENEMY).unwrap();
    let mut engine = Engine::new(
        Settings::default(),
        &levels,
        Box::new(ScriptedRandom::constant(0.9)),
    )
    .unwrap();
    engine.enemies[0].body.pos.y = WORLD_HEIGHT + OUTER_MARGIN + 100.0;

    let mut ticks = 0;
    while engine.level == 0 {
        assert!(engine.update(SIM_DT).is_none());
        ticks += 1;
        assert!(ticks < 6000, "enemy never left the level");
    }
    assert_eq!(engine.enemies.len(), 1);
    assert!(engine.enemies[0].body.pos.y < WORLD_HEIGHT / 2.0);
    assert!((engine.formation.multiplier - 1.33).abs() < 1e-6);
}
