//! Star Invaders headless driver
//!
//! Runs the simulation at a fixed step with an autopilot that sweeps the
//! player back and forth while holding fire, and logs how the run went.
//!
//! Usage: `star-invaders [settings.json]`

use std::path::PathBuf;

use star_invaders::Settings;
use star_invaders::consts::SIM_DT;
use star_invaders::sim::{Action, Engine, Key, KeySet};

/// Give up after this much simulated time
const MAX_SECONDS: f32 = 600.0;
/// Seconds between autopilot direction changes
const SWEEP_PERIOD: f32 = 1.5;
/// Seconds between mystery ships
const MYSTERY_PERIOD: f32 = 20.0;

fn main() {
    env_logger::init();
    log::info!("Star Invaders (headless) starting...");

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> star_invaders::Result<()> {
    let settings = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    let players = settings.player_count();
    let mut engine = Engine::from_settings(settings)?;

    let mut keys = KeySet::new();
    let max_ticks = (MAX_SECONDS / SIM_DT) as u32;
    let sweep_ticks = (SWEEP_PERIOD / SIM_DT) as u32;
    let mystery_ticks = (MYSTERY_PERIOD / SIM_DT) as u32;

    for tick in 0..max_ticks {
        for player in 0..players {
            // Players sweep in opposite directions
            let right = ((tick / sweep_ticks) as usize + player) % 2 == 0;
            let (held, released) = if right {
                (Action::Right, Action::Left)
            } else {
                (Action::Left, Action::Right)
            };
            keys.release(Key::new(player, released));
            keys.press(Key::new(player, held));
            keys.press(Key::new(player, Action::Fire));
        }

        if tick > 0 && tick % mystery_ticks == 0 {
            let direction = if (tick / mystery_ticks) % 2 == 0 { 1.0 } else { -1.0 };
            engine.spawn_mystery(direction);
        }

        engine.handle_input(&keys);
        if let Some(over) = engine.update(SIM_DT) {
            let json = serde_json::to_string(&over)?;
            log::info!("Finished after {:.1}s", tick as f32 * SIM_DT);
            println!("{json}");
            return Ok(());
        }
    }

    let scores: Vec<u32> = engine.players.iter().map(|p| p.score).collect();
    log::info!(
        "Stopped after {MAX_SECONDS}s on level {} with scores {:?}",
        engine.level + 1,
        scores
    );
    Ok(())
}
