//! Headless demo session
//!
//! Runs the simulation under the autopilot at a fixed timestep and logs the
//! run. Rendering frontends drive the library crate directly instead of
//! going through this binary.

use std::time::{SystemTime, UNIX_EPOCH};

use teapot_rush::consts::*;
use teapot_rush::sim::{GamePhase, GameState, TickInput, tick};
use teapot_rush::{AudioBus, Settings};

/// Demo sessions stop after a minute of simulated time if nobody wins.
const MAX_DEMO_TICKS: u64 = 60 * 60;
/// Ticks between status lines (one simulated second).
const STATUS_INTERVAL: u64 = 60;

fn main() {
    env_logger::init();
    log::info!("Teapot Rush (headless demo) starting...");

    let settings = Settings::load();
    let mut audio = AudioBus::new();
    settings.apply_audio(&mut audio);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let mut state = GameState::new(seed);
    log::info!("Game initialized with seed: {}", seed);

    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    loop {
        tick(&mut state, &input, &mut audio, SIM_DT);

        for effect in audio.drain() {
            log::debug!("sound: {:?}", effect);
        }

        if state.frame % STATUS_INTERVAL == 0 {
            log::info!(
                "frame {} score {} lives {} teapots alive {}",
                state.frame,
                state.score,
                state.lives,
                state.alive_teapot_count()
            );
        }

        if state.phase == GamePhase::GameOver {
            log::info!("demo over: score {} after {} frames", state.score, state.frame);
            break;
        }
        if state.alive_teapot_count() == 0 {
            log::info!(
                "field cleared: score {} after {} frames",
                state.score,
                state.frame
            );
            break;
        }
        if state.frame >= MAX_DEMO_TICKS {
            log::info!(
                "demo cut off at frame {} with score {}",
                state.frame,
                state.score
            );
            break;
        }
    }

    println!(
        "final score {} after {:.1}s",
        state.score,
        state.frame as f32 * SIM_DT
    );
}
