//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use glam::Vec2;

use super::collision::{bodies_overlap, overlapping};
use super::state::{Bullet, GamePhase, GameState, HitOutcome, screen_center};
use crate::audio::{AudioBus, SoundEffect};
use crate::consts::*;
use crate::{aim_heading, heading_to_velocity};

/// How close a teapot may get before the autopilot runs from it.
const AUTOPILOT_DANGER_RADIUS: f32 = 180.0;
/// Axis deadzone so the autopilot does not jitter around its goal.
const AUTOPILOT_DEADZONE: f32 = 24.0;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone)]
pub struct TickInput {
    /// Thrust command per axis, each component in [-1, 1]
    pub thrust: Vec2,
    /// Aim point in screen pixels (mouse/touch position)
    pub cursor: Vec2,
    /// Fire button held
    pub fire: bool,
    /// Demo mode; the tick derives its own input from the state
    pub autopilot: bool,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            thrust: Vec2::ZERO,
            cursor: screen_center(),
            fire: false,
            autopilot: false,
        }
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, audio: &mut AudioBus, dt: f32) {
    state.frame += 1;

    // Gameplay freezes after the run ends; only the frame counter advances.
    if state.phase == GamePhase::GameOver {
        return;
    }

    let mut input = input.clone();
    if input.autopilot {
        derive_autopilot_input(state, &mut input);
    }

    process_input(state, &input, audio, dt);

    for teapot in &mut state.teapots {
        teapot.advance(dt);
    }
    for bullet in &mut state.bullets {
        bullet.advance();
    }
    state.ship.integrate();

    resolve_bullet_hits(state, audio);
    resolve_ship_crash(state, audio);

    state.normalize_order();
}

/// Demo mode - the game plays itself
///
/// Aims at the nearest living teapot with the trigger held, and steers
/// the ship away from whatever is closest (wrecks crash the ship too).
fn derive_autopilot_input(state: &GameState, input: &mut TickInput) {
    let ship_pos = state.ship.body.pos;

    let quarry = state
        .teapots
        .iter()
        .filter(|t| t.alive)
        .min_by(|a, b| {
            let dist_a = a.body.pos.distance_squared(ship_pos);
            let dist_b = b.body.pos.distance_squared(ship_pos);
            dist_a.partial_cmp(&dist_b).unwrap_or(std::cmp::Ordering::Equal)
        });
    input.cursor = quarry.map(|t| t.body.pos).unwrap_or_else(screen_center);
    input.fire = quarry.is_some();

    let threat = state.teapots.iter().min_by(|a, b| {
        let dist_a = a.body.pos.distance_squared(ship_pos);
        let dist_b = b.body.pos.distance_squared(ship_pos);
        dist_a.partial_cmp(&dist_b).unwrap_or(std::cmp::Ordering::Equal)
    });

    input.thrust = match threat {
        Some(teapot)
            if teapot.body.pos.distance_squared(ship_pos)
                < AUTOPILOT_DANGER_RADIUS * AUTOPILOT_DANGER_RADIUS =>
        {
            let away = ship_pos - teapot.body.pos;
            Vec2::new(axis_step(away.x), axis_step(away.y))
        }
        _ => {
            // Nothing nearby; drift back toward the middle of the field.
            let home = screen_center() - ship_pos;
            Vec2::new(axis_step(home.x), axis_step(home.y))
        }
    };
}

/// Full key press along an axis, or nothing inside the deadzone.
fn axis_step(delta: f32) -> f32 {
    if delta > AUTOPILOT_DEADZONE {
        1.0
    } else if delta < -AUTOPILOT_DEADZONE {
        -1.0
    } else {
        0.0
    }
}

/// Apply aim, thrust, and fire commands to the ship.
fn process_input(state: &mut GameState, input: &TickInput, audio: &mut AudioBus, dt: f32) {
    state.fire_cooldown = (state.fire_cooldown - dt).max(0.0);

    // A cursor dead on the ship gives no aim direction; keep the last heading.
    if input.cursor != state.ship.body.pos {
        state.ship.heading = aim_heading(state.ship.body.pos, input.cursor);
    }

    let command = input.thrust.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
    state.ship.thrust = command * state.tuning.ship.thrust_accel;

    if input.fire && state.fire_cooldown <= 0.0 && !state.ship.is_respawning() {
        state.fire_cooldown = state.tuning.bullet.cooldown;
        let vel = heading_to_velocity(state.ship.heading, state.tuning.bullet.speed);
        let id = state.next_entity_id();
        let mut bullet = Bullet::new(id, state.ship.body.pos, vel, state.tuning.bullet.radius);
        // New bullets step immediately, then again with the rest this same tick.
        bullet.advance();
        log::trace!("fired bullet {} at heading {:.2}", id, state.ship.heading);
        state.bullets.push(bullet);
        audio.play(SoundEffect::CannonFire);
    }
}

/// Bullet→teapot collisions, then compact spent and off-screen bullets.
///
/// Each bullet hits every teapot it overlaps before it is spent.
fn resolve_bullet_hits(state: &mut GameState, audio: &mut AudioBus) {
    let mut spent: Vec<u32> = Vec::new();

    for bullet in &state.bullets {
        let mut struck = false;
        for teapot in &mut state.teapots {
            if !bodies_overlap(&bullet.body, &teapot.body) {
                continue;
            }
            // Wrecks soak up bullets without scoring again.
            struck = true;
            match teapot.process_hit() {
                HitOutcome::Damaged => audio.play(SoundEffect::TeapotHit),
                HitOutcome::Wrecked => {
                    state.score += WRECK_SCORE;
                    audio.play(SoundEffect::TeapotWreck);
                    log::info!("teapot {} wrecked, score {}", teapot.id, state.score);
                }
                HitOutcome::Ignored => {}
            }
        }
        if struck {
            spent.push(bullet.id);
        }
    }

    state
        .bullets
        .retain(|bullet| !spent.contains(&bullet.id) && !bullet.off_screen());
}

/// Ship→teapot collision: burn a life or end the run.
fn resolve_ship_crash(state: &mut GameState, audio: &mut AudioBus) {
    if state.ship.is_respawning() {
        return;
    }

    let hits = overlapping(&state.ship.body, state.teapots.iter().map(|t| &t.body));
    let Some(&index) = hits.first() else { return };

    if state.lives > 0 {
        state.lives -= 1;
        state.teapots.remove(index);
        state.life_icons.pop();
        state.ship.respawn();
        audio.play(SoundEffect::ShipCrash);
        log::info!("ship crashed, {} lives left", state.lives);
    } else {
        state.phase = GamePhase::GameOver;
        audio.play(SoundEffect::GameOver);
        log::info!(
            "game over at frame {} with score {}",
            state.frame,
            state.score
        );
    }
}
