//! Teapot Rush - a 2D arcade defense game
//!
//! A player-controlled ship fends off homing teapots with cannonball fire.
//! Rendering, audio playback and windowing are left to frontends; this
//! crate owns everything that decides what happens.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, steering, collisions, game state)
//! - `input`: Explicit input state, folded into a `TickInput` each frame
//! - `audio`: Sound-effect bus the frontend drains after each tick
//! - `tuning`: Data-driven game balance
//! - `settings`: User preferences

pub mod audio;
pub mod input;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use audio::{AudioBus, SoundEffect};
pub use input::InputState;
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen dimensions in pixels, origin bottom-left, +y up
    pub const SCREEN_WIDTH: f32 = 1000.0;
    pub const SCREEN_HEIGHT: f32 = 700.0;

    /// Extra space beyond the screen edges before a wrapping entity teleports
    pub const OFFSCREEN_SPACE: f32 = 0.0;
    pub const LEFT_LIMIT: f32 = -OFFSCREEN_SPACE;
    pub const RIGHT_LIMIT: f32 = SCREEN_WIDTH + OFFSCREEN_SPACE;
    pub const BOTTOM_LIMIT: f32 = -OFFSCREEN_SPACE;
    pub const TOP_LIMIT: f32 = SCREEN_HEIGHT + OFFSCREEN_SPACE;

    /// Steering math works in metres; positions are pixels
    pub const PIX_PER_M: f32 = 32.0;
    /// Uniform sprite scale frontends apply to all art
    pub const SPRITE_SCALE: f32 = 1.0;

    /// Teapots spawned at session start
    pub const STARTING_TEAPOT_COUNT: usize = 3;
    /// Lives at session start
    pub const STARTING_LIVES: u8 = 3;

    /// Ticks of invulnerability after a respawn
    pub const RESPAWN_TICKS: u32 = 150;
    /// Ship sprite alpha while invulnerable
    pub const RESPAWN_ALPHA: u8 = 150;
    /// Ship sprite alpha otherwise
    pub const OPAQUE_ALPHA: u8 = 255;

    /// Life icon row: leading margin and icon dimensions
    pub const LIFE_ICON_MARGIN: f32 = 10.0;
    pub const LIFE_ICON_WIDTH: f32 = 32.0;
    pub const LIFE_ICON_HEIGHT: f32 = 32.0;

    /// Score for wrecking a teapot with a cannonball
    pub const WRECK_SCORE: u64 = 1;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Sprite heading (0 = up, counter-clockwise) matching a direction vector
#[inline]
pub fn velocity_heading(dir: Vec2) -> f32 {
    use std::f32::consts::FRAC_PI_2;
    normalize_angle(dir.y.atan2(dir.x) - FRAC_PI_2)
}

/// Heading that points `from` at `to`, in sprite convention (0 = up)
#[inline]
pub fn aim_heading(from: Vec2, to: Vec2) -> f32 {
    velocity_heading(to - from)
}

/// Velocity of magnitude `speed` along a sprite heading
#[inline]
pub fn heading_to_velocity(heading: f32, speed: f32) -> Vec2 {
    Vec2::new(-heading.sin() * speed, heading.cos() * speed)
}
