//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod steering;
pub mod tick;

pub use collision::{bodies_overlap, overlapping};
pub use state::{
    Body, Bullet, GamePhase, GameState, HitOutcome, LifeIcon, Ship, Teapot, TeapotFrame,
    TeapotSize, screen_center,
};
pub use steering::{clamp_speed, seek_acceleration, wrap_position};
pub use tick::{TickInput, tick};
