//! Data-driven game balance
//!
//! Defaults carry the shipped balance values. Tests and frontends can
//! construct variants and hand them to `GameState::with_tuning`.

use serde::{Deserialize, Serialize};

/// Ship physics parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipTuning {
    pub mass: f32,
    /// Acceleration per held movement key, per axis (px/tick²)
    pub thrust_accel: f32,
    /// Velocity-proportional damping applied every tick
    pub drag: f32,
    /// Per-axis velocity bound (px/tick)
    pub max_speed: f32,
    /// Fraction of the reflected velocity kept after an edge bounce
    pub bounce_ratio: f32,
    /// Collision circle radius (px)
    pub radius: f32,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            mass: 1.0,
            thrust_accel: 0.3,
            drag: 0.03,
            max_speed: 8.0,
            bounce_ratio: 0.3,
            radius: 16.0,
        }
    }
}

/// Teapot steering and durability parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeapotTuning {
    pub mass: f32,
    /// Constant seek force magnitude (newtons)
    pub max_force: f32,
    /// Velocity magnitude bound (m/s)
    pub max_speed: f32,
    pub max_health: u8,
    /// Damaged art shows at or below this health
    pub low_health_threshold: u8,
    /// Collision circle radius at full size (px)
    pub radius: f32,
}

impl Default for TeapotTuning {
    fn default() -> Self {
        Self {
            mass: 2.0,
            max_force: 5.0,
            max_speed: 4.0,
            max_health: 2,
            low_health_threshold: 1,
            radius: 16.0,
        }
    }
}

/// Cannonball parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletTuning {
    /// Muzzle speed (px/tick)
    pub speed: f32,
    /// Collision circle radius (px)
    pub radius: f32,
    /// Seconds between shots
    pub cooldown: f32,
}

impl Default for BulletTuning {
    fn default() -> Self {
        Self {
            speed: 30.0,
            radius: 8.0,
            cooldown: 0.25,
        }
    }
}

/// Complete balance set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub ship: ShipTuning,
    pub teapot: TeapotTuning,
    pub bullet: BulletTuning,
}
