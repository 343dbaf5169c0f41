//! Game state and core simulation types
//!
//! Everything a frontend needs to draw a frame lives here, in screen
//! pixels with the origin at the bottom-left corner.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::steering;
use crate::consts::*;
use crate::tuning::{ShipTuning, TeapotTuning, Tuning};
use crate::velocity_heading;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; terminal
    GameOver,
}

/// Shared kinematic record embedded by every entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Collision circle radius, also the boundary half-extent
    pub radius: f32,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }
}

/// Center of the playfield, the ship's spawn point
pub fn screen_center() -> Vec2 {
    Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0)
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub body: Body,
    /// Per-axis acceleration request from input, reapplied every tick
    pub thrust: Vec2,
    pub mass: f32,
    /// Velocity-proportional damping coefficient
    pub drag: f32,
    /// Per-axis velocity bound (px/tick)
    pub max_speed: f32,
    /// Fraction of the reflected velocity kept after an edge bounce
    pub bounce_ratio: f32,
    /// 0 = vulnerable; counts up each tick until the shield expires
    pub respawning: u32,
    /// Render alpha, dimmed while the shield is up
    pub alpha: u8,
    /// Aim angle (sprite convention, 0 = up), tracks the cursor
    pub heading: f32,
}

impl Ship {
    pub fn new(tuning: &ShipTuning) -> Self {
        let mut ship = Self {
            body: Body::new(Vec2::ZERO, Vec2::ZERO, tuning.radius),
            thrust: Vec2::ZERO,
            mass: tuning.mass,
            drag: tuning.drag,
            max_speed: tuning.max_speed,
            bounce_ratio: tuning.bounce_ratio,
            respawning: 0,
            alpha: OPAQUE_ALPHA,
            heading: 0.0,
        };
        ship.respawn();
        ship
    }

    /// Recenter for a fresh life. Velocity intentionally carries over.
    pub fn respawn(&mut self) {
        self.respawning = 1;
        self.body.pos = screen_center();
        self.heading = 0.0;
    }

    /// True while the post-respawn shield is active
    pub fn is_respawning(&self) -> bool {
        self.respawning > 0
    }

    /// One tick of motion: shield timer, drag-damped thrust integration,
    /// per-axis speed clamp, then an inelastic bounce off the screen edges.
    ///
    /// Tick-implicit Euler: one call advances exactly one frame.
    pub fn integrate(&mut self) {
        if self.respawning > 0 {
            self.respawning += 1;
            self.alpha = RESPAWN_ALPHA;
            if self.respawning > RESPAWN_TICKS {
                self.respawning = 0;
                self.alpha = OPAQUE_ALPHA;
            }
        }

        let accel = -self.drag * self.body.vel + self.thrust / self.mass;
        self.body.vel += accel;
        self.body.vel = self
            .body
            .vel
            .clamp(Vec2::splat(-self.max_speed), Vec2::splat(self.max_speed));
        self.body.pos += self.body.vel;
        self.bounce_off_edges();
    }

    fn bounce_off_edges(&mut self) {
        let r = self.body.radius;
        if self.body.pos.x - r < 0.0 {
            self.body.pos.x = r;
            self.body.vel.x *= -self.bounce_ratio;
        } else if self.body.pos.x + r > SCREEN_WIDTH {
            self.body.pos.x = SCREEN_WIDTH - r;
            self.body.vel.x *= -self.bounce_ratio;
        }
        if self.body.pos.y - r < 0.0 {
            self.body.pos.y = r;
            self.body.vel.y *= -self.bounce_ratio;
        } else if self.body.pos.y + r > SCREEN_HEIGHT {
            self.body.pos.y = SCREEN_HEIGHT - r;
            self.body.vel.y *= -self.bounce_ratio;
        }
    }
}

/// Discrete teapot size classes, largest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeapotSize {
    Large,
    Medium,
    Small,
}

impl TeapotSize {
    /// Sprite scale multiplier relative to the full-size art
    pub fn scale_factor(self) -> f32 {
        match self {
            TeapotSize::Large => 1.0,
            TeapotSize::Medium => 0.66,
            TeapotSize::Small => 0.33,
        }
    }
}

/// Damage-stage sprite frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeapotFrame {
    Intact,
    Damaged,
    Wrecked,
}

impl TeapotFrame {
    /// Index into a texture set ordered undamaged, damaged, destroyed
    pub fn frame_index(self) -> usize {
        match self {
            TeapotFrame::Intact => 0,
            TeapotFrame::Damaged => 1,
            TeapotFrame::Wrecked => 2,
        }
    }
}

/// Result of a projectile hit, for score and audio decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Already wrecked; the hit changed nothing
    Ignored,
    Damaged,
    Wrecked,
}

/// A homing enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teapot {
    pub id: u32,
    pub body: Body,
    /// Seek target, captured once at spawn and never updated
    pub target: Vec2,
    pub mass: f32,
    /// Constant steering force magnitude (newtons)
    pub max_force: f32,
    /// Velocity magnitude bound (m/s)
    pub max_speed: f32,
    pub health: u8,
    /// Damaged art shows at or below this health
    pub low_health_threshold: u8,
    pub alive: bool,
    pub size: TeapotSize,
    pub frame: TeapotFrame,
}

impl Teapot {
    pub fn new(
        id: u32,
        pos: Vec2,
        vel: Vec2,
        target: Vec2,
        size: TeapotSize,
        tuning: &TeapotTuning,
    ) -> Self {
        Self {
            id,
            body: Body::new(pos, vel, tuning.radius * size.scale_factor()),
            target,
            mass: tuning.mass,
            max_force: tuning.max_force,
            max_speed: tuning.max_speed,
            health: tuning.max_health,
            low_health_threshold: tuning.low_health_threshold,
            alive: true,
            size,
            frame: TeapotFrame::Intact,
        }
    }

    /// One steering step toward the spawn-captured target.
    ///
    /// Wrecks stop steering and freeze, but still wrap if something has
    /// pushed them across a limit.
    pub fn advance(&mut self, dt: f32) {
        if self.alive {
            let accel =
                steering::seek_acceleration(self.body.pos, self.target, self.max_force, self.mass);
            self.body.vel += accel * dt;
            self.body.vel = steering::clamp_speed(self.body.vel, self.max_speed);
            self.body.pos += self.body.vel * dt * PIX_PER_M;
        }
        steering::wrap_position(&mut self.body.pos);
    }

    /// Apply one projectile hit. Health never goes below zero and a
    /// wreck stays a wreck.
    pub fn process_hit(&mut self) -> HitOutcome {
        if !self.alive {
            return HitOutcome::Ignored;
        }
        self.health = self.health.saturating_sub(1);
        if self.health == 0 {
            self.alive = false;
            self.frame = TeapotFrame::Wrecked;
            HitOutcome::Wrecked
        } else {
            if self.health <= self.low_health_threshold {
                self.frame = TeapotFrame::Damaged;
            }
            HitOutcome::Damaged
        }
    }
}

/// A cannonball in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub body: Body,
    /// Facing, kept aligned with the direction of travel
    pub heading: f32,
}

impl Bullet {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            id,
            body: Body::new(pos, vel, radius),
            heading: velocity_heading(vel),
        }
    }

    /// Advance one step and re-align the facing with travel
    pub fn advance(&mut self) {
        self.body.pos += self.body.vel;
        self.heading = velocity_heading(self.body.vel);
    }

    /// True once the sprite is fully off screen by more than its own size
    pub fn off_screen(&self) -> bool {
        let margin = self.body.radius * 2.0;
        let p = self.body.pos;
        p.x < -margin || p.x > SCREEN_WIDTH + margin || p.y < -margin || p.y > SCREEN_HEIGHT + margin
    }
}

/// HUD marker for one remaining life
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifeIcon {
    pub pos: Vec2,
}

/// Bottom-left icon row: one icon per life, spaced one icon width apart,
/// centers one icon height above the bottom edge
fn layout_life_icons(lives: u8) -> Vec<LifeIcon> {
    let mut icons = Vec::with_capacity(lives as usize);
    let mut cursor = LIFE_ICON_MARGIN;
    for _ in 0..lives {
        icons.push(LifeIcon {
            pos: Vec2::new(cursor + LIFE_ICON_WIDTH, LIFE_ICON_HEIGHT),
        });
        cursor += LIFE_ICON_WIDTH;
    }
    icons
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter; keeps counting after game over
    pub frame: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Score
    pub score: u64,
    /// Player lives
    pub lives: u8,
    /// Seconds until the cannon may fire again
    pub fire_cooldown: f32,
    /// The player's ship
    pub ship: Ship,
    /// Homing enemies, wrecks included (sorted by id for determinism)
    pub teapots: Vec<Teapot>,
    /// Cannonballs in flight (sorted by id for determinism)
    pub bullets: Vec<Bullet>,
    /// HUD markers for remaining lives
    pub life_icons: Vec<LifeIcon>,
    /// Gameplay parameters
    pub tuning: Tuning,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session with default balance
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new session with explicit balance
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            frame: 0,
            phase: GamePhase::Playing,
            score: 0,
            lives: STARTING_LIVES,
            fire_cooldown: 0.0,
            ship: Ship::new(&tuning.ship),
            teapots: Vec::new(),
            bullets: Vec::new(),
            life_icons: layout_life_icons(STARTING_LIVES),
            tuning,
            next_id: 1,
        };

        let mut rng = Pcg32::seed_from_u64(seed);
        for _ in 0..STARTING_TEAPOT_COUNT {
            state.spawn_teapot(&mut rng);
        }

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn a full-size teapot at a random spot with a random drift,
    /// homing on the ship's current position.
    pub fn spawn_teapot(&mut self, rng: &mut Pcg32) {
        let id = self.next_entity_id();
        let pos = Vec2::new(
            rng.random_range(LEFT_LIMIT..RIGHT_LIMIT),
            rng.random_range(BOTTOM_LIMIT..TOP_LIMIT),
        );
        let vel = Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0));
        let target = self.ship.body.pos;
        let teapot = Teapot::new(id, pos, vel, target, TeapotSize::Large, &self.tuning.teapot);
        self.teapots.push(teapot);
    }

    /// Teapots still steering (wrecks excluded)
    pub fn alive_teapot_count(&self) -> usize {
        self.teapots.iter().filter(|t| t.alive).count()
    }

    /// Ensure entity collections are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.teapots.sort_by_key(|t| t.id);
        self.bullets.sort_by_key(|b| b.id);
    }
}
