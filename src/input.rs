//! Frontend input collection
//!
//! Frontends push device events in as they arrive; the session loop pulls
//! one [`TickInput`] out per tick. Keys map to thrust axes, the cursor maps
//! to aim, and the fire button stays held until released.

use glam::Vec2;

use crate::sim::{TickInput, screen_center};

/// Movement keys a frontend can hold down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKey {
    Up,
    Down,
    Left,
    Right,
}

/// Accumulated device state between ticks
#[derive(Debug, Clone)]
pub struct InputState {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    cursor: Vec2,
    fire_held: bool,
    autopilot: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            up: false,
            down: false,
            left: false,
            right: false,
            cursor: screen_center(),
            fire_held: false,
            autopilot: false,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_pressed(&mut self, key: MoveKey) {
        self.set_key(key, true);
    }

    pub fn key_released(&mut self, key: MoveKey) {
        self.set_key(key, false);
    }

    fn set_key(&mut self, key: MoveKey, held: bool) {
        match key {
            MoveKey::Up => self.up = held,
            MoveKey::Down => self.down = held,
            MoveKey::Left => self.left = held,
            MoveKey::Right => self.right = held,
        }
    }

    /// Cursor position in screen pixels, bottom-left origin.
    pub fn cursor_moved(&mut self, pos: Vec2) {
        self.cursor = pos;
    }

    pub fn fire_pressed(&mut self) {
        self.fire_held = true;
    }

    pub fn fire_released(&mut self) {
        self.fire_held = false;
    }

    /// Hand control to the demo autopilot (true) or back to the player.
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    /// Drop everything, e.g. when the window loses focus mid-keypress.
    pub fn reset(&mut self) {
        *self = Self {
            cursor: self.cursor,
            ..Self::default()
        };
    }

    /// Snapshot the held state as the next tick's input.
    pub fn frame_input(&self) -> TickInput {
        let thrust = Vec2::new(
            axis(self.left, self.right),
            axis(self.down, self.up),
        );
        TickInput {
            thrust,
            cursor: self.cursor,
            fire: self.fire_held,
            autopilot: self.autopilot,
        }
    }
}

/// -1, 0, or +1 from a pair of opposing keys.
fn axis(negative: bool, positive: bool) -> f32 {
    (positive as i8 - negative as i8) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_map_to_thrust_axes() {
        let mut input = InputState::new();
        input.key_pressed(MoveKey::Up);
        input.key_pressed(MoveKey::Left);
        assert_eq!(input.frame_input().thrust, Vec2::new(-1.0, 1.0));

        input.key_released(MoveKey::Up);
        assert_eq!(input.frame_input().thrust, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut input = InputState::new();
        input.key_pressed(MoveKey::Left);
        input.key_pressed(MoveKey::Right);
        assert_eq!(input.frame_input().thrust.x, 0.0);
    }

    #[test]
    fn test_fire_held_until_released() {
        let mut input = InputState::new();
        input.fire_pressed();
        assert!(input.frame_input().fire);
        assert!(input.frame_input().fire, "fire persists across frames");
        input.fire_released();
        assert!(!input.frame_input().fire);
    }

    #[test]
    fn test_reset_keeps_cursor() {
        let mut input = InputState::new();
        input.cursor_moved(Vec2::new(120.0, 80.0));
        input.key_pressed(MoveKey::Down);
        input.fire_pressed();
        input.reset();

        let frame = input.frame_input();
        assert_eq!(frame.thrust, Vec2::ZERO);
        assert!(!frame.fire);
        assert_eq!(frame.cursor, Vec2::new(120.0, 80.0));
    }
}
