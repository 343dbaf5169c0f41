//! Seek steering and toroidal wrap for the homing teapots
//!
//! Pure math in SI units: forces in newtons, velocities in m/s. Position
//! stepping converts to pixels via `PIX_PER_M` at the call site.

use glam::Vec2;

use crate::consts::*;

/// Acceleration from a constant-magnitude force aimed at `target`.
///
/// Standing exactly on the target yields zero acceleration rather than
/// a NaN direction.
pub fn seek_acceleration(pos: Vec2, target: Vec2, max_force: f32, mass: f32) -> Vec2 {
    let r = target - pos;
    let dist = r.length();
    if dist < 1e-6 {
        return Vec2::ZERO;
    }
    let force = max_force * (r / dist);
    force / mass
}

/// Rescale `vel` onto the `max_speed` circle when it exceeds it.
pub fn clamp_speed(vel: Vec2, max_speed: f32) -> Vec2 {
    vel.clamp_length_max(max_speed)
}

/// Teleport a position crossing a wrap limit to the opposite side.
///
/// Velocity is untouched; a wrapped entity keeps its full momentum.
pub fn wrap_position(pos: &mut Vec2) {
    if pos.x < LEFT_LIMIT {
        pos.x = RIGHT_LIMIT;
    } else if pos.x > RIGHT_LIMIT {
        pos.x = LEFT_LIMIT;
    }
    if pos.y < BOTTOM_LIMIT {
        pos.y = TOP_LIMIT;
    } else if pos.y > TOP_LIMIT {
        pos.y = BOTTOM_LIMIT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek_points_toward_target() {
        let accel = seek_acceleration(Vec2::new(100.0, 50.0), Vec2::new(200.0, 50.0), 5.0, 2.0);
        assert!(accel.x > 0.0);
        assert!(accel.y.abs() < 1e-6);
    }

    #[test]
    fn test_seek_magnitude_is_force_over_mass() {
        let accel = seek_acceleration(Vec2::ZERO, Vec2::new(3.0, 4.0), 5.0, 2.0);
        assert!((accel.length() - 2.5).abs() < 1e-4);
    }

    #[test]
    fn test_seek_magnitude_independent_of_distance() {
        let near = seek_acceleration(Vec2::ZERO, Vec2::new(0.0, 1.0), 5.0, 2.0);
        let far = seek_acceleration(Vec2::ZERO, Vec2::new(0.0, 1000.0), 5.0, 2.0);
        assert!((near.length() - far.length()).abs() < 1e-4);
    }

    #[test]
    fn test_seek_on_target_is_zero() {
        let pos = Vec2::new(500.0, 350.0);
        let accel = seek_acceleration(pos, pos, 5.0, 2.0);
        assert_eq!(accel, Vec2::ZERO);
        assert!(accel.is_finite());
    }

    #[test]
    fn test_clamp_speed_leaves_slow_velocity_alone() {
        let vel = Vec2::new(1.0, 2.0);
        assert_eq!(clamp_speed(vel, 4.0), vel);
    }

    #[test]
    fn test_clamp_speed_rescales_preserving_direction() {
        let vel = Vec2::new(6.0, 8.0);
        let clamped = clamp_speed(vel, 4.0);
        assert!((clamped.length() - 4.0).abs() < 1e-4);
        let dir = vel.normalize();
        let clamped_dir = clamped.normalize();
        assert!((dir - clamped_dir).length() < 1e-4);
    }

    #[test]
    fn test_wrap_maps_each_limit_to_its_opposite() {
        let mut pos = Vec2::new(LEFT_LIMIT - 1.0, 100.0);
        wrap_position(&mut pos);
        assert_eq!(pos.x, RIGHT_LIMIT);

        let mut pos = Vec2::new(RIGHT_LIMIT + 1.0, 100.0);
        wrap_position(&mut pos);
        assert_eq!(pos.x, LEFT_LIMIT);

        let mut pos = Vec2::new(100.0, BOTTOM_LIMIT - 1.0);
        wrap_position(&mut pos);
        assert_eq!(pos.y, TOP_LIMIT);

        let mut pos = Vec2::new(100.0, TOP_LIMIT + 1.0);
        wrap_position(&mut pos);
        assert_eq!(pos.y, BOTTOM_LIMIT);
    }

    #[test]
    fn test_wrap_leaves_interior_untouched() {
        let mut pos = Vec2::new(432.0, 123.0);
        wrap_position(&mut pos);
        assert_eq!(pos, Vec2::new(432.0, 123.0));
    }

    #[test]
    fn test_wrap_handles_corner_crossing() {
        let mut pos = Vec2::new(RIGHT_LIMIT + 5.0, TOP_LIMIT + 5.0);
        wrap_position(&mut pos);
        assert_eq!(pos, Vec2::new(LEFT_LIMIT, BOTTOM_LIMIT));
    }
}
