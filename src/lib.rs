//! Asteroids - simulation core for the classic arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, collisions, session state)
//! - `platform`: Contracts for the renderer, input source and restart prompt
//! - `settings`: Data-driven session configuration

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::{LevelStep, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default arena dimensions
    pub const ARENA_WIDTH: f32 = 900.0;
    pub const ARENA_HEIGHT: f32 = 900.0;

    /// Session defaults
    pub const STARTING_LIVES: u8 = 3;
    pub const INITIAL_ASTEROIDS: usize = 5;

    /// Side of the square respawn zone at the arena centre
    pub const RESPAWN_ZONE_SIZE: f32 = 50.0;

    /// Ship geometry (unrotated bounding box of the hull triangle)
    pub const SHIP_WIDTH: f32 = 20.0;
    pub const SHIP_HEIGHT: f32 = 40.0;
    /// Heading change per rotate command (12 degrees)
    pub const SHIP_TURN_STEP: f32 = std::f32::consts::PI / 15.0;
    /// Position nudge per thrust command
    pub const SHIP_THRUST_STEP: f32 = 2.0;

    /// Shot defaults
    pub const SHOT_SIZE: f32 = 8.0;
    pub const SHOT_SPEED: f32 = 8.0;

    /// Asteroid generation ranges (heights, half-open)
    pub const ASTEROID_SPAWN_HEIGHT: (u32, u32) = (30, 80);
    pub const ASTEROID_SMALL_HEIGHT: (u32, u32) = (30, 40);
    pub const ASTEROID_MEDIUM_HEIGHT: (u32, u32) = (41, 60);
    pub const ASTEROID_LARGE_HEIGHT: (u32, u32) = (60, 80);
    /// Width is height minus a jitter in [0, this)
    pub const ASTEROID_WIDTH_JITTER: u32 = 15;
    /// Tier thresholds on height
    pub const MEDIUM_MIN_HEIGHT: f32 = 40.0;
    pub const LARGE_MIN_HEIGHT: f32 = 60.0;
    /// Per-axis speed magnitude range (inclusive)
    pub const ASTEROID_MIN_SPEED: u32 = 1;
    pub const ASTEROID_MAX_SPEED: u32 = 3;
    /// Gap kept between spawn bands and the arena centre
    pub const SPAWN_CLEARANCE: f32 = 20.0;

    /// Blink windows after destruction (frame counts)
    pub const BLINK_FIRST_END: u32 = 5;
    pub const BLINK_SECOND_START: u32 = 10;
    pub const BLINK_END: u32 = 15;
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

/// Forward unit vector for a heading in screen space (y grows downward)
#[inline]
pub fn heading_to_unit(heading: f32) -> Vec2 {
    Vec2::new(heading.sin(), -heading.cos())
}

/// Rotate a local-space point about the origin by `angle` radians
#[inline]
pub fn rotate_point(p: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(2.5 * PI) - FRAC_PI_2).abs() < 1e-4);
        assert!(normalize_angle(3.0 * PI).abs() > PI - 1e-4);
        assert!((normalize_angle(-FRAC_PI_2) + FRAC_PI_2).abs() < 1e-6);
        assert!(normalize_angle(40.0 * PI / 15.0) < PI);
    }

    #[test]
    fn test_heading_to_unit_points_up_at_zero() {
        let v = heading_to_unit(0.0);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y + 1.0).abs() < 1e-6);

        let right = heading_to_unit(FRAC_PI_2);
        assert!((right.x - 1.0).abs() < 1e-6);
        assert!(right.y.abs() < 1e-6);
    }

    #[test]
    fn test_rotate_point_quarter_turn() {
        let p = rotate_point(Vec2::new(0.0, -20.0), FRAC_PI_2);
        assert!((p.x - 20.0).abs() < 1e-4);
        assert!(p.y.abs() < 1e-4);
    }
}
