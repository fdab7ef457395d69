//! Arena bounds and edge wrap-around

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shape::Aabb;
use crate::consts::RESPAWN_ZONE_SIZE;

/// Fixed rectangular play field. Positions grow right and down from (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Square zone at the centre that must be clear before the ship respawns
    pub fn respawn_zone(&self) -> Aabb {
        Aabb::centered(self.center(), Vec2::splat(RESPAWN_ZONE_SIZE))
    }

    /// Teleport a body of `size` whose top-left anchor is `pos` back into the
    /// arena. Each axis is handled independently; a body leaving past the far
    /// edge reappears at 0, one leaving past 0 reappears flush with the far
    /// edge.
    pub fn wrap(&self, pos: &mut Vec2, size: Vec2) {
        if pos.x + size.x > self.width {
            pos.x = 0.0;
        } else if pos.x < 0.0 {
            pos.x = self.width - size.x;
        }

        if pos.y + size.y > self.height {
            pos.y = 0.0;
        } else if pos.y < 0.0 {
            pos.y = self.height - size.y;
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(crate::consts::ARENA_WIDTH, crate::consts::ARENA_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_right_edge_resets_to_zero() {
        let arena = Arena::new(900.0, 900.0);
        let mut pos = Vec2::new(885.0, 100.0);
        arena.wrap(&mut pos, Vec2::new(20.0, 20.0));
        assert_eq!(pos, Vec2::new(0.0, 100.0));
    }

    #[test]
    fn test_wrap_left_edge_goes_flush_right() {
        let arena = Arena::new(900.0, 900.0);
        let mut pos = Vec2::new(-1.0, 100.0);
        arena.wrap(&mut pos, Vec2::new(20.0, 20.0));
        assert_eq!(pos, Vec2::new(880.0, 100.0));
    }

    #[test]
    fn test_wrap_vertical_edges() {
        let arena = Arena::new(600.0, 400.0);
        let mut below = Vec2::new(50.0, 390.0);
        arena.wrap(&mut below, Vec2::new(10.0, 20.0));
        assert_eq!(below.y, 0.0);

        let mut above = Vec2::new(50.0, -3.0);
        arena.wrap(&mut above, Vec2::new(10.0, 20.0));
        assert_eq!(above.y, 380.0);
    }

    #[test]
    fn test_wrap_leaves_interior_alone() {
        let arena = Arena::default();
        let mut pos = Vec2::new(400.0, 400.0);
        arena.wrap(&mut pos, Vec2::new(60.0, 60.0));
        assert_eq!(pos, Vec2::new(400.0, 400.0));
    }

    #[test]
    fn test_respawn_zone_is_centered() {
        let zone = Arena::new(900.0, 900.0).respawn_zone();
        assert_eq!(zone.min, Vec2::new(425.0, 425.0));
        assert_eq!(zone.size, Vec2::new(50.0, 50.0));
    }
}
