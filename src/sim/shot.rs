//! Straight-line projectile

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::body::MovingBody;
use super::shape::{Aabb, Shape};
use crate::consts::{SHOT_SIZE, SHOT_SPEED};

/// Shot lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotState {
    Flying,
    /// Hit something
    Ended,
    /// Left the arena (shots never wrap)
    Expired,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shot {
    /// Top-left of the shot's bounding square
    pub pos: Vec2,
    pub vel: Vec2,
    pub state: ShotState,
}

impl Shot {
    /// Shot at `pos` travelling along `direction` (a unit vector) at shot speed
    pub fn new(pos: Vec2, direction: Vec2) -> Self {
        Self {
            pos,
            vel: direction * SHOT_SPEED,
            state: ShotState::Flying,
        }
    }

    /// Mark the shot spent after a hit
    pub fn end(&mut self) {
        self.state = ShotState::Ended;
    }

    #[inline]
    pub fn is_flying(&self) -> bool {
        self.state == ShotState::Flying
    }
}

impl MovingBody for Shot {
    fn advance(&mut self, arena: &Arena) {
        if !self.is_flying() {
            return;
        }
        self.pos += self.vel;
        let frame = Aabb::new(self.pos, Vec2::splat(SHOT_SIZE));
        if frame.is_outside(arena.width, arena.height) {
            self.state = ShotState::Expired;
        }
    }

    fn shape(&self) -> Shape {
        if !self.is_flying() {
            return Shape::Empty;
        }
        Shape::ellipse(self.pos, Vec2::splat(SHOT_SIZE))
    }
}
