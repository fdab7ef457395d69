//! The player's ship

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::body::MovingBody;
use super::shape::Shape;
use super::shot::Shot;
use crate::consts::*;
use crate::{heading_to_unit, normalize_angle};

/// Hull triangle in local space, nose pointing up at heading 0
pub const SHIP_HULL: [Vec2; 3] = [
    Vec2::new(10.0, 20.0),
    Vec2::new(0.0, -20.0),
    Vec2::new(-10.0, 20.0),
];

/// Rotation direction for a turn command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    /// Counter-clockwise on screen
    Left,
    /// Clockwise on screen
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    /// Hull anchor (triangle origin)
    pub pos: Vec2,
    /// Always zero; thrust nudges position directly
    pub vel: Vec2,
    /// Heading in radians, free-running (never reduced in state)
    pub heading: f32,
    /// Set on collision; cleared only by recreating the ship
    pub destroyed: bool,
}

impl Ship {
    /// Fresh ship at the arena centre, nose up
    pub fn new(arena: &Arena) -> Self {
        Self {
            pos: arena.center(),
            vel: Vec2::ZERO,
            heading: 0.0,
            destroyed: false,
        }
    }

    /// Unit vector the nose points along, derived from the current heading
    #[inline]
    pub fn forward(&self) -> Vec2 {
        heading_to_unit(self.heading)
    }

    /// Heading reduced to [-π, π) for renderers
    pub fn render_heading(&self) -> f32 {
        normalize_angle(self.heading)
    }

    /// Nudge the ship along its heading
    pub fn thrust_forward(&mut self) {
        self.pos += self.forward() * SHIP_THRUST_STEP;
    }

    pub fn rotate(&mut self, turn: Turn) {
        match turn {
            Turn::Right => self.heading += SHIP_TURN_STEP,
            Turn::Left => self.heading -= SHIP_TURN_STEP,
        }
    }

    /// Spawn a shot from the ship's position along its heading
    pub fn fire(&self) -> Shot {
        Shot::new(self.pos, self.forward())
    }

    /// Jump to a random point; the landing spot is not checked for asteroids
    pub fn hyperspace<R: Rng>(&mut self, arena: &Arena, rng: &mut R) {
        let max_x = (arena.width - SHIP_WIDTH).max(1.0);
        let max_y = (arena.height - SHIP_HEIGHT).max(1.0);
        self.pos = Vec2::new(rng.random_range(0.0..max_x), rng.random_range(0.0..max_y));
    }

    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    #[inline]
    pub fn size() -> Vec2 {
        Vec2::new(SHIP_WIDTH, SHIP_HEIGHT)
    }
}

impl MovingBody for Ship {
    fn advance(&mut self, arena: &Arena) {
        if self.destroyed {
            return;
        }
        self.pos += self.vel;
        arena.wrap(&mut self.pos, Self::size());
    }

    fn shape(&self) -> Shape {
        if self.destroyed {
            return Shape::Empty;
        }
        Shape::transformed_polygon(&SHIP_HULL, self.pos, self.heading)
    }
}
