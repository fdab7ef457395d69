//! Shared moving-body capability
//!
//! Ship, Asteroid and Shot are the only implementers. Bodies never hold a
//! reference back to the session; the arena is passed into every advance.

use super::arena::Arena;
use super::shape::{Aabb, Shape};

/// A body that moves once per tick and occupies a shape
pub trait MovingBody {
    /// Advance one tick: move by velocity, then apply the body's edge policy
    fn advance(&mut self, arena: &Arena);

    /// Current collidable shape, positioned in arena space
    fn shape(&self) -> Shape;

    /// Bounding box of the collidable shape
    fn bounds(&self) -> Aabb {
        self.shape().bounds()
    }
}
