//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no wall-clock time
//! - Seeded RNG only, owned by the session
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies

pub mod arena;
pub mod asteroid;
pub mod body;
pub mod collision;
pub mod shape;
pub mod ship;
pub mod shot;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use arena::Arena;
pub use asteroid::{Asteroid, AsteroidPhase, Tier};
pub use body::MovingBody;
pub use collision::{first_hit, intersects, region_overlaps_any};
pub use shape::{Aabb, Shape};
pub use ship::{Ship, Turn};
pub use shot::{Shot, ShotState};
pub use snapshot::{AsteroidView, ShipView, ShotView, Snapshot};
pub use state::{GamePhase, GameState};
pub use tick::{Command, TickInput, tick};
