//! Render-ready view of a session
//!
//! Renderers only ever see this; it borrows nothing from the live state.

use serde::{Deserialize, Serialize};

use super::asteroid::Tier;
use super::body::MovingBody;
use super::shape::Shape;
use super::state::{GamePhase, GameState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub shape: Shape,
    pub alive: bool,
    /// Heading reduced to [-π, π)
    pub heading: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidView {
    pub shape: Shape,
    pub tier: Tier,
    pub visible: bool,
    pub destroyed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotView {
    pub shape: Shape,
    pub active: bool,
}

/// Everything a renderer needs for one frame, in paint order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ship: ShipView,
    pub asteroids: Vec<AsteroidView>,
    pub shot: Option<ShotView>,
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    pub phase: GamePhase,
    pub tick: u64,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ship: ShipView {
                shape: self.ship.shape(),
                alive: !self.ship.destroyed,
                heading: self.ship.render_heading(),
            },
            asteroids: self
                .asteroids
                .iter()
                .map(|a| AsteroidView {
                    shape: a.paint_shape(),
                    tier: a.tier,
                    visible: a.is_visible(),
                    destroyed: a.is_destroyed(),
                })
                .collect(),
            shot: self.shot.as_ref().map(|s| ShotView {
                shape: s.shape(),
                active: s.is_flying(),
            }),
            score: self.score,
            lives: self.lives,
            level: self.level,
            phase: self.phase,
            tick: self.time_ticks,
        }
    }
}
