//! Shape geometry for bodies
//!
//! Every body exposes a `Shape` positioned in arena space. Collision only ever
//! looks at the axis-aligned bounding box of a shape; renderers use the full
//! shape.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::rotate_point;

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    /// The degenerate box used by collapsed shapes
    pub const EMPTY: Aabb = Aabb {
        min: Vec2::ZERO,
        size: Vec2::ZERO,
    };

    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Box of `size` centred on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self::new(center - size / 2.0, size)
    }

    /// Smallest box containing all points
    pub fn from_points(points: &[Vec2]) -> Self {
        let Some(first) = points.first() else {
            return Self::EMPTY;
        };
        let (lo, hi) = points
            .iter()
            .fold((*first, *first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        Self::new(lo, hi - lo)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// A box with no area. Empty boxes never intersect anything.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Strict overlap test (touching edges do not count)
    pub fn intersects(&self, other: &Aabb) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let a_max = self.max();
        let b_max = other.max();
        other.min.x < a_max.x && other.min.y < a_max.y && b_max.x > self.min.x && b_max.y > self.min.y
    }

    /// Whether the box lies entirely outside `[0, width) x [0, height)`
    pub fn is_outside(&self, width: f32, height: f32) -> bool {
        let max = self.max();
        max.x < 0.0 || max.y < 0.0 || self.min.x > width || self.min.y > height
    }
}

/// A paintable, collidable region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Collapsed shape of a destroyed or spent body
    Empty,
    /// Closed polygon, vertices in arena space
    Polygon { points: Vec<Vec2> },
    /// Ellipse inscribed in `frame`
    Ellipse { frame: Aabb },
}

impl Shape {
    /// Polygon from local-space vertices rotated by `angle` and moved to `origin`
    pub fn transformed_polygon(local: &[Vec2], origin: Vec2, angle: f32) -> Self {
        Shape::Polygon {
            points: local.iter().map(|p| origin + rotate_point(*p, angle)).collect(),
        }
    }

    /// Ellipse filling a `size` box whose top-left corner is `min`
    pub fn ellipse(min: Vec2, size: Vec2) -> Self {
        Shape::Ellipse {
            frame: Aabb::new(min, size),
        }
    }

    /// Enclosing axis-aligned box
    pub fn bounds(&self) -> Aabb {
        match self {
            Shape::Empty => Aabb::EMPTY,
            Shape::Polygon { points } => Aabb::from_points(points),
            Shape::Ellipse { frame } => *frame,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bounds().is_empty()
    }
}
