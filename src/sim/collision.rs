//! Collision detection
//!
//! Bodies collide when the bounding boxes of their shapes overlap. The hull
//! triangle and the ellipses are never tested exactly; with a handful of
//! bodies per tick an exhaustive sweep is cheap enough.

use super::body::MovingBody;
use super::shape::Aabb;

/// Check whether two bodies collide
#[inline]
pub fn intersects<A, B>(a: &A, b: &B) -> bool
where
    A: MovingBody + ?Sized,
    B: MovingBody + ?Sized,
{
    a.bounds().intersects(&b.bounds())
}

/// Check whether a fixed region overlaps any of the bodies
pub fn region_overlaps_any<'a, B, I>(region: &Aabb, bodies: I) -> bool
where
    B: MovingBody + 'a,
    I: IntoIterator<Item = &'a B>,
{
    bodies.into_iter().any(|b| b.bounds().intersects(region))
}

/// Index of the first body in `bodies` that collides with `probe`
pub fn first_hit<P, B>(probe: &P, bodies: &[B]) -> Option<usize>
where
    P: MovingBody + ?Sized,
    B: MovingBody,
{
    let probe_bounds = probe.bounds();
    bodies
        .iter()
        .position(|b| b.bounds().intersects(&probe_bounds))
}
