//! Asteroids: size tiers, spawning, splitting and the destruction blink

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::body::MovingBody;
use super::shape::Shape;
use crate::consts::*;

/// Size classification, derived from height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Small,
    Medium,
    Large,
}

impl Tier {
    pub fn from_height(height: f32) -> Self {
        if height < MEDIUM_MIN_HEIGHT {
            Tier::Small
        } else if height < LARGE_MIN_HEIGHT {
            Tier::Medium
        } else {
            Tier::Large
        }
    }

    /// Points for shooting an asteroid of this tier (smaller is worth more)
    pub fn score(self) -> u64 {
        match self {
            Tier::Small => 100,
            Tier::Medium => 50,
            Tier::Large => 20,
        }
    }

    /// Tier of the children produced when this tier is destroyed
    pub fn split(self) -> Option<Tier> {
        match self {
            Tier::Large => Some(Tier::Medium),
            Tier::Medium => Some(Tier::Small),
            Tier::Small => None,
        }
    }

    /// Half-open height range used when generating an asteroid of this tier
    pub fn height_range(self) -> (u32, u32) {
        match self {
            Tier::Small => ASTEROID_SMALL_HEIGHT,
            Tier::Medium => ASTEROID_MEDIUM_HEIGHT,
            Tier::Large => ASTEROID_LARGE_HEIGHT,
        }
    }
}

/// Lifecycle of an asteroid. `frame` counts advances since destruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsteroidPhase {
    Intact,
    /// Destroyed, currently drawn
    BlinkOn { frame: u32 },
    /// Destroyed, currently hidden
    BlinkOff { frame: u32 },
    /// Blink finished; permanently invisible
    Gone,
}

impl AsteroidPhase {
    /// Phase after consuming blink frame `frame`
    fn after_frame(frame: u32) -> Self {
        let visible = frame < BLINK_FIRST_END || (frame > BLINK_SECOND_START && frame < BLINK_END);
        if visible {
            AsteroidPhase::BlinkOn { frame: frame + 1 }
        } else if frame < BLINK_END {
            AsteroidPhase::BlinkOff { frame: frame + 1 }
        } else {
            AsteroidPhase::Gone
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    /// Top-left of the bounding box
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    pub tier: Tier,
    pub phase: AsteroidPhase,
}

impl Asteroid {
    /// Intact asteroid with explicit geometry; tier follows the height
    pub fn new(pos: Vec2, vel: Vec2, width: f32, height: f32) -> Self {
        Self {
            pos,
            vel,
            width: width.max(1.0),
            height,
            tier: Tier::from_height(height),
            phase: AsteroidPhase::Intact,
        }
    }

    /// Random asteroid for a new wave, placed in a band that keeps it off the
    /// ship's spawn point at the arena centre
    pub fn spawn<R: Rng>(arena: &Arena, rng: &mut R) -> Self {
        let (lo, hi) = ASTEROID_SPAWN_HEIGHT;
        let height = rng.random_range(lo..hi) as f32;
        let width = jittered_width(height, rng);

        let center = arena.center();
        let x = if rng.random_bool(0.5) {
            band(rng, -height, center.x - SPAWN_CLEARANCE - height)
        } else {
            band(rng, center.x + SPAWN_CLEARANCE + height, 2.0 * center.x + height)
        };
        let y = if rng.random_bool(0.5) {
            band(rng, -width, center.y - SPAWN_CLEARANCE - width)
        } else {
            band(rng, center.y + SPAWN_CLEARANCE + width, 2.0 * center.y + width)
        };

        Self::new(Vec2::new(x, y), random_velocity(rng), width, height)
    }

    /// Child asteroid of `tier` created at a parent's position
    pub fn split_child<R: Rng>(tier: Tier, pos: Vec2, rng: &mut R) -> Self {
        let (lo, hi) = tier.height_range();
        let height = rng.random_range(lo..hi) as f32;
        let width = jittered_width(height, rng);
        let mut child = Self::new(pos, random_velocity(rng), width, height);
        // Keep the requested tier even if a custom range strays over a threshold
        child.tier = tier;
        child
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.phase != AsteroidPhase::Intact
    }

    /// Whether a renderer should draw this asteroid this frame
    pub fn is_visible(&self) -> bool {
        matches!(
            self.phase,
            AsteroidPhase::Intact | AsteroidPhase::BlinkOn { .. }
        )
    }

    pub fn score(&self) -> u64 {
        self.tier.score()
    }

    /// Destroy the asteroid and return its children: two of the next tier
    /// down at this position, or none for a small one. Destroying an already
    /// destroyed asteroid yields nothing.
    pub fn destroy<R: Rng>(&mut self, rng: &mut R) -> Vec<Asteroid> {
        if self.is_destroyed() {
            return Vec::new();
        }
        self.phase = AsteroidPhase::BlinkOn { frame: 0 };
        match self.tier.split() {
            Some(child_tier) => (0..2)
                .map(|_| Asteroid::split_child(child_tier, self.pos, rng))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Add `delta` to the speed on both axes, keeping the direction
    pub fn change_speed(&mut self, delta: f32) {
        self.vel.x += delta * self.vel.x.signum();
        self.vel.y += delta * self.vel.y.signum();
    }

    /// Shape to draw: follows the blink, unlike the collision shape
    pub fn paint_shape(&self) -> Shape {
        if self.is_visible() {
            Shape::ellipse(self.pos, self.size())
        } else {
            Shape::Empty
        }
    }
}

impl MovingBody for Asteroid {
    fn advance(&mut self, arena: &Arena) {
        match self.phase {
            AsteroidPhase::Intact => {
                self.pos += self.vel;
                let size = self.size();
                arena.wrap(&mut self.pos, size);
            }
            AsteroidPhase::BlinkOn { frame } | AsteroidPhase::BlinkOff { frame } => {
                self.phase = AsteroidPhase::after_frame(frame);
            }
            AsteroidPhase::Gone => {}
        }
    }

    /// Destroyed asteroids no longer collide
    fn shape(&self) -> Shape {
        if self.is_destroyed() {
            Shape::Empty
        } else {
            Shape::ellipse(self.pos, self.size())
        }
    }
}

/// True when nothing in `asteroids` is left intact
pub fn all_destroyed(asteroids: &[Asteroid]) -> bool {
    asteroids.iter().all(|a| a.is_destroyed())
}

/// Always strictly narrower than tall
fn jittered_width<R: Rng>(height: f32, rng: &mut R) -> f32 {
    let jitter = rng.random_range(1..ASTEROID_WIDTH_JITTER) as f32;
    (height - jitter).max(1.0)
}

/// Uniform pick from [lo, hi), or `lo` when the band is empty
fn band<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.random_range(lo..hi).floor()
    } else {
        lo
    }
}

/// 1..=3 pixels per tick on each axis with an independent random sign
fn random_velocity<R: Rng>(rng: &mut R) -> Vec2 {
    let mut axis = || {
        let speed = rng.random_range(ASTEROID_MIN_SPEED..=ASTEROID_MAX_SPEED) as f32;
        if rng.random_bool(0.5) { speed } else { -speed }
    };
    let x = axis();
    let y = axis();
    Vec2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn large_at(pos: Vec2) -> Asteroid {
        Asteroid::new(pos, Vec2::new(1.0, 1.0), 62.0, 70.0)
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(Tier::from_height(39.0), Tier::Small);
        assert_eq!(Tier::from_height(40.0), Tier::Medium);
        assert_eq!(Tier::from_height(59.0), Tier::Medium);
        assert_eq!(Tier::from_height(60.0), Tier::Large);
    }

    #[test]
    fn test_tier_scores() {
        assert_eq!(Tier::Large.score(), 20);
        assert_eq!(Tier::Medium.score(), 50);
        assert_eq!(Tier::Small.score(), 100);
    }

    #[test]
    fn test_large_splits_into_two_medium_at_parent_position() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut rock = large_at(Vec2::new(100.0, 100.0));
        let children = rock.destroy(&mut rng);
        assert!(rock.is_destroyed());
        assert_eq!(children.len(), 2);
        for child in &children {
            assert_eq!(child.tier, Tier::Medium);
            assert_eq!(child.pos, Vec2::new(100.0, 100.0));
            assert!(!child.is_destroyed());
        }
    }

    #[test]
    fn test_medium_splits_into_small_and_small_into_nothing() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut medium = Asteroid::split_child(Tier::Medium, Vec2::new(5.0, 5.0), &mut rng);
        let children = medium.destroy(&mut rng);
        assert_eq!(children.len(), 2);
        assert!(children.iter().all(|c| c.tier == Tier::Small));

        let mut small = children[0].clone();
        assert!(small.destroy(&mut rng).is_empty());
    }

    #[test]
    fn test_destroy_twice_yields_nothing() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut rock = large_at(Vec2::ZERO);
        assert_eq!(rock.destroy(&mut rng).len(), 2);
        assert!(rock.destroy(&mut rng).is_empty());
    }

    #[test]
    fn test_blink_sequence() {
        let arena = Arena::default();
        let mut rng = Pcg32::seed_from_u64(4);
        let mut rock = large_at(Vec2::new(100.0, 100.0));
        rock.destroy(&mut rng);
        assert!(rock.is_visible());
        assert!(rock.shape().is_empty());

        let mut visible = Vec::new();
        for _ in 0..20 {
            rock.advance(&arena);
            visible.push(rock.is_visible());
        }
        // Frames 0..5 shown, 5..=10 hidden, 11..15 shown, then gone
        let expected: Vec<bool> = (0..20u32)
            .map(|c| c < 5 || (c > 10 && c < 15))
            .collect();
        assert_eq!(visible, expected);
        assert_eq!(rock.phase, AsteroidPhase::Gone);
        // Destroyed asteroids do not drift
        assert_eq!(rock.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_paint_shape_follows_blink() {
        let arena = Arena::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let mut rock = large_at(Vec2::new(10.0, 10.0));
        rock.destroy(&mut rng);
        for _ in 0..6 {
            rock.advance(&arena);
        }
        assert!(matches!(rock.phase, AsteroidPhase::BlinkOff { .. }));
        assert!(rock.paint_shape().is_empty());
    }

    #[test]
    fn test_change_speed_keeps_direction() {
        let mut rock = Asteroid::new(Vec2::ZERO, Vec2::new(-2.0, 3.0), 30.0, 35.0);
        rock.change_speed(2.0);
        assert_eq!(rock.vel, Vec2::new(-4.0, 5.0));
        rock.change_speed(0.0);
        assert_eq!(rock.vel, Vec2::new(-4.0, 5.0));
    }

    #[test]
    fn test_spawn_avoids_ship_spawn_point() {
        let arena = Arena::default();
        let mut rng = Pcg32::seed_from_u64(6);
        let center = arena.center();
        for _ in 0..500 {
            let rock = Asteroid::spawn(&arena, &mut rng);
            let b = rock.bounds();
            let covers_center = b.min.x <= center.x
                && center.x <= b.max().x
                && b.min.y <= center.y
                && center.y <= b.max().y;
            assert!(!covers_center, "spawned over centre: {:?}", b);
        }
    }

    #[test]
    fn test_spawn_velocity_in_range() {
        let arena = Arena::default();
        let mut rng = Pcg32::seed_from_u64(8);
        for _ in 0..200 {
            let rock = Asteroid::spawn(&arena, &mut rng);
            for v in [rock.vel.x, rock.vel.y] {
                assert!((1.0..=3.0).contains(&v.abs()));
            }
        }
    }

    #[test]
    fn test_width_strictly_below_height() {
        let arena = Arena::default();
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..1000 {
            let rock = Asteroid::spawn(&arena, &mut rng);
            assert!(rock.width > 0.0 && rock.width < rock.height, "{:?}", rock);
        }
        for tier in [Tier::Small, Tier::Medium, Tier::Large] {
            for _ in 0..200 {
                let child = Asteroid::split_child(tier, Vec2::ZERO, &mut rng);
                assert!(child.width < child.height);
            }
        }
    }

    #[test]
    fn test_advance_moves_then_wraps() {
        let arena = Arena::default();
        let mut rock = Asteroid::new(Vec2::new(100.0, 100.0), Vec2::new(3.0, -2.0), 30.0, 35.0);
        rock.advance(&arena);
        assert_eq!(rock.pos, Vec2::new(103.0, 98.0));

        let mut rock = Asteroid::new(Vec2::new(868.0, 100.0), Vec2::new(3.0, 0.0), 30.0, 35.0);
        rock.advance(&arena);
        assert_eq!(rock.pos, Vec2::new(0.0, 100.0));
    }

    #[test]
    fn test_all_destroyed() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut rocks = vec![large_at(Vec2::ZERO), large_at(Vec2::new(200.0, 0.0))];
        assert!(!all_destroyed(&rocks));
        rocks[0].destroy(&mut rng);
        assert!(!all_destroyed(&rocks));
        rocks[1].destroy(&mut rng);
        assert!(all_destroyed(&rocks));
        assert!(all_destroyed(&[]));
    }
}
