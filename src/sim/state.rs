//! Game session state
//!
//! Owns every entity plus score, lives and level. All randomness flows from
//! the single seeded generator held here, so a seed and a command sequence
//! fully determine a run.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::asteroid::Asteroid;
use super::collision::region_overlaps_any;
use super::ship::Ship;
use super::shot::Shot;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Out of lives; frozen until restarted
    GameOver,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session-scoped generator; every random draw goes through it
    pub rng: Pcg32,
    pub settings: Settings,
    pub arena: Arena,
    /// Score (never decreases within a run)
    pub score: u64,
    /// Player lives
    pub lives: u8,
    /// Difficulty level, also the speed bonus given to new waves
    pub level: u32,
    /// Number of asteroids in the next generated wave
    pub wave_size: usize,
    pub ship: Ship,
    /// Asteroid collection; destroyed asteroids stay until the next wave
    pub asteroids: Vec<Asteroid>,
    /// The single tracked shot, if one is in flight
    pub shot: Option<Shot>,
    pub phase: GamePhase,
    /// Whether the respawn zone was clear at the last check
    pub can_respawn: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a session with default settings
    pub fn new(seed: u64) -> Self {
        Self::with_settings(Settings::default(), seed)
    }

    /// Create a session from explicit settings
    pub fn with_settings(settings: Settings, seed: u64) -> Self {
        let settings = settings.sanitized();
        let arena = Arena::new(settings.arena_width, settings.arena_height);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            arena,
            score: 0,
            lives: settings.starting_lives,
            level: 0,
            wave_size: settings.initial_asteroids,
            ship: Ship::new(&arena),
            asteroids: Vec::new(),
            shot: None,
            phase: GamePhase::Playing,
            can_respawn: true,
            time_ticks: 0,
            settings,
        };
        state.spawn_wave();
        log::info!(
            "Session started: seed={}, arena={}x{}, asteroids={}",
            seed,
            arena.width,
            arena.height,
            state.asteroids.len()
        );
        state
    }

    /// Reset to the initial session state. The generator keeps running so a
    /// restarted game gets a different field.
    pub fn restart(&mut self) {
        self.ship = Ship::new(&self.arena);
        self.wave_size = self.settings.initial_asteroids;
        self.score = 0;
        self.lives = self.settings.starting_lives;
        self.level = 0;
        self.shot = None;
        self.can_respawn = true;
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.spawn_wave();
        log::info!("Session restarted with {} asteroids", self.asteroids.len());
    }

    /// Replace the asteroid collection with a fresh wave of `wave_size`
    pub fn spawn_wave(&mut self) {
        self.asteroids = self.generate_wave();
    }

    /// Generate `wave_size` new asteroids without touching the collection
    pub fn generate_wave(&mut self) -> Vec<Asteroid> {
        let arena = self.arena;
        let count = self.wave_size.max(1);
        let wave: Vec<Asteroid> = (0..count)
            .map(|_| Asteroid::spawn(&arena, &mut self.rng))
            .collect();
        log::debug!("Generated wave of {} asteroids", wave.len());
        wave
    }

    /// Scan the respawn zone and bring the ship back if it is clear.
    /// Does nothing to a live ship.
    pub fn check_respawn(&mut self) {
        let zone = self.arena.respawn_zone();
        self.can_respawn = !region_overlaps_any(&zone, &self.asteroids);
        if self.can_respawn && self.ship.destroyed {
            self.ship = Ship::new(&self.arena);
            log::debug!("Ship respawned at tick {}", self.time_ticks);
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Whether a tracked shot is still in flight
    pub fn shot_active(&self) -> bool {
        self.shot.as_ref().is_some_and(|s| s.is_flying())
    }
}
