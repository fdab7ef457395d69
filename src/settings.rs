//! Session settings
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! classic game's values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How the level counter moves when a wave is cleared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LevelStep {
    /// Half a level per clear, truncated into the integer counter. The level
    /// therefore never rises and new waves get no speed bonus; this is how
    /// the classic game actually plays.
    #[default]
    Legacy,
    /// One full level per clear
    Whole,
}

impl LevelStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            LevelStep::Legacy => "Legacy",
            LevelStep::Whole => "Whole",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "legacy" | "half" => Some(LevelStep::Legacy),
            "whole" | "full" => Some(LevelStep::Whole),
            _ => None,
        }
    }

    /// Level after clearing a wave at `level`
    pub fn next(self, level: u32) -> u32 {
        match self {
            LevelStep::Legacy => (level as f64 + 0.5) as u32,
            LevelStep::Whole => level.saturating_add(1),
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Rules ===
    pub starting_lives: u8,
    /// Asteroids in the first wave; each cleared wave adds one
    pub initial_asteroids: usize,
    pub level_step: LevelStep,

    // === Run ===
    /// Fixed seed for reproducible runs (random when absent)
    pub seed: Option<u64>,
    /// Tick limit for the headless runner
    pub max_ticks: u64,
    /// How many times the headless runner answers "play again"
    pub max_restarts: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            starting_lives: STARTING_LIVES,
            initial_asteroids: INITIAL_ASTEROIDS,
            level_step: LevelStep::Legacy,

            seed: None,
            max_ticks: 10_000,
            max_restarts: 1,
        }
    }
}

/// Smallest arena side that still leaves room for the spawn bands
const MIN_ARENA_SIDE: f32 = 200.0;

impl Settings {
    /// Parse settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file, falling back to defaults on any error
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings.sanitized()
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values the simulation cannot work with
    pub fn sanitized(mut self) -> Self {
        if !(self.arena_width >= MIN_ARENA_SIDE) {
            log::warn!("arena_width {} too small, using {}", self.arena_width, MIN_ARENA_SIDE);
            self.arena_width = MIN_ARENA_SIDE;
        }
        if !(self.arena_height >= MIN_ARENA_SIDE) {
            log::warn!("arena_height {} too small, using {}", self.arena_height, MIN_ARENA_SIDE);
            self.arena_height = MIN_ARENA_SIDE;
        }
        if self.starting_lives == 0 {
            log::warn!("starting_lives must be at least 1");
            self.starting_lives = 1;
        }
        if self.initial_asteroids == 0 {
            log::warn!("initial_asteroids must be at least 1");
            self.initial_asteroids = 1;
        }
        self
    }
}
