//! Per-tick simulation
//!
//! Core game loop that advances the session by one animation frame.

use serde::{Deserialize, Serialize};

use super::asteroid::{Asteroid, all_destroyed};
use super::body::MovingBody;
use super::collision::first_hit;
use super::ship::Turn;
use super::state::{GamePhase, GameState};

/// Discrete player commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    RotateLeft,
    RotateRight,
    Thrust,
    Fire,
    Hyperspace,
}

/// Commands received since the previous tick, applied in order before it runs
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }
}

impl GameState {
    /// Apply a player command immediately. Ignored after game over and while
    /// the ship is waiting to respawn.
    pub fn apply_command(&mut self, command: Command) {
        if self.phase != GamePhase::Playing || self.ship.destroyed {
            return;
        }
        match command {
            Command::RotateLeft => self.ship.rotate(Turn::Left),
            Command::RotateRight => self.ship.rotate(Turn::Right),
            Command::Thrust => self.ship.thrust_forward(),
            Command::Fire => {
                // A new shot replaces whatever shot was being tracked
                self.shot = Some(self.ship.fire());
            }
            Command::Hyperspace => {
                let arena = self.arena;
                self.ship.hyperspace(&arena, &mut self.rng);
            }
        }
    }

    /// Replace the collection with a larger, faster wave if nothing in it is
    /// left intact. Returns the replaced collection when that happens.
    fn check_level_change(&mut self, current: &[Asteroid]) -> Option<Vec<Asteroid>> {
        if !all_destroyed(current) {
            return None;
        }
        self.level = self.settings.level_step.next(self.level);
        self.wave_size += 1;
        let mut wave = self.generate_wave();
        for asteroid in &mut wave {
            asteroid.change_speed(self.level as f32);
        }
        log::info!(
            "Wave cleared: level {}, next wave {} asteroids",
            self.level,
            wave.len()
        );
        Some(wave)
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    for &command in &input.commands {
        state.apply_command(command);
    }

    // Respawn check runs even when the game is over
    state.check_respawn();

    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;
    let arena = state.arena;

    // Move everything
    if !state.ship.destroyed {
        state.ship.advance(&arena);
    }
    for asteroid in &mut state.asteroids {
        asteroid.advance(&arena);
    }
    if let Some(shot) = &mut state.shot {
        shot.advance(&arena);
    }
    if !state.shot_active() {
        state.shot = None;
    }

    // The sweep runs over this tick's collection even if a wave clear swaps
    // in a new one halfway through.
    let mut asteroids = std::mem::take(&mut state.asteroids);

    // Ship vs asteroids: the first hit destroys the ship, later ones cannot
    // register because its shape is gone.
    if let Some(i) = first_hit(&state.ship, &asteroids) {
        state.lives = state.lives.saturating_sub(1);
        state.ship.destroy();
        log::debug!(
            "Ship hit by asteroid {} at tick {}, lives left {}",
            i,
            state.time_ticks,
            state.lives
        );
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            log::info!("Game over with score {}", state.score);
        } else {
            state.can_respawn = false;
        }
    }

    // Shot vs asteroids: at most one asteroid per shot
    let mut children = Vec::new();
    let mut next_wave = None;
    let shot_hit = state
        .shot
        .as_ref()
        .and_then(|shot| first_hit(shot, &asteroids));
    if let Some(i) = shot_hit {
        children = asteroids[i].destroy(&mut state.rng);
        if let Some(shot) = &mut state.shot {
            shot.end();
        }
        state.shot = None;
        state.score += asteroids[i].score();
        log::debug!(
            "Shot destroyed {:?} asteroid, score {}",
            asteroids[i].tier,
            state.score
        );
        // Children are not in the collection yet, so they never hold off a clear
        next_wave = state.check_level_change(&asteroids);
    }

    state.asteroids = next_wave.unwrap_or(asteroids);
    state.asteroids.extend(children);
}
