//! Asteroids headless runner
//!
//! Drives the simulation with a scripted autopilot instead of a keyboard and
//! logs frames instead of drawing them.
//!
//! Usage: `asteroids [settings.json] [legacy|whole]`. The optional second
//! argument overrides the level step from the settings file.

use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use asteroids_core::{LevelStep, Settings};
use asteroids_core::platform::{
    FrameOutcome, InputSource, RenderSink, RestartDecision, RestartPrompt, run_frame,
};
use asteroids_core::sim::{Command, GameState, Snapshot};

/// Random button-masher: turns, thrusts now and then, fires whenever it can
struct Autopilot {
    rng: Pcg32,
}

impl InputSource for Autopilot {
    fn poll(&mut self) -> Vec<Command> {
        let mut commands = Vec::new();
        match self.rng.random_range(0..10) {
            0..=2 => commands.push(Command::RotateLeft),
            3..=5 => commands.push(Command::RotateRight),
            6 => commands.push(Command::Thrust),
            _ => {}
        }
        if self.rng.random_bool(0.2) {
            commands.push(Command::Fire);
        }
        if self.rng.random_bool(0.002) {
            commands.push(Command::Hyperspace);
        }
        commands
    }
}

/// Logs a summary line every `every` ticks
struct LogSink {
    every: u64,
}

impl RenderSink for LogSink {
    fn present(&mut self, snapshot: &Snapshot) {
        if snapshot.tick % self.every == 0 {
            let intact = snapshot.asteroids.iter().filter(|a| !a.destroyed).count();
            log::info!(
                "tick {:>6} | score {:>6} | lives {} | level {} | asteroids {}/{}",
                snapshot.tick,
                snapshot.score,
                snapshot.lives,
                snapshot.level,
                intact,
                snapshot.asteroids.len()
            );
        }
    }
}

/// Says "play again" a fixed number of times, then quits
struct LimitedReplays {
    remaining: u32,
}

impl RestartPrompt for LimitedReplays {
    fn ask(&mut self, snapshot: &Snapshot) -> RestartDecision {
        log::info!("You've died! Final score {}", snapshot.score);
        if self.remaining == 0 {
            return RestartDecision::Quit;
        }
        self.remaining -= 1;
        RestartDecision::Restart
    }
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let mut settings = match args.next() {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    if let Some(step) = args.next() {
        match LevelStep::from_str(&step) {
            Some(level_step) => settings.level_step = level_step,
            None => log::warn!(
                "Unknown level step '{}', keeping {}",
                step,
                settings.level_step.as_str()
            ),
        }
    }
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!(
        "Asteroids (headless) starting, seed {}, level step {}",
        seed,
        settings.level_step.as_str()
    );

    let max_ticks = settings.max_ticks;
    let mut input = Autopilot {
        rng: Pcg32::seed_from_u64(seed ^ 0x9e37_79b9_7f4a_7c15),
    };
    let mut sink = LogSink { every: 600 };
    let mut prompt = LimitedReplays {
        remaining: settings.max_restarts,
    };
    let mut state = GameState::with_settings(settings, seed);

    for _ in 0..max_ticks {
        if run_frame(&mut state, &mut input, &mut sink, &mut prompt) == FrameOutcome::Quit {
            break;
        }
    }

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Could not serialize final snapshot: {}", e),
    }
}
