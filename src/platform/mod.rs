//! Platform abstraction layer
//!
//! The simulation never draws, reads keys or shows dialogs itself. A front end
//! provides:
//! - a render sink that consumes one snapshot per frame
//! - an input source that reports commands since the last frame
//! - a restart prompt shown once the game is over
//!
//! `run_frame` wires them around a single tick.

use crate::sim::{Command, GameState, Snapshot, TickInput, tick};

/// Consumes the frame snapshot; must not feed anything back into the game
pub trait RenderSink {
    fn present(&mut self, snapshot: &Snapshot);
}

/// Delivers player commands gathered between frames
pub trait InputSource {
    fn poll(&mut self) -> Vec<Command>;
}

/// Answer to the "play again?" question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartDecision {
    Restart,
    Quit,
}

/// Asked once per frame while the game is over
pub trait RestartPrompt {
    fn ask(&mut self, snapshot: &Snapshot) -> RestartDecision;
}

/// What the outer loop should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// Run one frame: apply input, tick, present, and consult the prompt if the
/// game is over. Process exit is left to the caller.
pub fn run_frame<I, R, P>(
    state: &mut GameState,
    input: &mut I,
    sink: &mut R,
    prompt: &mut P,
) -> FrameOutcome
where
    I: InputSource + ?Sized,
    R: RenderSink + ?Sized,
    P: RestartPrompt + ?Sized,
{
    let input = TickInput::new(input.poll());
    tick(state, &input);

    let snapshot = state.snapshot();
    sink.present(&snapshot);

    if state.is_game_over() {
        match prompt.ask(&snapshot) {
            RestartDecision::Restart => state.restart(),
            RestartDecision::Quit => return FrameOutcome::Quit,
        }
    }
    FrameOutcome::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Asteroid, GamePhase};
    use glam::Vec2;

    struct Scripted(Vec<Vec<Command>>);

    impl InputSource for Scripted {
        fn poll(&mut self) -> Vec<Command> {
            if self.0.is_empty() {
                Vec::new()
            } else {
                self.0.remove(0)
            }
        }
    }

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Snapshot>,
    }

    impl RenderSink for Recorder {
        fn present(&mut self, snapshot: &Snapshot) {
            self.frames.push(snapshot.clone());
        }
    }

    struct Always(RestartDecision, u32);

    impl RestartPrompt for Always {
        fn ask(&mut self, _snapshot: &Snapshot) -> RestartDecision {
            self.1 += 1;
            self.0
        }
    }

    fn doomed_state() -> GameState {
        let mut state = GameState::new(11);
        state.lives = 1;
        state.asteroids = vec![Asteroid::new(
            Vec2::new(430.0, 430.0),
            Vec2::ZERO,
            45.0,
            50.0,
        )];
        state
    }

    #[test]
    fn test_run_frame_renders_every_frame() {
        let mut state = GameState::new(3);
        let mut input = Scripted(vec![vec![Command::RotateRight], vec![Command::Fire]]);
        let mut sink = Recorder::default();
        let mut prompt = Always(RestartDecision::Quit, 0);
        for _ in 0..3 {
            assert_eq!(
                run_frame(&mut state, &mut input, &mut sink, &mut prompt),
                FrameOutcome::Continue
            );
        }
        assert_eq!(sink.frames.len(), 3);
        assert_eq!(sink.frames[2].tick, 3);
        assert_eq!(prompt.1, 0);
    }

    #[test]
    fn test_prompt_quit_on_game_over() {
        let mut state = doomed_state();
        let mut input = Scripted(Vec::new());
        let mut sink = Recorder::default();
        let mut prompt = Always(RestartDecision::Quit, 0);
        let outcome = run_frame(&mut state, &mut input, &mut sink, &mut prompt);
        assert_eq!(outcome, FrameOutcome::Quit);
        assert_eq!(prompt.1, 1);
        assert_eq!(sink.frames[0].phase, GamePhase::GameOver);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_prompt_restart_on_game_over() {
        let mut state = doomed_state();
        let mut input = Scripted(Vec::new());
        let mut sink = Recorder::default();
        let mut prompt = Always(RestartDecision::Restart, 0);
        let outcome = run_frame(&mut state, &mut input, &mut sink, &mut prompt);
        assert_eq!(outcome, FrameOutcome::Continue);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives, 3);
        assert_eq!(state.asteroids.len(), 5);
    }
}
