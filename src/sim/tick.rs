//! Per-tick orchestration
//!
//! One `tick` call per loop iteration: paddle input first, then the ball,
//! then the game-over latch. The embedding loop owns frame pacing and quit
//! handling and polls [`GameState::is_over`] between ticks.

use crate::surface::Surface;

use super::state::{BallStep, GameState, Steer};

/// Input commands for a single tick.
///
/// At most one absolute pointer target and one discrete step, mirroring one
/// input poll per loop iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Pointer x-coordinate for absolute paddle placement.
    pub pointer_x: Option<f32>,
    /// Key-driven paddle step.
    pub steer: Option<Steer>,
}

/// Advance the game by one tick. Does nothing once the game is over, so the
/// game-over flag transitions from false to true exactly once per run.
pub fn tick<S: Surface>(state: &mut GameState, input: &TickInput, surface: &mut S) {
    if state.is_over() {
        return;
    }

    if let Some(x) = input.pointer_x {
        state.paddle.move_to_pointer(x, surface);
    }
    if let Some(dir) = input.steer {
        state.paddle.steer(dir, surface);
    }

    let paddle = state.paddle.corners();
    if state.ball.advance(paddle, surface) == BallStep::Missed {
        state.game_over = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::NullSurface;
    use glam::Vec2;

    #[test]
    fn test_tick_applies_pointer_before_the_ball_moves() {
        let mut surface = NullSurface;
        let mut state = GameState::new(123, &mut surface);
        let input = TickInput {
            pointer_x: Some(0.0),
            ..Default::default()
        };

        tick(&mut state, &input, &mut surface);

        // Pointer clamped hard left; the ball advanced without ending the run.
        assert_eq!(state.paddle.corners()[0].x, 31.0);
        assert!(!state.is_over());
    }

    #[test]
    fn test_tick_applies_steer_step() {
        let mut surface = NullSurface;
        let mut state = GameState::new(123, &mut surface);
        let input = TickInput {
            steer: Some(Steer::Right),
            ..Default::default()
        };

        tick(&mut state, &input, &mut surface);

        assert_eq!(state.paddle.corners()[0].x, 360.0);
    }

    #[test]
    fn test_miss_latches_game_over_and_freezes_the_ball() {
        let mut surface = NullSurface;
        let mut state = GameState::new(123, &mut surface);
        // Send the ball straight down while the paddle hides at the far
        // left: a guaranteed first-tick miss.
        state.ball.direction = Vec2::new(0.0, 1.0);
        let input = TickInput {
            pointer_x: Some(0.0),
            ..Default::default()
        };

        tick(&mut state, &input, &mut surface);
        assert!(state.is_over());

        let frozen = state.ball.corners();
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), &mut surface);
        }
        assert!(state.is_over());
        assert_eq!(state.ball.corners(), frozen);
    }

    #[test]
    fn test_unattended_game_eventually_ends() {
        let mut surface = NullSurface;
        let mut state = GameState::new(2024, &mut surface);
        let input = TickInput::default();

        let mut ticks = 0u32;
        while !state.is_over() && ticks < 50_000 {
            tick(&mut state, &input, &mut surface);
            ticks += 1;
        }

        assert!(state.is_over(), "no miss within {ticks} ticks");
    }
}
