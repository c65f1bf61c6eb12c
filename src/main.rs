//! Wall Pong headless entry point
//!
//! Runs the simulation against a draw-discarding surface until the ball gets
//! past the paddle. Windowed play wires a real surface and input source into
//! `tick`; this binary is the process-level smoke driver for the core.

use std::time::{SystemTime, UNIX_EPOCH};

use wall_pong::sim::{GameState, TickInput, tick};
use wall_pong::surface::NullSurface;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Wall Pong (headless) starting with seed {seed}");

    let mut surface = NullSurface;
    let mut state = GameState::new(seed, &mut surface);
    let input = TickInput::default();

    let mut ticks = 0u64;
    while !state.is_over() && ticks < 100_000 {
        tick(&mut state, &input, &mut surface);
        ticks += 1;
    }

    if state.is_over() {
        log::info!("ball got past the paddle after {ticks} ticks");
    } else {
        log::warn!("tick budget exhausted without a miss");
    }
}
