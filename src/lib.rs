//! Wall Pong - a walled-arena paddle and ball arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collision resolution, game state)
//! - `surface`: Render-surface seam the simulation draws through
//!
//! Rendering, windowing and input sources are external collaborators: the
//! embedding application feeds a [`sim::TickInput`] into [`sim::tick`] once
//! per loop iteration and paints whatever the simulation requests through
//! its [`surface::Surface`].

pub mod sim;
pub mod surface;

pub use sim::{Ball, BallStep, GameState, Paddle, Steer, TickInput, tick};
pub use surface::{Color, NullSurface, Surface};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions in pixels
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    /// Thickness of the left, top and right walls
    pub const WALL_THICKNESS: f32 = 30.0;

    /// Paddle defaults - the paddle defends the open bottom plane
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 25.0;
    pub const PADDLE_SPEED: f32 = 20.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED: f32 = 30.0;

    /// Horizontal spread of a randomized rebound: x is drawn uniformly from
    /// [-REBOUND_SPREAD, REBOUND_SPREAD] with y fixed at -1 (straight up)
    pub const REBOUND_SPREAD: f32 = 0.6;
}
