//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per tick, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies beyond the `Surface` seam

pub mod entity;
pub mod state;
pub mod tick;

pub use entity::{Aabb, Body};
pub use state::{Arena, Ball, BallStep, GameState, Paddle, Steer};
pub use tick::{TickInput, tick};
