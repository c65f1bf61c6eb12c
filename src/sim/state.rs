//! Entities and game state
//!
//! Arena geometry, the paddle, the ball and the collision resolution that
//! decides a tick's outcome. All state that exists for the lifetime of a run
//! lives here; `tick` drives it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::surface::{SCENE_COLOR, Surface, WALL_COLOR};

use super::entity::Body;

/// Static wall geometry: left, top and right walls of `wall` thickness
/// around a `width` x `height` playfield. The bottom plane is open; the
/// paddle defends it. Immutable once the game starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub wall: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            wall: WALL_THICKNESS,
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

impl Arena {
    /// Paint the scene background, then the three walls over it.
    pub fn paint<S: Surface>(&self, surface: &mut S) {
        surface.fill_rect(Vec2::ZERO, Vec2::new(self.width, self.height), SCENE_COLOR);
        surface.fill_rect(Vec2::ZERO, Vec2::new(self.wall, self.height), WALL_COLOR);
        surface.fill_rect(Vec2::ZERO, Vec2::new(self.width, self.wall), WALL_COLOR);
        surface.fill_rect(
            Vec2::new(self.width, 0.0),
            Vec2::new(self.width - self.wall, self.height),
            WALL_COLOR,
        );
    }
}

/// Discrete key-driven movement direction for the paddle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
}

impl Steer {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Steer::Left => -1.0,
            Steer::Right => 1.0,
        }
    }
}

/// The player's paddle, pinned to the open bottom plane.
///
/// Corner convention: `corners()[0]` is the bottom-left point (y = arena
/// height), `corners()[1]` the top-right; `corners()[1].y` is the plane the
/// ball must not pass. Both movement modes clamp one pixel clear of the
/// walls so the paddle is never drawn on a wall pixel.
#[derive(Debug, Clone)]
pub struct Paddle {
    body: Body,
    arena: Arena,
}

impl Paddle {
    /// Build the paddle centered on the bottom edge; issues its first draw.
    pub fn new<S: Surface>(arena: Arena, surface: &mut S) -> Self {
        let cx = arena.width / 2.0;
        let body = Body::new(
            Vec2::new(cx - PADDLE_WIDTH / 2.0, arena.height),
            Vec2::new(cx + PADDLE_WIDTH / 2.0, arena.height - PADDLE_HEIGHT),
            PADDLE_SPEED,
            WALL_COLOR,
            surface,
        );
        Self { body, arena }
    }

    /// Current corner points, copied out for the ball's collision test.
    #[inline]
    pub fn corners(&self) -> [Vec2; 2] {
        self.body.corners()
    }

    /// Absolute pointer-driven placement of the paddle center.
    pub fn move_to_pointer<S: Surface>(&mut self, x: f32, surface: &mut S) {
        let half = self.body.aabb.half_width();
        let wall = self.arena.wall;

        if x - half <= wall {
            self.body.set_position_x(wall + half + 1.0, surface);
        } else if x + half >= self.arena.width - wall {
            self.body
                .set_position_x(self.arena.width - wall - half - 1.0, surface);
        } else {
            self.body.set_position_x(x, surface);
        }
    }

    /// One key-driven step of `speed` pixels. A step that would cross a wall
    /// is shortened to land exactly one pixel clear of it, which collapses
    /// to a repaint-only zero delta once the paddle is already there.
    pub fn steer<S: Surface>(&mut self, dir: Steer, surface: &mut S) {
        let mut delta = Vec2::new(dir.sign() * self.body.speed(), 0.0);
        let [c0, c1] = self.body.corners();

        if c0.x + delta.x <= self.arena.wall {
            delta.x = self.arena.wall - c0.x + 1.0;
        } else if c1.x + delta.x >= self.arena.width - self.arena.wall {
            delta.x = self.arena.width - self.arena.wall - c1.x - 1.0;
        }
        self.body.update_position_by(delta, surface);
    }
}

/// Outcome of one ball advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallStep {
    /// Normal flight, wall rebounds included.
    InPlay,
    /// The paddle deflected the ball; its direction was re-randomized.
    PaddleHit,
    /// The ball passed the paddle plane unhit. Terminal.
    Missed,
}

/// The bouncing ball.
///
/// Corner convention is inverted on the y axis: `corners()[1]` sits above
/// `corners()[0]` (smaller y), so corner 1 leads toward the top wall and
/// corner 0 toward the paddle. The wall and paddle tests in [`Ball::advance`]
/// are written against that orientation.
#[derive(Debug, Clone)]
pub struct Ball {
    body: Body,
    /// Travel direction. Renormalized at the start of every advance, not
    /// between them; never zero.
    pub direction: Vec2,
    arena: Arena,
    rng: Pcg32,
}

impl Ball {
    /// Build the ball just above the paddle plane with a randomized upward
    /// direction; issues its first draw. `seed` drives this run's rebounds.
    pub fn new<S: Surface>(arena: Arena, seed: u64, surface: &mut S) -> Self {
        let cx = arena.width / 2.0;
        let bottom = arena.height - PADDLE_HEIGHT - 1.0;
        let body = Body::new(
            Vec2::new(cx - BALL_SIZE / 2.0, bottom),
            Vec2::new(cx + BALL_SIZE / 2.0, bottom - BALL_SIZE),
            BALL_SPEED,
            WALL_COLOR,
            surface,
        );
        let mut rng = Pcg32::seed_from_u64(seed);
        let direction = rebound_direction(&mut rng);
        Self {
            body,
            direction,
            arena,
            rng,
        }
    }

    #[inline]
    pub fn corners(&self) -> [Vec2; 2] {
        self.body.corners()
    }

    /// Advance one tick: resolve wall and paddle collisions against a
    /// tentative displacement, then apply whatever displacement survived.
    ///
    /// `paddle` is a copy of the paddle's corners for this tick.
    pub fn advance<S: Surface>(&mut self, paddle: [Vec2; 2], surface: &mut S) -> BallStep {
        self.direction = self.direction.normalize();
        let mut delta = self.direction * self.body.speed();

        let [c0, c1] = self.body.corners();
        // Tentative corners. All three wall tests compare against these, not
        // against each other's clamped results, so a corner hit flips both
        // axes in the same tick.
        let next = [c0 + delta, c1 + delta];
        let wall = self.arena.wall;

        // Top wall: the leading upper corner crosses; land one pixel below.
        if next[1].y <= wall {
            delta.y = wall - c1.y + 1.0;
            self.direction.y = -self.direction.y;
        }
        // Left wall.
        if next[0].x <= wall {
            delta.x = wall - c0.x + 1.0;
            self.direction.x = -self.direction.x;
        }
        // Right wall.
        if next[1].x >= self.arena.width - wall {
            delta.x = self.arena.width - wall - c1.x - 1.0;
            self.direction.x = -self.direction.x;
        }

        // Paddle plane: the lower corner has reached the paddle's far edge.
        // Intercept the travel line at that y to decide hit or miss.
        let mut step = BallStep::InPlay;
        let paddle_far_y = paddle[1].y;
        if next[0].y >= paddle_far_y {
            let tan_a = self.direction.x / self.direction.y;
            let next_x = (paddle_far_y - c0.y) * tan_a + c0.x;

            if next_x > paddle[0].x && next_x < paddle[1].x {
                // Stop one pixel short of the plane and rebound upward at a
                // fresh random angle.
                delta.y = paddle_far_y - c0.y - 1.0;
                self.direction = rebound_direction(&mut self.rng);
                step = BallStep::PaddleHit;
            } else {
                // Miss. The displacement is not zeroed: the ball travels one
                // more tick of motion past the plane before the loop stops.
                step = BallStep::Missed;
            }
        }

        self.body.update_position_by(delta, surface);
        step
    }
}

/// A fresh rebound direction: x uniform in [-REBOUND_SPREAD, REBOUND_SPREAD],
/// y straight up. Never zero, so normalization is always defined.
fn rebound_direction(rng: &mut Pcg32) -> Vec2 {
    Vec2::new(rng.random_range(-REBOUND_SPREAD..=REBOUND_SPREAD), -1.0)
}

/// Complete state for one run.
#[derive(Debug, Clone)]
pub struct GameState {
    pub arena: Arena,
    pub paddle: Paddle,
    pub ball: Ball,
    pub(super) game_over: bool,
}

impl GameState {
    /// Paint the arena and place the paddle and ball at their start
    /// positions. `seed` makes the run's rebound sequence reproducible.
    pub fn new<S: Surface>(seed: u64, surface: &mut S) -> Self {
        let arena = Arena::default();
        arena.paint(surface);
        let paddle = Paddle::new(arena, surface);
        let ball = Ball::new(arena, seed, surface);
        Self {
            arena,
            paddle,
            ball,
            game_over: false,
        }
    }

    /// True once the ball has passed the paddle plane unhit. Latches; the
    /// driving loop polls this between ticks.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.game_over
    }
}
