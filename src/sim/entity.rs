//! Rectangle entity model
//!
//! Every movable thing in the arena is an axis-aligned rectangle held by a
//! [`Body`]: two corner points, a per-tick speed and a fill color. Corner
//! order is an entity convention, not an invariant - the ball keeps its
//! second corner numerically above its first (y grows downward), the paddle
//! the opposite - and the collision code depends on those conventions, so
//! [`Aabb`] never reorders anything.

use glam::Vec2;

use crate::surface::{Color, SCENE_COLOR, Surface};

/// An axis-aligned rectangle stored as two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub corners: [Vec2; 2],
}

impl Aabb {
    pub fn new(c0: Vec2, c1: Vec2) -> Self {
        Self { corners: [c0, c1] }
    }

    /// Half the horizontal extent, signed by corner order.
    #[inline]
    pub fn half_width(&self) -> f32 {
        (self.corners[1].x - self.corners[0].x) / 2.0
    }

    /// Shift both corners by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        self.corners[0] += delta;
        self.corners[1] += delta;
    }

    /// Move horizontally so the midpoint sits at `center_x`, width preserved.
    pub fn set_center_x(&mut self, center_x: f32) {
        let half = self.half_width();
        self.corners[0].x = center_x - half;
        self.corners[1].x = center_x + half;
    }
}

/// A movable rectangle with a speed and a fill color.
///
/// Every geometry change is paired with an erase/redraw against the render
/// surface: erase paints the current footprint in the scene background color
/// before the corners move, redraw paints the new footprint after.
#[derive(Debug, Clone)]
pub struct Body {
    pub aabb: Aabb,
    speed: f32,
    color: Color,
}

impl Body {
    /// Set geometry, speed and color, and issue the entity's first draw.
    pub fn new<S: Surface>(c0: Vec2, c1: Vec2, speed: f32, color: Color, surface: &mut S) -> Self {
        let body = Self { aabb: Aabb::new(c0, c1), speed, color };
        body.redraw(surface);
        body
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn corners(&self) -> [Vec2; 2] {
        self.aabb.corners
    }

    /// Paint the current footprint in the fill color.
    pub fn redraw<S: Surface>(&self, surface: &mut S) {
        surface.fill_rect(self.aabb.corners[0], self.aabb.corners[1], self.color);
    }

    fn erase<S: Surface>(&self, surface: &mut S) {
        surface.fill_rect(self.aabb.corners[0], self.aabb.corners[1], SCENE_COLOR);
    }

    /// Recenter horizontally at `center_x`, erasing the old footprint first.
    /// Absolute placement for pointer-driven movement.
    pub fn set_position_x<S: Surface>(&mut self, center_x: f32, surface: &mut S) {
        self.erase(surface);
        self.aabb.set_center_x(center_x);
        self.redraw(surface);
    }

    /// Displace by `delta`. A zero delta is the forced-repaint sentinel: the
    /// footprint is redrawn in place without an erase.
    pub fn update_position_by<S: Surface>(&mut self, delta: Vec2, surface: &mut S) {
        if delta == Vec2::ZERO {
            self.redraw(surface);
        } else {
            self.erase(surface);
            self.aabb.translate(delta);
            self.redraw(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::RecordingSurface;

    fn test_body(surface: &mut RecordingSurface) -> Body {
        Body::new(
            Vec2::new(10.0, 10.0),
            Vec2::new(30.0, 20.0),
            5.0,
            Color::BLACK,
            surface,
        )
    }

    #[test]
    fn test_new_issues_one_draw() {
        let mut surface = RecordingSurface::default();
        let body = test_body(&mut surface);
        assert_eq!(surface.fills.len(), 1);
        assert_eq!(
            surface.fills[0],
            (Vec2::new(10.0, 10.0), Vec2::new(30.0, 20.0), Color::BLACK)
        );
        assert_eq!(body.speed(), 5.0);
    }

    #[test]
    fn test_zero_delta_redraws_without_moving() {
        let mut surface = RecordingSurface::default();
        let mut body = test_body(&mut surface);
        surface.fills.clear();

        body.update_position_by(Vec2::ZERO, &mut surface);

        assert_eq!(surface.fills.len(), 1);
        assert_eq!(surface.fills[0].2, Color::BLACK);
        assert_eq!(body.corners(), [Vec2::new(10.0, 10.0), Vec2::new(30.0, 20.0)]);
    }

    #[test]
    fn test_displacement_erases_then_redraws() {
        let mut surface = RecordingSurface::default();
        let mut body = test_body(&mut surface);
        surface.fills.clear();

        body.update_position_by(Vec2::new(5.0, -3.0), &mut surface);

        // Old footprint painted over in the scene color first, then the new
        // footprint in the fill color.
        assert_eq!(
            surface.fills,
            vec![
                (Vec2::new(10.0, 10.0), Vec2::new(30.0, 20.0), SCENE_COLOR),
                (Vec2::new(15.0, 7.0), Vec2::new(35.0, 17.0), Color::BLACK),
            ]
        );
    }

    #[test]
    fn test_set_position_x_preserves_width() {
        let mut surface = RecordingSurface::default();
        let mut body = test_body(&mut surface);

        body.set_position_x(100.0, &mut surface);

        let [c0, c1] = body.corners();
        assert_eq!(c1.x - c0.x, 20.0);
        assert_eq!((c0.x + c1.x) / 2.0, 100.0);
        // y coordinates untouched
        assert_eq!(c0.y, 10.0);
        assert_eq!(c1.y, 20.0);
    }

    #[test]
    fn test_displacement_twice_equals_double_step() {
        let mut surface = RecordingSurface::default();
        let mut twice = test_body(&mut surface);
        let mut once = test_body(&mut surface);
        let delta = Vec2::new(4.0, -2.5);

        twice.update_position_by(delta, &mut surface);
        twice.update_position_by(delta, &mut surface);
        once.update_position_by(delta * 2.0, &mut surface);

        assert_eq!(twice.corners(), once.corners());
    }
}
