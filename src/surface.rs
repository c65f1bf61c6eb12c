//! Render-surface seam
//!
//! The simulation never touches pixels. Everything it wants painted - the
//! arena walls, an entity footprint, the background patch that erases one -
//! goes through [`Surface::fill_rect`], and the embedding application decides
//! what a filled rectangle means (a window canvas, a framebuffer, nothing).

use glam::Vec2;

/// An RGB fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
}

/// Scene background color; painting it over an entity's footprint erases it.
pub const SCENE_COLOR: Color = Color::WHITE;
/// Wall and entity fill color.
pub const WALL_COLOR: Color = Color::BLACK;

/// A fixed-size canvas the game draws onto.
///
/// One primitive covers the whole game. `a` and `b` are two opposite corners
/// in pixel coordinates (y grows downward), in no particular order -
/// implementations must not assume `a` is the smaller corner.
pub trait Surface {
    fn fill_rect(&mut self, a: Vec2, b: Vec2, color: Color);
}

/// Surface that discards every draw request, for headless runs.
#[derive(Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn fill_rect(&mut self, _a: Vec2, _b: Vec2, _color: Color) {}
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Records every fill request in call order.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub fills: Vec<(Vec2, Vec2, Color)>,
    }

    impl Surface for RecordingSurface {
        fn fill_rect(&mut self, a: Vec2, b: Vec2, color: Color) {
            self.fills.push((a, b, color));
        }
    }
}
