// Math utilities and helper functions

use glam::Vec2;

/// Axis-aligned rectangle in surface pixels (origin top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of `size` whose centre sits on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        let origin = center - size / 2.0;
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    /// A rectangle with no area draws nothing
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
