// Keeps the mascot on the drawing surface

use crate::engine::input::Direction;
use glam::Vec2;

/// Per-side insets between the drawn frame and the visible character.
///
/// Negative values let the frame's transparent padding hang off the edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteMargins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for SpriteMargins {
    fn default() -> Self {
        Self {
            top: -12.0,
            right: -65.0,
            bottom: -10.0,
            left: -66.0,
        }
    }
}

/// Range the mascot's centre may occupy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl MovementBounds {
    /// Bounds for a frame of `draw_size` on a surface of `surface_size`.
    ///
    /// `horizontal_inset` pulls both horizontal limits further inward.
    pub fn new(
        surface_size: Vec2,
        draw_size: Vec2,
        margins: SpriteMargins,
        horizontal_inset: f32,
    ) -> Self {
        let half = draw_size / 2.0;
        Self {
            min: Vec2::new(
                half.x + margins.left + horizontal_inset,
                half.y + margins.top,
            ),
            max: Vec2::new(
                surface_size.x - half.x - margins.right - horizontal_inset,
                surface_size.y - half.y - margins.bottom,
            ),
        }
    }
}

/// Moves the mascot one step and clamps it to the bounds
#[derive(Debug, Clone)]
pub struct BoundaryClamper {
    bounds: MovementBounds,
    speed: f32,
}

impl BoundaryClamper {
    pub fn new(bounds: MovementBounds, speed: f32) -> Self {
        Self { bounds, speed }
    }

    pub fn bounds(&self) -> &MovementBounds {
        &self.bounds
    }

    /// Step `position` toward `direction` (no step when idle) and clamp the
    /// axis of travel against its far edge. The other axis is left alone.
    pub fn step(&self, position: &mut Vec2, direction: Direction, moving: bool) {
        let step = if moving { self.speed } else { 0.0 };
        match direction {
            Direction::Down => position.y = (position.y + step).min(self.bounds.max.y),
            Direction::Up => position.y = (position.y - step).max(self.bounds.min.y),
            Direction::Right => position.x = (position.x + step).min(self.bounds.max.x),
            Direction::Left => position.x = (position.x - step).max(self.bounds.min.x),
        }
    }
}
