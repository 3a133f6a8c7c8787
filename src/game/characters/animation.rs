// Sprite-sheet layout and walk-cycle timing

use super::state::Pose;
use crate::core::math::Rect;
use glam::Vec2;

/// Sprite sheet configuration for the mascot.
///
/// Rows are walking directions (see `Direction::row`), columns are the frames
/// of each walk cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheetConfig {
    /// Width of each frame in sheet pixels
    pub frame_width: u32,
    /// Height of each frame in sheet pixels
    pub frame_height: u32,
    /// Number of frames per walk cycle
    pub columns: u32,
    /// Size a frame is drawn at on the surface
    pub draw_size: Vec2,
}

impl SpriteSheetConfig {
    /// Create a new sprite sheet configuration
    pub fn new(frame_width: u32, frame_height: u32, columns: u32, draw_size: Vec2) -> Self {
        Self {
            frame_width,
            frame_height,
            columns,
            draw_size,
        }
    }

    /// The mascot sheet: 32x32 frames, four per cycle, drawn at 3x
    pub fn standard_character() -> Self {
        Self::new(32, 32, 4, Vec2::new(96.0, 96.0))
    }

    /// Sheet region holding the frame for `pose`
    pub fn frame_rect(&self, pose: &Pose) -> Rect {
        let column = pose.column % self.columns.max(1);
        Rect::new(
            (column * self.frame_width) as f32,
            (pose.row() * self.frame_height) as f32,
            self.frame_width as f32,
            self.frame_height as f32,
        )
    }
}

/// Steps the walk cycle forward every `frames_per_column` frames while moving
#[derive(Debug, Clone)]
pub struct SpriteAnimator {
    columns: u32,
    frames_per_column: u32,
    frame_counter: u32,
}

impl SpriteAnimator {
    pub fn new(columns: u32, frames_per_column: u32) -> Self {
        Self {
            columns: columns.max(1),
            frames_per_column: frames_per_column.max(1),
            frame_counter: 0,
        }
    }

    /// Advance one display frame.
    ///
    /// While moving the column steps on every `frames_per_column`-th frame
    /// (starting with the first) and wraps; while idle the pose snaps back to
    /// column 0 and the cadence restarts.
    pub fn advance(&mut self, pose: &mut Pose, moving: bool) {
        if moving {
            if self.frame_counter % self.frames_per_column == 0 {
                pose.column = (pose.column + 1) % self.columns;
            }
            self.frame_counter = self.frame_counter.wrapping_add(1);
        } else {
            pose.column = 0;
            self.frame_counter = 0;
        }
    }
}
