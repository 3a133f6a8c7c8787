// Sprite rendering onto a drawing surface

use super::canvas::DrawSurface;
use crate::core::math::Rect;
use crate::engine::assets::SpriteSheet;
use glam::Vec2;
use image::Rgba;

/// One sprite-sheet frame placed on the surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    /// Region of the sprite sheet to sample, in sheet pixels
    pub source: Rect,
    /// Centre of the sprite on the surface
    pub position: Vec2,
    /// Size the frame is drawn at
    pub size: Vec2,
}

impl Sprite {
    pub fn new(source: Rect, position: Vec2, size: Vec2) -> Self {
        Self {
            source,
            position,
            size,
        }
    }

    /// Destination rectangle on the surface
    pub fn destination(&self) -> Rect {
        Rect::centered(self.position, self.size)
    }
}

/// Paints a full frame: background plus one sprite
#[derive(Debug, Clone)]
pub struct SpriteRenderer {
    background: Rgba<u8>,
}

impl SpriteRenderer {
    pub fn new(background: Rgba<u8>) -> Self {
        Self { background }
    }

    /// Clear the surface, fill the background and draw `sprite`
    pub fn render<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        sheet: &SpriteSheet,
        sprite: &Sprite,
    ) {
        surface.clear();
        surface.fill(self.background);
        surface.draw_image(sheet.image(), sprite.source, sprite.destination());
    }
}
