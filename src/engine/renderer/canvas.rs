// CPU drawing surface the mascot is painted on

use crate::core::math::Rect;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// A 2D drawing surface with the handful of operations the mascot needs
pub trait DrawSurface {
    /// Surface size in pixels (width, height)
    fn size(&self) -> (u32, u32);

    /// Reset every pixel to transparent
    fn clear(&mut self);

    /// Fill the whole surface with a solid colour
    fn fill(&mut self, color: Rgba<u8>);

    /// Draw the `src` region of `image` scaled into `dst`, alpha-blended over
    /// what is already there. Sampling is nearest-neighbour so pixel art stays
    /// sharp; parts of `dst` outside the surface are skipped.
    fn draw_image(&mut self, image: &RgbaImage, src: Rect, dst: Rect);
}

/// Software canvas backed by an RGBA image
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// Create a transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// The painted pixels, row-major RGBA
    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl DrawSurface for Canvas {
    fn size(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    fn clear(&mut self) {
        self.fill(Rgba([0, 0, 0, 0]));
    }

    fn fill(&mut self, color: Rgba<u8>) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = color;
        }
    }

    fn draw_image(&mut self, image: &RgbaImage, src: Rect, dst: Rect) {
        if src.is_empty() || dst.is_empty() {
            return;
        }

        // Source regions are clipped to the image
        let frame = imageops::crop_imm(
            image,
            src.x.max(0.0) as u32,
            src.y.max(0.0) as u32,
            src.width as u32,
            src.height as u32,
        )
        .to_image();
        let (width, height) = (dst.width.round() as u32, dst.height.round() as u32);
        if frame.width() == 0 || frame.height() == 0 || width == 0 || height == 0 {
            return;
        }

        let scaled = imageops::resize(&frame, width, height, FilterType::Nearest);
        imageops::overlay(&mut self.pixels, &scaled, dst.x.round() as i64, dst.y.round() as i64);
    }
}
