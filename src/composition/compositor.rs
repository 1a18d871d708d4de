// SPDX-License-Identifier: MPL-2.0
//! Stage rasterization: background photo first, overlay on top.
//!
//! The same function feeds the on-screen preview, the download and the
//! submission payload, so all three always show identical pixels.

use crate::config::OVERLAY_TOP;
use crate::media::BackgroundImage;
use iced::{Rectangle, Vector};
use image_rs::{imageops, Rgba, RgbaImage};

/// Opaque fill behind everything, visible wherever the photo does not reach.
pub const STAGE_FILL: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Everything needed to paint one frame of the stage.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub background: Option<&'a BackgroundImage>,
    /// Offset of the photo's top-left corner from the stage origin.
    pub position: Vector,
    pub overlay: &'a RgbaImage,
}

impl Scene<'_> {
    /// Stage dimensions: overlay width, and tall enough to hold the overlay
    /// below its top margin.
    #[must_use]
    pub fn stage_size(&self) -> (u32, u32) {
        stage_size(self.overlay)
    }

    /// Paints the scene into a fresh opaque bitmap.
    #[must_use]
    pub fn rasterize(&self) -> RgbaImage {
        let (width, height) = self.stage_size();
        let mut canvas = RgbaImage::from_pixel(width, height, STAGE_FILL);

        if let Some(background) = self.background {
            let (x, y) = pixel_offset(self.position);
            imageops::overlay(&mut canvas, background.pixels(), x, y);
        }
        imageops::overlay(&mut canvas, self.overlay, 0, i64::from(OVERLAY_TOP));

        canvas
    }
}

/// Stage dimensions for a given overlay bitmap.
#[must_use]
pub fn stage_size(overlay: &RgbaImage) -> (u32, u32) {
    (overlay.width(), OVERLAY_TOP + overlay.height())
}

/// Rectangle covered by the photo on the stage, in stage coordinates.
#[must_use]
pub fn background_bounds(background: &BackgroundImage, position: Vector) -> Rectangle {
    Rectangle {
        x: position.x,
        y: position.y,
        width: background.width() as f32,
        height: background.height() as f32,
    }
}

// Fractional drag offsets snap to the nearest whole pixel.
fn pixel_offset(position: Vector) -> (i64, i64) {
    (position.x.round() as i64, position.y.round() as i64)
}
