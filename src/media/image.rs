// SPDX-License-Identifier: MPL-2.0
//! Background image loading and decoding (PNG, JPEG, GIF, SVG, etc.).

use crate::config::MAX_BACKGROUND_HEIGHT;
use crate::error::{Error, Result};
use image_rs::imageops::{self, FilterType};
use image_rs::RgbaImage;
use resvg::usvg;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// File extensions offered by the open dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "ico", "svg",
];

/// A decoded background photo, scaled to the stage width.
///
/// Pixels are shared through an `Arc` so snapshots of the preview state can be
/// cloned freely.
#[derive(Debug, Clone)]
pub struct BackgroundImage {
    pixels: Arc<RgbaImage>,
    original_width: u32,
    original_height: u32,
}

impl BackgroundImage {
    /// Wraps decoded pixels, scaling them proportionally to `display_width`.
    #[must_use]
    pub fn from_rgba(image: RgbaImage, display_width: u32) -> Self {
        let (original_width, original_height) = image.dimensions();
        let pixels = if original_width == display_width || original_width == 0 {
            image
        } else {
            let display_height = scaled_height(original_width, original_height, display_width);
            imageops::resize(&image, display_width, display_height, FilterType::Triangle)
        };

        Self {
            pixels: Arc::new(pixels),
            original_width,
            original_height,
        }
    }

    /// Width on the stage, in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height on the stage, in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Dimensions of the file as decoded, before scaling.
    #[must_use]
    pub fn original_dimensions(&self) -> (u32, u32) {
        (self.original_width, self.original_height)
    }

    /// Stage-scaled RGBA pixels.
    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Returns `true` when both values share the same pixel buffer.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

impl PartialEq for BackgroundImage {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
            || (self.original_width == other.original_width
                && self.original_height == other.original_height
                && *self.pixels == *other.pixels)
    }
}

/// Height of a `width` x `height` image once scaled to `display_width`.
#[must_use]
pub fn scaled_height(width: u32, height: u32, display_width: u32) -> u32 {
    if width == display_width || width == 0 {
        return height;
    }
    let scale = f64::from(display_width) / f64::from(width);
    // `as` saturates on absurd ratios.
    ((f64::from(height) * scale).round() as u32).max(1)
}

/// Loads an image file and scales it to `display_width`.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The image format is invalid or unsupported ([`Error::Decode`])
/// - The scaled image would be taller than [`MAX_BACKGROUND_HEIGHT`] ([`Error::Decode`])
/// - For SVG files: parsing fails or dimensions are zero ([`Error::Svg`])
pub fn load_background<P: AsRef<Path>>(path: P, display_width: u32) -> Result<BackgroundImage> {
    let path = path.as_ref();
    let decoded = decode_rgba(path)?;

    let (width, height) = decoded.dimensions();
    let display_height = scaled_height(width, height, display_width);
    if display_height > MAX_BACKGROUND_HEIGHT {
        return Err(Error::Decode(format!(
            "{width}x{height} image would be {display_height}px tall on the stage \
             (limit {MAX_BACKGROUND_HEIGHT}px)"
        )));
    }

    let background = BackgroundImage::from_rgba(decoded, display_width);
    tracing::debug!(
        path = %path.display(),
        width = background.width(),
        height = background.height(),
        "background decoded"
    );
    Ok(background)
}

/// Decodes an image file into RGBA pixels at its natural size.
pub fn decode_rgba(path: &Path) -> Result<RgbaImage> {
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    let bytes = fs::read(path)?;

    if extension.eq_ignore_ascii_case("svg") {
        rasterize_svg(&bytes, None)
    } else {
        let img = image_rs::load_from_memory(&bytes)?;
        Ok(img.to_rgba8())
    }
}

/// Renders SVG data to straight-alpha RGBA pixels.
///
/// With `target_width` set, the drawing is scaled uniformly so its width
/// matches; otherwise it renders at its intrinsic size.
pub fn rasterize_svg(data: &[u8], target_width: Option<u32>) -> Result<RgbaImage> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let size = tree.size();
    if size.width() <= 0.0 || size.height() <= 0.0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let scale = target_width.map_or(1.0, |w| w as f32 / size.width());
    let width = (size.width() * scale).round() as u32;
    let height = (size.height() * scale).round() as u32;
    if width == 0 || height == 0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    // tiny-skia stores premultiplied alpha; the compositor expects straight alpha.
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| Error::Svg("SVG pixel buffer has unexpected size".into()))
}
