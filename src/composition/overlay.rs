// SPDX-License-Identifier: MPL-2.0
//! Bundled overlay artwork drawn above the background photo.

use crate::error::{Error, Result};
use crate::media::image::rasterize_svg;
use image_rs::RgbaImage;
use rust_embed::RustEmbed;
use std::sync::Arc;

#[derive(RustEmbed)]
#[folder = "assets/overlays/"]
struct OverlayAsset;

/// Which corner treatment is drawn over the photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverlayChoice {
    /// Solid post blocking the corner.
    #[default]
    Traditional,
    /// Glass meeting glass with no post.
    OpenCorner,
}

impl OverlayChoice {
    pub const ALL: [OverlayChoice; 2] = [OverlayChoice::Traditional, OverlayChoice::OpenCorner];

    /// Name of the bundled SVG file.
    #[must_use]
    pub fn asset_name(self) -> &'static str {
        match self {
            OverlayChoice::Traditional => "traditional.svg",
            OverlayChoice::OpenCorner => "open-corner.svg",
        }
    }

    /// Translation key for the toolbar button selecting this overlay.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            OverlayChoice::Traditional => "toolbar-overlay-traditional",
            OverlayChoice::OpenCorner => "toolbar-overlay-open-corner",
        }
    }
}

/// Both overlays, rasterized once at stage width.
#[derive(Debug, Clone)]
pub struct OverlaySet {
    traditional: Arc<RgbaImage>,
    open_corner: Arc<RgbaImage>,
}

impl OverlaySet {
    /// Rasterizes every bundled overlay to `stage_width` pixels wide.
    pub fn load(stage_width: u32) -> Result<Self> {
        Ok(Self {
            traditional: Arc::new(render(OverlayChoice::Traditional, stage_width)?),
            open_corner: Arc::new(render(OverlayChoice::OpenCorner, stage_width)?),
        })
    }

    /// Fully transparent overlays in the bundled 4:3 proportion, used when
    /// the bundled artwork cannot be rendered.
    #[must_use]
    pub fn blank(stage_width: u32) -> Self {
        let blank = Arc::new(RgbaImage::new(stage_width, stage_width * 3 / 4));
        Self {
            traditional: Arc::clone(&blank),
            open_corner: blank,
        }
    }

    #[must_use]
    pub fn get(&self, choice: OverlayChoice) -> &RgbaImage {
        match choice {
            OverlayChoice::Traditional => &self.traditional,
            OverlayChoice::OpenCorner => &self.open_corner,
        }
    }
}

fn render(choice: OverlayChoice, stage_width: u32) -> Result<RgbaImage> {
    let name = choice.asset_name();
    let file = OverlayAsset::get(name)
        .ok_or_else(|| Error::Io(format!("bundled overlay {name} is missing")))?;
    rasterize_svg(file.data.as_ref(), Some(stage_width))
}
