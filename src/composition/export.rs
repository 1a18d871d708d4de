// SPDX-License-Identifier: MPL-2.0
//! Encoding a rasterized stage for download and submission.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image_rs::{ImageFormat, RgbaImage};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// A finished composite, PNG-encoded once and shared by every consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composite {
    png: Arc<Vec<u8>>,
    width: u32,
    height: u32,
}

impl Composite {
    /// Encodes a rasterized stage as PNG.
    pub fn encode(image: &RgbaImage) -> Result<Self> {
        let mut png = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| Error::Encode(e.to_string()))?;

        Ok(Self {
            png: Arc::new(png),
            width: image.width(),
            height: image.height(),
        })
    }

    #[must_use]
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// `data:image/png;base64,...` form used in the submission payload.
    #[must_use]
    pub fn data_uri(&self) -> String {
        let mut uri = String::with_capacity(DATA_URI_PREFIX.len() + self.png.len() * 4 / 3 + 4);
        uri.push_str(DATA_URI_PREFIX);
        STANDARD.encode_string(self.png.as_slice(), &mut uri);
        uri
    }

    /// Writes the PNG bytes to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.png.as_slice())?;
        tracing::info!(path = %path.display(), bytes = self.png.len(), "preview saved");
        Ok(())
    }
}

/// Decodes a PNG data URI back to raw bytes.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
    let payload = uri
        .strip_prefix(DATA_URI_PREFIX)
        .ok_or_else(|| Error::Encode("not a PNG data URI".into()))?;
    STANDARD
        .decode(payload)
        .map_err(|e| Error::Encode(e.to_string()))
}

/// Appends `.png` when the chosen save path has no extension.
#[must_use]
pub fn with_png_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension("png")
    }
}
