// SPDX-License-Identifier: MPL-2.0
//! Compositing the stage: overlay artwork, rasterization and PNG export.

pub mod compositor;
pub mod export;
pub mod overlay;

pub use compositor::{background_bounds, stage_size, Scene, STAGE_FILL};
pub use export::Composite;
pub use overlay::{OverlayChoice, OverlaySet};
