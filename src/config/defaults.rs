// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Stage**: Geometry of the preview surface
//! - **Submission**: Form endpoint and reply-to address
//! - **Export**: Download file naming

// ==========================================================================
// Stage Defaults
// ==========================================================================

/// Width of the preview stage in pixels. Backgrounds and overlays are scaled
/// to this width.
pub const STAGE_WIDTH: u32 = 800;

/// Vertical position of the overlay's top edge on the stage.
pub const OVERLAY_TOP: u32 = 250;

/// Tallest a background may be once scaled to the stage width. Narrow strips
/// past this are refused instead of being blown up.
pub const MAX_BACKGROUND_HEIGHT: u32 = 16_384;

// ==========================================================================
// Submission Defaults
// ==========================================================================

/// Form-processing endpoint receiving submissions.
pub const DEFAULT_SUBMISSION_ENDPOINT: &str = "https://formspree.io/f/moqgndko";

/// Reply-to address attached to every submission.
pub const DEFAULT_REPLY_TO: &str = "hprouty@avbuilder.com";

// ==========================================================================
// Export Defaults
// ==========================================================================

/// Suggested file name for downloaded previews.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "tonyview-preview.png";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(STAGE_WIDTH > 0);
    assert!(MAX_BACKGROUND_HEIGHT > OVERLAY_TOP);
    assert!(!DEFAULT_SUBMISSION_ENDPOINT.is_empty());
    assert!(!DEFAULT_EXPORT_FILE_NAME.is_empty());
};
