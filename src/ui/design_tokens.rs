// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the preview page.
//!
//! - **Palette**: brand and neutral colors
//! - **Spacing**: 8px grid
//! - **Sizing**: control and layout dimensions
//! - **Typography**: font size scale
//! - **Radius** and **Shadow**: surface treatment
//!
//! ```
//! use corner_preview::ui::design_tokens::{palette, spacing};
//!
//! let gap = spacing::MD;
//! assert_eq!(gap, spacing::XS * 2.0);
//! assert!(palette::ACCENT_500.a == 1.0);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_900: Color = Color::from_rgb(0.12, 0.12, 0.13);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.32);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.47);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.78, 0.8);
    pub const GRAY_100: Color = Color::from_rgb(0.9, 0.9, 0.91);

    // Warm bronze, matching the window frames in the overlays
    pub const ACCENT_400: Color = Color::from_rgb(0.66, 0.55, 0.42);
    pub const ACCENT_500: Color = Color::from_rgb(0.55, 0.48, 0.4);
    pub const ACCENT_600: Color = Color::from_rgb(0.42, 0.36, 0.3);

    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_PADDING: f32 = 10.0;

    /// Width of the contact form column.
    pub const FORM_WIDTH: f32 = 360.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page header.
    pub const TITLE_LG: f32 = 26.0;

    /// Section headers such as the form title.
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY: f32 = 14.0;

    /// Hints over the empty stage.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{palette, Color};
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(radius::LG > radius::SM);
    assert!(sizing::FORM_WIDTH > sizing::BUTTON_HEIGHT);
};
