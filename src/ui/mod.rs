// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`stage`] - The preview picture and its pointer layer
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod stage;
pub mod styles;
pub mod theming;
