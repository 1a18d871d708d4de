// SPDX-License-Identifier: MPL-2.0
//! Media intake: decoding user-selected photos into stage-sized backgrounds.

pub mod image;

pub use self::image::{load_background, BackgroundImage, IMAGE_EXTENSIONS};
