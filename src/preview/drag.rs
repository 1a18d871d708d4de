// SPDX-License-Identifier: MPL-2.0
//! Pointer drag tracking for the background photo.

use iced::{Point, Vector};

/// Idle when `anchor` is `None`, dragging otherwise.
///
/// The anchor is the last pointer position seen during the drag; every move
/// yields the delta since the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    anchor: Option<Point>,
}

impl DragState {
    #[must_use]
    pub fn started_at(point: Point) -> Self {
        Self {
            anchor: Some(point),
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Returns the movement since the last anchor and the updated state, or
    /// `None` when idle.
    #[must_use]
    pub fn advance(&self, current: Point) -> Option<(Vector, Self)> {
        let anchor = self.anchor?;
        Some((current - anchor, Self::started_at(current)))
    }
}
