// SPDX-License-Identifier: MPL-2.0
//! Preview state and the reducer that advances it.
//!
//! [`PreviewState`] is an immutable snapshot. Every user interaction is
//! expressed as an [`Event`] and folded in with [`reduce`], which returns the
//! next snapshot without touching the previous one.
//!
//! # Examples
//!
//! ```
//! use corner_preview::preview::{reduce, Event, PreviewState};
//! use corner_preview::composition::OverlayChoice;
//!
//! let state = PreviewState::default();
//! let next = reduce(&state, Event::OverlaySelected(OverlayChoice::OpenCorner));
//! assert_eq!(next.overlay, OverlayChoice::OpenCorner);
//! assert_eq!(state.overlay, OverlayChoice::Traditional);
//! ```

pub mod drag;
pub mod form;

pub use drag::DragState;
pub use form::{ContactForm, Field, SubmissionState, SubmissionStatus};

use crate::composition::{background_bounds, OverlayChoice, OverlaySet, Scene};
use crate::media::BackgroundImage;
use iced::{Point, Vector};

/// Everything the page shows, at one instant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreviewState {
    pub background: Option<BackgroundImage>,
    /// Top-left corner of the photo relative to the stage origin. Unbounded.
    pub position: Vector,
    pub overlay: OverlayChoice,
    pub form: ContactForm,
    pub submission: SubmissionState,
    pub drag: DragState,
}

/// Inputs to the reducer. Pointer coordinates are in stage space.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    BackgroundLoaded(BackgroundImage),
    PointerPressed(Point),
    PointerMoved(Point),
    PointerReleased,
    PointerLeft,
    OverlaySelected(OverlayChoice),
    FieldChanged(Field, String),
    SubmissionStarted,
    SubmissionFinished { success: bool },
}

/// Computes the state following `event`.
#[must_use]
pub fn reduce(state: &PreviewState, event: Event) -> PreviewState {
    match event {
        Event::BackgroundLoaded(background) => PreviewState {
            background: Some(background),
            drag: DragState::default(),
            ..state.clone()
        },
        Event::PointerPressed(point) => {
            if state.hit_background(point) {
                PreviewState {
                    drag: DragState::started_at(point),
                    ..state.clone()
                }
            } else {
                state.clone()
            }
        }
        Event::PointerMoved(point) => match state.drag.advance(point) {
            Some((delta, drag)) => PreviewState {
                position: state.position + delta,
                drag,
                ..state.clone()
            },
            None => state.clone(),
        },
        Event::PointerReleased | Event::PointerLeft => PreviewState {
            drag: DragState::default(),
            ..state.clone()
        },
        Event::OverlaySelected(overlay) => PreviewState {
            overlay,
            ..state.clone()
        },
        Event::FieldChanged(field, value) => PreviewState {
            form: state.form.with(field, value),
            ..state.clone()
        },
        Event::SubmissionStarted => {
            if state.submission.is_in_flight() {
                state.clone()
            } else {
                PreviewState {
                    submission: state.submission.started(),
                    ..state.clone()
                }
            }
        }
        Event::SubmissionFinished { success } => PreviewState {
            submission: state.submission.finished(success),
            ..state.clone()
        },
    }
}

impl PreviewState {
    /// Whether `point` lands on the photo as currently placed.
    #[must_use]
    pub fn hit_background(&self, point: Point) -> bool {
        self.background
            .as_ref()
            .is_some_and(|bg| background_bounds(bg, self.position).contains(point))
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Whether the static success line renders under the form.
    #[must_use]
    pub fn success_message_visible(&self) -> bool {
        self.submission.submitted
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.submission.is_in_flight()
    }

    /// True when both states rasterize to the same pixels.
    #[must_use]
    pub fn same_visual(&self, other: &Self) -> bool {
        self.overlay == other.overlay
            && self.position == other.position
            && match (&self.background, &other.background) {
                (None, None) => true,
                (Some(a), Some(b)) => a.ptr_eq(b),
                _ => false,
            }
    }

    /// Scene to rasterize for this state.
    #[must_use]
    pub fn scene<'a>(&'a self, overlays: &'a OverlaySet) -> Scene<'a> {
        Scene {
            background: self.background.as_ref(),
            position: self.position,
            overlay: overlays.get(self.overlay),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};

    fn photo(width: u32, height: u32, shade: u8) -> BackgroundImage {
        BackgroundImage::from_rgba(
            RgbaImage::from_pixel(width, height, Rgba([shade, shade, shade, 255])),
            width,
        )
    }

    fn fold(state: &PreviewState, events: impl IntoIterator<Item = Event>) -> PreviewState {
        events
            .into_iter()
            .fold(state.clone(), |acc, event| reduce(&acc, event))
    }

    fn loaded() -> PreviewState {
        reduce(
            &PreviewState::default(),
            Event::BackgroundLoaded(photo(100, 100, 10)),
        )
    }

    #[test]
    fn initial_state_is_empty() {
        let state = PreviewState::default();
        assert!(state.background.is_none());
        assert_eq!(state.position, Vector::ZERO);
        assert_eq!(state.overlay, OverlayChoice::Traditional);
        assert_eq!(state.form, ContactForm::default());
        assert!(!state.success_message_visible());
        assert!(!state.is_dragging());
    }

    #[test]
    fn second_background_replaces_first() {
        let first = photo(10, 10, 1);
        let second = photo(20, 20, 2);
        let state = fold(
            &PreviewState::default(),
            [
                Event::BackgroundLoaded(first.clone()),
                Event::BackgroundLoaded(second.clone()),
            ],
        );
        assert!(state.background.as_ref().is_some_and(|bg| bg.ptr_eq(&second)));
        assert!(!state.background.as_ref().is_some_and(|bg| bg.ptr_eq(&first)));
    }

    #[test]
    fn loading_keeps_position() {
        let moved = fold(
            &loaded(),
            [
                Event::PointerPressed(Point::new(5.0, 5.0)),
                Event::PointerMoved(Point::new(25.0, 15.0)),
                Event::PointerReleased,
            ],
        );
        let reloaded = reduce(&moved, Event::BackgroundLoaded(photo(50, 50, 3)));
        assert_eq!(reloaded.position, Vector::new(20.0, 10.0));
    }

    #[test]
    fn drag_sequence_moves_by_total_delta() {
        let state = fold(
            &loaded(),
            [
                Event::PointerPressed(Point::new(10.0, 20.0)),
                Event::PointerMoved(Point::new(30.0, 25.0)),
                Event::PointerMoved(Point::new(-40.0, 60.0)),
                Event::PointerReleased,
            ],
        );
        assert_eq!(state.position, Vector::new(-50.0, 40.0));
        assert!(!state.is_dragging());
    }

    #[test]
    fn moves_before_press_and_after_release_do_nothing() {
        let state = fold(
            &loaded(),
            [
                Event::PointerMoved(Point::new(50.0, 50.0)),
                Event::PointerPressed(Point::new(10.0, 10.0)),
                Event::PointerMoved(Point::new(12.0, 13.0)),
                Event::PointerReleased,
                Event::PointerMoved(Point::new(90.0, 90.0)),
            ],
        );
        assert_eq!(state.position, Vector::new(2.0, 3.0));
    }

    #[test]
    fn leaving_the_stage_ends_the_drag() {
        let state = fold(
            &loaded(),
            [
                Event::PointerPressed(Point::new(10.0, 10.0)),
                Event::PointerLeft,
                Event::PointerMoved(Point::new(70.0, 70.0)),
            ],
        );
        assert_eq!(state.position, Vector::ZERO);
        assert!(!state.is_dragging());
    }

    #[test]
    fn press_without_background_is_ignored() {
        let state = fold(
            &PreviewState::default(),
            [
                Event::PointerPressed(Point::new(1.0, 1.0)),
                Event::PointerMoved(Point::new(30.0, 30.0)),
            ],
        );
        assert_eq!(state.position, Vector::ZERO);
        assert!(!state.is_dragging());
    }

    #[test]
    fn press_outside_background_is_ignored() {
        let state = fold(
            &loaded(),
            [
                Event::PointerPressed(Point::new(400.0, 500.0)),
                Event::PointerMoved(Point::new(410.0, 510.0)),
            ],
        );
        assert_eq!(state.position, Vector::ZERO);
    }

    #[test]
    fn hit_test_follows_the_moved_photo() {
        let moved = fold(
            &loaded(),
            [
                Event::PointerPressed(Point::new(50.0, 50.0)),
                Event::PointerMoved(Point::new(250.0, 50.0)),
                Event::PointerReleased,
            ],
        );
        assert!(!moved.hit_background(Point::new(50.0, 50.0)));
        assert!(moved.hit_background(Point::new(250.0, 50.0)));
    }

    #[test]
    fn position_is_not_clamped() {
        let state = fold(
            &loaded(),
            [
                Event::PointerPressed(Point::new(1.0, 1.0)),
                Event::PointerMoved(Point::new(-5000.0, 9000.0)),
            ],
        );
        assert_eq!(state.position, Vector::new(-5001.0, 8999.0));
    }

    #[test]
    fn last_overlay_selection_wins() {
        let state = fold(
            &loaded(),
            [
                Event::OverlaySelected(OverlayChoice::OpenCorner),
                Event::OverlaySelected(OverlayChoice::Traditional),
            ],
        );
        assert_eq!(state.overlay, OverlayChoice::Traditional);
    }

    #[test]
    fn overlay_selection_leaves_everything_else_alone() {
        let before = fold(
            &loaded(),
            [
                Event::PointerPressed(Point::new(3.0, 3.0)),
                Event::PointerMoved(Point::new(8.0, 1.0)),
                Event::PointerReleased,
                Event::FieldChanged(Field::Email, "a@b.c".into()),
            ],
        );
        let after = reduce(&before, Event::OverlaySelected(OverlayChoice::OpenCorner));

        assert_eq!(after.position, before.position);
        assert_eq!(after.background, before.background);
        assert_eq!(after.form, before.form);
        assert_eq!(after.submission, before.submission);
    }

    #[test]
    fn selecting_active_overlay_is_a_no_op() {
        let state = loaded();
        let next = reduce(&state, Event::OverlaySelected(OverlayChoice::Traditional));
        assert_eq!(next, state);
    }

    #[test]
    fn reduce_leaves_input_untouched() {
        let state = loaded();
        let snapshot = state.clone();
        let _ = fold(
            &state,
            [
                Event::PointerPressed(Point::new(1.0, 1.0)),
                Event::PointerMoved(Point::new(9.0, 9.0)),
                Event::FieldChanged(Field::Name, "x".into()),
            ],
        );
        assert_eq!(state, snapshot);
    }

    #[test]
    fn field_edits_are_stored_verbatim() {
        let state = fold(
            &PreviewState::default(),
            [
                Event::FieldChanged(Field::Name, "  Ada  ".into()),
                Event::FieldChanged(Field::Phone, "not a number".into()),
            ],
        );
        assert_eq!(state.form.name, "  Ada  ");
        assert_eq!(state.form.phone, "not a number");
        assert_eq!(state.form.email, "");
    }

    #[test]
    fn successful_submission_shows_message() {
        let state = fold(
            &PreviewState::default(),
            [
                Event::SubmissionStarted,
                Event::SubmissionFinished { success: true },
            ],
        );
        assert!(state.success_message_visible());
        assert_eq!(state.submission.status, SubmissionStatus::Succeeded);
    }

    #[test]
    fn failed_submission_shows_nothing() {
        let state = fold(
            &PreviewState::default(),
            [
                Event::SubmissionStarted,
                Event::SubmissionFinished { success: false },
            ],
        );
        assert!(!state.success_message_visible());
        assert_eq!(state.submission.status, SubmissionStatus::Failed);
        assert!(state.can_submit());
    }

    #[test]
    fn submission_is_blocked_while_in_flight() {
        let started = reduce(&PreviewState::default(), Event::SubmissionStarted);
        assert!(!started.can_submit());
        assert_eq!(reduce(&started, Event::SubmissionStarted), started);
    }

    #[test]
    fn drag_does_not_change_visual_identity_until_moved() {
        let state = loaded();
        let pressed = reduce(&state, Event::PointerPressed(Point::new(4.0, 4.0)));
        assert!(state.same_visual(&pressed));

        let moved = reduce(&pressed, Event::PointerMoved(Point::new(6.0, 4.0)));
        assert!(!pressed.same_visual(&moved));
        assert!(!moved.same_visual(&reduce(
            &moved,
            Event::OverlaySelected(OverlayChoice::OpenCorner)
        )));
    }
}
