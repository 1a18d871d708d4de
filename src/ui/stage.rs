// SPDX-License-Identifier: MPL-2.0
//! The preview stage: the rasterized composite with a pointer layer on top.
//!
//! The picture shown is exactly the bitmap that download and submit use. A
//! transparent canvas of the same size sits above it and turns mouse input
//! into stage-space pointer messages.

use crate::ui::styles;
use iced::widget::canvas::{self, Canvas, Geometry};
use iced::widget::{container, image, Action, Stack};
use iced::{mouse, Element, Length, Point, Rectangle, Renderer, Theme};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Pressed(Point),
    Moved(Point),
    Released,
    Left,
}

pub struct ViewContext<'a> {
    pub frame: &'a image::Handle,
    /// Stage size in pixels; the picture is shown 1:1.
    pub size: (u32, u32),
    /// Where the photo currently sits, if one is loaded.
    pub background_bounds: Option<Rectangle>,
    pub dragging: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let width = Length::Fixed(ctx.size.0 as f32);
    let height = Length::Fixed(ctx.size.1 as f32);

    let picture = image(ctx.frame.clone())
        .width(width)
        .height(height)
        .filter_method(image::FilterMethod::Nearest);

    let pointer_layer = Canvas::new(PointerLayer {
        background_bounds: ctx.background_bounds,
        dragging: ctx.dragging,
    })
    .width(width)
    .height(height);

    container(Stack::new().push(picture).push(pointer_layer))
        .style(styles::container::stage_frame)
        .padding(1)
        .into()
}

/// Canvas program translating mouse events into [`Message`]s.
#[derive(Debug, Clone, Copy)]
pub struct PointerLayer {
    pub background_bounds: Option<Rectangle>,
    pub dragging: bool,
}

impl PointerLayer {
    fn over_background(&self, point: Point) -> bool {
        self.background_bounds
            .is_some_and(|bounds| bounds.contains(point))
    }

    /// Maps a raw event to a stage message. `cursor` is already relative to
    /// the stage origin.
    pub fn interpret(&self, event: &iced::Event, cursor: Option<Point>) -> Option<Message> {
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                cursor
                    .filter(|point| self.over_background(*point))
                    .map(Message::Pressed)
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) if self.dragging => {
                Some(cursor.map_or(Message::Left, Message::Moved))
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                if self.dragging =>
            {
                Some(Message::Released)
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) if self.dragging => Some(Message::Left),
            _ => None,
        }
    }
}

impl canvas::Program<Message> for PointerLayer {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        self.interpret(event, cursor.position_in(bounds))
            .map(|message| Action::publish(message).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        _renderer: &Renderer,
        _theme: &Theme,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        Vec::new()
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.dragging {
            mouse::Interaction::Grabbing
        } else if cursor
            .position_in(bounds)
            .is_some_and(|point| self.over_background(point))
        {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
