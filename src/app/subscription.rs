// SPDX-License-Identifier: MPL-2.0
//! Native event subscriptions.
//!
//! Pointer input reaches the stage through its canvas; only window-level
//! events are routed here.

use super::Message;
use iced::{event, window, Subscription};

/// Routes files dropped on the window to the background loader.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    })
}
