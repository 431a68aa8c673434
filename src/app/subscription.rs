// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Raw mouse events are routed through here rather than per-widget handlers
//! so the cursor follower, the parallax, and drag tracking all observe the
//! same stream. The animation tick only runs while something is moving.

use super::{App, Message};
use crate::navigation::Direction;
use iced::keyboard::key::Named;
use iced::{event, keyboard, mouse, time, Subscription};
use std::time::Duration;

/// Interval of the animation tick, roughly one frame at 60 Hz.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

pub fn subscription(app: &App) -> Subscription<Message> {
    let events = event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        // A press captured by a button must not start a drag; a release is
        // always forwarded so an in-flight drag cannot get stuck.
        event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            match status {
                event::Status::Ignored => Some(Message::PointerPressed),
                event::Status::Captured => None,
            }
        }
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match key.as_ref() {
            keyboard::Key::Named(Named::ArrowRight) => Some(Message::Paginate(Direction::Next)),
            keyboard::Key::Named(Named::ArrowLeft) => Some(Message::Paginate(Direction::Previous)),
            _ => None,
        },
        _ => None,
    });

    let ticks = if app.needs_animation_ticks() {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    };

    Subscription::batch([events, ticks])
}
