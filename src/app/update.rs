// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message};
use crate::gesture::SwipeDecision;
use crate::motion::SlideTransition;
use crate::navigation::Direction;
use iced::{Point, Size, Task};
use std::time::Instant;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Paginate(direction) => paginate(app, direction),
        Message::SelectSlide(index) => select(app, index),
        Message::PointerMoved(position) => pointer_moved(app, position),
        Message::PointerPressed => {
            app.drag.start(app.pointer.raw(), Instant::now());
            Task::none()
        }
        Message::PointerReleased => pointer_released(app),
        Message::StarClicked => {
            app.reveal.trigger(Instant::now());
            Task::none()
        }
        Message::Tick(now) => tick(app, now),
        Message::SlidePrefetched { asset, result } => match result {
            Ok(image) => {
                app.cache.insert(asset, image);
                Task::none()
            }
            Err(err) => {
                eprintln!("Failed to decode slide {asset}: {err}");
                Task::none()
            }
        },
        Message::WindowResized(size) => resized(app, size),
    }
}

/// Steps the navigator and starts the matching transition. The outgoing
/// index is captured before the step so the transition knows both endpoints.
fn paginate(app: &mut App, direction: Direction) -> Task<Message> {
    if direction == Direction::Still {
        return Task::none();
    }
    let from = app.navigator.current_index();
    app.navigator.paginate(direction);
    let to = app.navigator.current_index();
    if from == to {
        return Task::none();
    }

    app.transition = Some(SlideTransition::start(from, to, direction, app.spring_params));
    app.drag_offset.snap_to(0.0);
    app.prefetch_task()
}

/// Direct jump from the thumbnail rail. The transition reuses the direction
/// of the last pagination step, which is what the navigator reports.
fn select(app: &mut App, index: usize) -> Task<Message> {
    let from = app.navigator.current_index();
    app.navigator.select(index);
    let to = app.navigator.current_index();
    if from == to {
        return Task::none();
    }

    app.transition = Some(SlideTransition::start(
        from,
        to,
        app.navigator.direction(),
        app.spring_params,
    ));
    app.drag_offset.snap_to(0.0);
    app.prefetch_task()
}

fn pointer_moved(app: &mut App, position: Point) -> Task<Message> {
    app.pointer.record(position);
    if app.drag.is_dragging() {
        app.drag.update(position, Instant::now());
    }
    Task::none()
}

/// Ends the drag. Above the swipe threshold the release paginates; below it
/// the slide springs back to center from wherever the drag left it.
fn pointer_released(app: &mut App) -> Task<Message> {
    let offset = app.drag.offset_x();
    match app.drag.release(app.swipe_threshold) {
        SwipeDecision::Forward => paginate(app, Direction::Next),
        SwipeDecision::Backward => paginate(app, Direction::Previous),
        SwipeDecision::None => {
            if offset != 0.0 {
                app.drag_offset.snap_to(offset);
                app.drag_offset.set_target(0.0);
            }
            Task::none()
        }
    }
}

/// Cap on the dt fed to the springs. The tick subscription gates off while
/// idle, so the first tick after a pause can span an arbitrary interval;
/// uncapped it would play a whole transition out in one frame.
const MAX_TICK_DELTA_SECS: f32 = 0.1;

fn tick(app: &mut App, now: Instant) -> Task<Message> {
    let dt = app.last_tick.map_or(1.0 / 60.0, |last| {
        now.duration_since(last).as_secs_f32().min(MAX_TICK_DELTA_SECS)
    });
    app.last_tick = Some(now);

    app.pointer.step(dt);
    app.drag_offset.step(dt);
    if let Some(transition) = &mut app.transition {
        transition.step(dt);
        if transition.is_complete() {
            app.transition = None;
        }
    }
    app.reveal.poll(now);

    Task::none()
}

fn resized(app: &mut App, size: Size) -> Task<Message> {
    app.viewport = size;
    app.pointer.set_viewport(size);
    Task::none()
}
