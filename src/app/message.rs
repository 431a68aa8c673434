// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageData;
use crate::navigation::Direction;
use iced::{Point, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Raw pointer events arrive
/// through the subscription so drag tracking and the follower see the same
/// stream regardless of which widget is under the cursor.
#[derive(Debug, Clone)]
pub enum Message {
    /// Step one slide forward or backward (arrows, keyboard, swipe).
    Paginate(Direction),
    /// Jump directly to a slide (thumbnail rail).
    SelectSlide(usize),
    /// Raw cursor position from the event subscription.
    PointerMoved(Point),
    /// Left button pressed over the stage; begins drag tracking.
    PointerPressed,
    /// Left button released; ends drag tracking and decides on a swipe.
    PointerReleased,
    /// The decorative pixel star was clicked.
    StarClicked,
    /// Periodic animation tick.
    Tick(Instant),
    /// Result from decoding a slide in the background.
    SlidePrefetched {
        asset: String,
        result: Result<ImageData, Error>,
    },
    /// The window was resized; updates the parallax mapping.
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional path to a `settings.toml` overriding the platform default.
    pub config_path: Option<String>,
}
