// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the slide deck, navigation, motion state, and the
//! decoded-image cache together and translates messages into side effects
//! like background decoding. Policy decisions (window sizing, which config
//! values feed which subsystem) stay close to the update loop so user-facing
//! behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::gesture::DragState;
use crate::motion::{PointerTracker, SlideTransition, Spring, SpringParams};
use crate::navigation::SlideNavigator;
use crate::prefetch::{self, SlideCache};
use crate::reveal::RevealSequencer;
use crate::slides::SlideDeck;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state.
pub struct App {
    deck: SlideDeck,
    navigator: SlideNavigator,
    pointer: PointerTracker,
    drag: DragState,
    /// Snap-back spring for the slide offset after a below-threshold release.
    drag_offset: Spring,
    reveal: RevealSequencer,
    transition: Option<SlideTransition>,
    cache: SlideCache,
    spring_params: SpringParams,
    swipe_threshold: f32,
    preload_ahead: usize,
    viewport: Size,
    last_tick: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current", &self.navigator.current_index())
            .field("in_transition", &self.transition.is_some())
            .field("reveal", &self.reveal.stage())
            .finish()
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from config and kicks off background
    /// decoding of the first slide and its preload window.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match flags.config_path {
            Some(path) => config::load_from_path(&PathBuf::from(path)).unwrap_or_default(),
            None => config::load().unwrap_or_default(),
        };

        let app = Self::with_config(&config);
        let task = app.boot_prefetch_task();
        (app, task)
    }

    /// Builds the state for a resolved config without side effects. Used by
    /// `new` and by tests that drive `update` directly.
    fn with_config(config: &Config) -> Self {
        let deck = SlideDeck::builtin();
        let navigator = SlideNavigator::new(deck.len());
        let spring_params = SpringParams {
            stiffness: config.transition_stiffness(),
            damping: config.transition_damping(),
        };
        let viewport = Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32);

        Self {
            deck,
            navigator,
            pointer: PointerTracker::new(viewport, spring_params),
            drag: DragState::default(),
            drag_offset: Spring::new(0.0, spring_params),
            reveal: RevealSequencer::new(Duration::from_millis(config.reveal_delay_ms())),
            transition: None,
            cache: SlideCache::default(),
            spring_params,
            swipe_threshold: config.swipe_threshold(),
            preload_ahead: config.preload_ahead(),
            viewport,
            last_tick: None,
        }
    }

    fn title(&self) -> String {
        String::from("Iced Gallery")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    /// Background decode tasks for every deck asset; the rail shows all four
    /// thumbnails, so the whole deck is decoded once at startup.
    fn boot_prefetch_task(&self) -> Task<Message> {
        Self::decode_tasks(prefetch::assets_for_boot(&self.deck, &self.cache))
    }

    /// Background decode tasks for the current slide and its preload window.
    fn prefetch_task(&self) -> Task<Message> {
        Self::decode_tasks(prefetch::assets_to_prefetch(
            &self.deck,
            &self.navigator,
            &self.cache,
            self.preload_ahead,
        ))
    }

    fn decode_tasks(assets: Vec<String>) -> Task<Message> {
        Task::batch(assets.into_iter().map(|asset| {
            Task::perform(crate::media::load_slide(asset), |(asset, result)| {
                Message::SlidePrefetched { asset, result }
            })
        }))
    }

    /// Whether anything on screen is still moving; gates the tick
    /// subscription so an idle window schedules no wakeups.
    fn needs_animation_ticks(&self) -> bool {
        self.transition.is_some()
            || self.drag.is_dragging()
            || !self.drag_offset.is_settled()
            || !self.pointer.is_settled()
            || self.reveal.is_animating()
            || self
                .last_tick
                .is_some_and(|now| self.reveal.links_fading(view::SOCIAL_LINKS.len(), now))
    }
}
