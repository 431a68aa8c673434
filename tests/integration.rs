// SPDX-License-Identifier: MPL-2.0
use iced_gallery::config::{self, Config, DEFAULT_SWIPE_THRESHOLD};
use iced_gallery::gesture::{decide, DragState, SwipeDecision};
use iced_gallery::motion::{SlideTransition, SpringParams};
use iced_gallery::navigation::{Direction, SlideNavigator};
use iced_gallery::prefetch::{assets_to_prefetch, SlideCache};
use iced_gallery::reveal::{RevealSequencer, RevealStage};
use iced_gallery::slides::SlideDeck;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn test_config_round_trip_through_a_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let written = Config {
        transition_stiffness: Some(180.0),
        transition_damping: Some(22.0),
        swipe_threshold: None,
        reveal_delay_ms: Some(750),
        preload_ahead: None,
    };
    config::save_to_path(&written, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded.transition_stiffness, written.transition_stiffness);
    assert_eq!(loaded.reveal_delay_ms, written.reveal_delay_ms);
    assert_eq!(loaded.swipe_threshold(), DEFAULT_SWIPE_THRESHOLD);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_swipe_drives_navigation_end_to_end() {
    let deck = SlideDeck::builtin();
    let mut navigator = SlideNavigator::new(deck.len());
    let mut drag = DragState::default();

    // A fast leftward fling paginates forward.
    let t0 = Instant::now();
    drag.start(iced::Point::new(640.0, 400.0), t0);
    drag.update(
        iced::Point::new(520.0, 400.0),
        t0 + Duration::from_millis(40),
    );
    match drag.release(DEFAULT_SWIPE_THRESHOLD) {
        SwipeDecision::Forward => navigator.paginate(Direction::Next),
        SwipeDecision::Backward => navigator.paginate(Direction::Previous),
        SwipeDecision::None => {}
    }
    assert_eq!(navigator.current_index(), 1);
    assert_eq!(navigator.position_label(), "02 / 04");
}

#[test]
fn test_swipe_decision_table() {
    let threshold = DEFAULT_SWIPE_THRESHOLD;
    assert_eq!(decide(-50.0, -300.0, threshold), SwipeDecision::Forward);
    assert_eq!(decide(50.0, 300.0, threshold), SwipeDecision::Backward);
    assert_eq!(decide(10.0, 10.0, threshold), SwipeDecision::None);
}

#[test]
fn test_pagination_transition_settles_centered() {
    let mut navigator = SlideNavigator::new(4);
    let from = navigator.current_index();
    navigator.paginate(Direction::Next);

    let mut transition = SlideTransition::start(
        from,
        navigator.current_index(),
        navigator.direction(),
        SpringParams::default(),
    );
    assert!(transition.entering_offset() > 900.0, "enters from the right");

    for _ in 0..1200 {
        transition.step(1.0 / 60.0);
        if transition.is_complete() {
            break;
        }
    }
    assert!(transition.is_complete());
    assert!(transition.entering_offset().abs() < 0.1);
    assert!((transition.entering_opacity() - 1.0).abs() < f32::EPSILON);
}

#[test]
fn test_prefetch_follows_navigation_forward() {
    let deck = SlideDeck::builtin();
    let mut navigator = SlideNavigator::new(deck.len());
    let cache = SlideCache::default();

    navigator.paginate(Direction::Next);
    let wanted = assets_to_prefetch(&deck, &navigator, &cache, 1);
    assert!(wanted.contains(&"03.png".to_string()), "next slide queued");
}

#[test]
fn test_reveal_sequence_is_one_shot() {
    let mut reveal = RevealSequencer::new(Duration::from_millis(1000));
    let now = Instant::now();

    assert!(reveal.trigger(now));
    assert!(!reveal.trigger(now + Duration::from_millis(10)));
    assert_eq!(reveal.stage(), RevealStage::Animating);

    assert!(reveal.poll(now + Duration::from_millis(1000)));
    assert_eq!(reveal.stage(), RevealStage::Revealed);
    assert!(!reveal.trigger(now + Duration::from_secs(5)));
}

#[test]
fn test_every_deck_asset_decodes() {
    let deck = SlideDeck::builtin();
    for slide in deck.iter() {
        let bytes = SlideDeck::asset_bytes(slide.asset).expect("embedded asset");
        let image = iced_gallery::media::decode(&bytes).expect("decodable slide");
        assert!(image.width > 0 && image.height > 0);
    }
}
