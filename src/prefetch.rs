// SPDX-License-Identifier: MPL-2.0
//! Decoded-slide cache for latency-free navigation.
//!
//! On every index change the slide *ahead* of the new position is decoded in
//! the background so forward navigation never waits on a decode. Backward
//! navigation is deliberately not preloaded; the wrapped previous slide
//! usually remains cached from earlier anyway thanks to LRU retention.

use crate::media::ImageData;
use crate::navigation::SlideNavigator;
use crate::slides::SlideDeck;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Default number of decoded slides kept in memory. Larger than any deck this
/// application ships, so eviction only matters for pathological configs.
pub const DEFAULT_CACHE_CAPACITY: usize = 16;

/// LRU cache of decoded slide images, keyed by asset name.
#[derive(Debug)]
pub struct SlideCache {
    cache: LruCache<String, ImageData>,
}

impl SlideCache {
    /// Creates a cache holding at most `capacity` decoded slides.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .unwrap_or(NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).expect("non-zero default"));
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Stores a decoded slide.
    pub fn insert(&mut self, asset: String, image: ImageData) {
        self.cache.put(asset, image);
    }

    /// Looks up a decoded slide without disturbing LRU order; usable from
    /// `view` where only `&self` is available.
    #[must_use]
    pub fn peek(&self, asset: &str) -> Option<&ImageData> {
        self.cache.peek(asset)
    }

    /// Whether a slide is already decoded.
    #[must_use]
    pub fn contains(&self, asset: &str) -> bool {
        self.cache.contains(asset)
    }

    /// Number of cached slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for SlideCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

/// Every deck asset not yet decoded. Issued once at startup so the thumbnail
/// rail has an image for all slides, not just the forward preload window.
#[must_use]
pub fn assets_for_boot(deck: &SlideDeck, cache: &SlideCache) -> Vec<String> {
    deck.iter()
        .filter(|slide| !cache.contains(slide.asset))
        .map(|slide| slide.asset.to_string())
        .collect()
}

/// Asset names that should be decoded after a navigation step: the current
/// slide (if somehow missing) plus up to `ahead` wrapped forward neighbors,
/// skipping anything already cached.
#[must_use]
pub fn assets_to_prefetch(
    deck: &SlideDeck,
    navigator: &SlideNavigator,
    cache: &SlideCache,
    ahead: usize,
) -> Vec<String> {
    let mut assets = Vec::new();
    let len = deck.len();
    for step in 0..=ahead.min(len.saturating_sub(1)) {
        let index = (navigator.current_index() + step) % len;
        if let Some(slide) = deck.get(index) {
            if !cache.contains(slide.asset) && !assets.iter().any(|a| a == slide.asset) {
                assets.push(slide.asset.to_string());
            }
        }
    }
    assets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Direction;

    fn test_image() -> ImageData {
        ImageData::from_rgba(2, 2, vec![0u8; 16])
    }

    #[test]
    fn new_cache_is_empty() {
        let cache = SlideCache::default();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn insert_and_peek() {
        let mut cache = SlideCache::default();
        cache.insert("01.png".to_string(), test_image());
        assert!(cache.contains("01.png"));
        assert_eq!(cache.peek("01.png").map(|i| i.width), Some(2));
        assert!(cache.peek("02.png").is_none());
    }

    #[test]
    fn capacity_evicts_least_recently_used() {
        let mut cache = SlideCache::new(2);
        cache.insert("a".to_string(), test_image());
        cache.insert("b".to_string(), test_image());
        cache.insert("c".to_string(), test_image());
        assert_eq!(cache.len(), 2);
        assert!(!cache.contains("a"));
        assert!(cache.contains("c"));
    }

    #[test]
    fn zero_capacity_falls_back_to_default() {
        let cache = SlideCache::new(0);
        assert!(cache.is_empty());
    }

    #[test]
    fn boot_targets_the_whole_deck() {
        let deck = SlideDeck::builtin();
        let cache = SlideCache::default();
        let assets = assets_for_boot(&deck, &cache);
        assert_eq!(assets.len(), deck.len());
        assert!(assets.contains(&"04.png".to_string()));
    }

    #[test]
    fn boot_skips_already_decoded_assets() {
        let deck = SlideDeck::builtin();
        let mut cache = SlideCache::default();
        cache.insert("03.png".to_string(), test_image());
        let assets = assets_for_boot(&deck, &cache);
        assert_eq!(assets.len(), 3);
        assert!(!assets.contains(&"03.png".to_string()));
    }

    #[test]
    fn prefetch_targets_current_and_next() {
        let deck = SlideDeck::builtin();
        let mut navigator = SlideNavigator::new(deck.len());
        let cache = SlideCache::default();

        navigator.paginate(Direction::Next); // now at index 1
        let assets = assets_to_prefetch(&deck, &navigator, &cache, 1);
        assert_eq!(assets, vec!["02.png".to_string(), "03.png".to_string()]);
    }

    #[test]
    fn prefetch_skips_cached_assets() {
        let deck = SlideDeck::builtin();
        let navigator = SlideNavigator::new(deck.len());
        let mut cache = SlideCache::default();
        cache.insert("01.png".to_string(), test_image());

        let assets = assets_to_prefetch(&deck, &navigator, &cache, 1);
        assert_eq!(assets, vec!["02.png".to_string()]);
    }

    #[test]
    fn prefetch_wraps_past_the_last_slide() {
        let deck = SlideDeck::builtin();
        let mut navigator = SlideNavigator::new(deck.len());
        navigator.select(3);
        let cache = SlideCache::default();

        let assets = assets_to_prefetch(&deck, &navigator, &cache, 1);
        assert_eq!(assets, vec!["04.png".to_string(), "01.png".to_string()]);
    }

    #[test]
    fn prefetch_does_not_target_the_previous_slide() {
        let deck = SlideDeck::builtin();
        let mut navigator = SlideNavigator::new(deck.len());
        navigator.paginate(Direction::Next);
        navigator.paginate(Direction::Next); // now at index 2
        let cache = SlideCache::default();

        let assets = assets_to_prefetch(&deck, &navigator, &cache, 1);
        assert!(!assets.contains(&"02.png".to_string()));
    }
}
