// SPDX-License-Identifier: MPL-2.0
//! The fixed slide deck shown by the carousel.
//!
//! Slide records and their image bytes are compiled into the binary; nothing
//! is read from disk or the network at runtime.

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::borrow::Cow;

#[derive(RustEmbed)]
#[folder = "assets/slides/"]
struct SlideAssets;

/// One entry in the carousel: an identifier, an embedded image asset name,
/// and a caption shown on the slide badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub id: u32,
    pub asset: &'static str,
    pub caption: &'static str,
}

const SLIDES: [Slide; 4] = [
    Slide {
        id: 1,
        asset: "01.png",
        caption: "Layout n°001",
    },
    Slide {
        id: 2,
        asset: "02.png",
        caption: "Layout n°002",
    },
    Slide {
        id: 3,
        asset: "03.png",
        caption: "Layout n°003",
    },
    Slide {
        id: 4,
        asset: "04.png",
        caption: "Layout n°004",
    },
];

/// Immutable, ordered collection of slides. Defined once at startup and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDeck {
    slides: &'static [Slide],
}

impl SlideDeck {
    /// Returns the built-in four-slide deck.
    #[must_use]
    pub fn builtin() -> Self {
        Self { slides: &SLIDES }
    }

    /// Returns the number of slides in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Returns whether the deck is empty. The built-in deck never is.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Returns the slide at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Iterates over all slides in order.
    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }

    /// Looks up the embedded image bytes for an asset name.
    pub fn asset_bytes(asset: &str) -> Result<Cow<'static, [u8]>> {
        SlideAssets::get(asset)
            .map(|file| file.data)
            .ok_or_else(|| Error::Image(format!("missing embedded asset: {asset}")))
    }
}

impl Default for SlideDeck {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_deck_has_four_slides() {
        let deck = SlideDeck::builtin();
        assert_eq!(deck.len(), 4);
        assert!(!deck.is_empty());
    }

    #[test]
    fn slide_ids_are_sequential() {
        let deck = SlideDeck::builtin();
        for (index, slide) in deck.iter().enumerate() {
            assert_eq!(slide.id as usize, index + 1);
        }
    }

    #[test]
    fn get_returns_none_out_of_range() {
        let deck = SlideDeck::builtin();
        assert!(deck.get(0).is_some());
        assert!(deck.get(4).is_none());
    }

    #[test]
    fn every_slide_asset_is_embedded() {
        let deck = SlideDeck::builtin();
        for slide in deck.iter() {
            let bytes = SlideDeck::asset_bytes(slide.asset).expect("asset should be embedded");
            assert!(!bytes.is_empty());
        }
    }

    #[test]
    fn unknown_asset_reports_image_error() {
        let err = SlideDeck::asset_bytes("missing.png").unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }
}
