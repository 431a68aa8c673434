// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is an animated full-screen image carousel built with the
//! Iced GUI framework.
//!
//! It demonstrates spring-based slide transitions, swipe navigation, a
//! pointer-reactive parallax, and background image decoding over a small
//! compiled-in slide deck.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gesture;
pub mod media;
pub mod motion;
pub mod navigation;
pub mod prefetch;
pub mod reveal;
pub mod slides;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
