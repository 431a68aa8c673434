// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving motion preferences to a `settings.toml` file.
//!
//! All fields are optional in the file; accessors clamp values into supported
//! ranges so a hand-edited config cannot request nonsensical motion.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedGallery";

/// Spring stiffness applied to slide transitions and the cursor follower.
pub const DEFAULT_TRANSITION_STIFFNESS: f32 = 300.0;
pub const MIN_TRANSITION_STIFFNESS: f32 = 10.0;
pub const MAX_TRANSITION_STIFFNESS: f32 = 2000.0;

/// Spring damping applied to slide transitions and the cursor follower.
pub const DEFAULT_TRANSITION_DAMPING: f32 = 30.0;
pub const MIN_TRANSITION_DAMPING: f32 = 1.0;
pub const MAX_TRANSITION_DAMPING: f32 = 200.0;

/// Swipe power (|drag offset| × release velocity) required to paginate.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 10_000.0;
pub const MIN_SWIPE_THRESHOLD: f32 = 100.0;
pub const MAX_SWIPE_THRESHOLD: f32 = 100_000.0;

/// Delay between the star click and the social links reveal.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 1000;
pub const MIN_REVEAL_DELAY_MS: u64 = 100;
pub const MAX_REVEAL_DELAY_MS: u64 = 10_000;

/// How many slides ahead of the current one to decode in the background.
pub const DEFAULT_PRELOAD_AHEAD: usize = 1;
pub const MAX_PRELOAD_AHEAD: usize = 4;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub transition_stiffness: Option<f32>,
    #[serde(default)]
    pub transition_damping: Option<f32>,
    #[serde(default)]
    pub swipe_threshold: Option<f32>,
    #[serde(default)]
    pub reveal_delay_ms: Option<u64>,
    #[serde(default)]
    pub preload_ahead: Option<usize>,
}

impl Config {
    /// Spring stiffness, clamped to the supported range.
    #[must_use]
    pub fn transition_stiffness(&self) -> f32 {
        self.transition_stiffness
            .unwrap_or(DEFAULT_TRANSITION_STIFFNESS)
            .clamp(MIN_TRANSITION_STIFFNESS, MAX_TRANSITION_STIFFNESS)
    }

    /// Spring damping, clamped to the supported range.
    #[must_use]
    pub fn transition_damping(&self) -> f32 {
        self.transition_damping
            .unwrap_or(DEFAULT_TRANSITION_DAMPING)
            .clamp(MIN_TRANSITION_DAMPING, MAX_TRANSITION_DAMPING)
    }

    /// Swipe power threshold, clamped to the supported range.
    #[must_use]
    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD)
            .clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD)
    }

    /// Reveal delay in milliseconds, clamped to the supported range.
    #[must_use]
    pub fn reveal_delay_ms(&self) -> u64 {
        self.reveal_delay_ms
            .unwrap_or(DEFAULT_REVEAL_DELAY_MS)
            .clamp(MIN_REVEAL_DELAY_MS, MAX_REVEAL_DELAY_MS)
    }

    /// Number of slides to decode ahead of the current index.
    #[must_use]
    pub fn preload_ahead(&self) -> usize {
        self.preload_ahead
            .unwrap_or(DEFAULT_PRELOAD_AHEAD)
            .clamp(1, MAX_PRELOAD_AHEAD)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
