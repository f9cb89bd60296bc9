//! Game settings
//!
//! Loaded from an optional JSON file. Every field has a default, so partial
//! files are fine and a missing or broken file simply yields the stock game.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Per-car motion constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarTuning {
    /// Top forward speed (pixels/frame); reverse is capped at half of this
    pub max_vel: f64,
    /// Degrees turned per frame
    pub rotation_vel: f64,
    /// Speed gained per frame of throttle
    pub acceleration: f64,
}

impl CarTuning {
    pub fn player() -> Self {
        Self {
            max_vel: PLAYER_MAX_VEL,
            rotation_vel: PLAYER_ROTATION_VEL,
            acceleration: ACCELERATION,
        }
    }

    pub fn computer() -> Self {
        Self {
            max_vel: COMPUTER_MAX_VEL,
            rotation_vel: COMPUTER_ROTATION_VEL,
            acceleration: ACCELERATION,
        }
    }
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame rate cap
    pub fps: u32,
    /// Seconds the loss/victory message is held before the round resets
    pub outcome_pause_secs: f64,

    // === Cars ===
    pub player: CarTuning,
    pub computer: CarTuning,
    /// Computer velocity added for every level past the first
    pub level_speedup: f64,

    // === Progression ===
    /// Levels to clear to win the game
    pub levels: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: FPS,
            outcome_pause_secs: OUTCOME_PAUSE_SECS,

            player: CarTuning::player(),
            computer: CarTuning::computer(),
            level_speedup: LEVEL_SPEEDUP,

            levels: LEVELS,
        }
    }
}

impl Settings {
    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Invalid settings JSON: {}", e);
                None
            }
        }
    }

    /// Load settings from a file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings from {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Some(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            None => Self::default(),
        }
    }

    /// Serialize to pretty JSON (for writing a template file)
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
