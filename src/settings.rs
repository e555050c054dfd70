//! Player preferences
//!
//! Persisted as JSON next to the game. Gameplay tuning is NOT here; those are
//! fixed constants in [`crate::consts`].

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SEED;
use crate::sim::CollisionMode;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Narrow-phase collision strategy
    pub collision_mode: CollisionMode,
    /// Spawner seed; `None` uses the built-in default
    pub seed: Option<u64>,
    /// Let the autopilot play
    pub idle_mode: bool,
    /// Trace a summary line for every rendered frame
    pub log_frames: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            collision_mode: CollisionMode::PixelMask,
            seed: None,
            idle_mode: false,
            log_frames: false,
        }
    }
}

impl Settings {
    /// Default file name
    pub const FILE_NAME: &'static str = "eggfall_settings.json";

    /// Seed to start the run with
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load settings, falling back to defaults if missing or malformed
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn write(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }

    /// Save settings; failures are logged, never fatal
    pub fn save(&self, path: &Path) {
        match self.write(path) {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Could not save settings to {}: {}", path.display(), e),
        }
    }
}
