//! Game settings and preferences
//!
//! Persisted as JSON in a dot-file under the user's home directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::audio::AudioBus;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Start with audio muted
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    fn storage_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".teapot_rush_settings.json")
    }

    /// Load settings, falling back to defaults on any failure.
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::storage_path()) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::storage_path().display());
                    settings
                }
                Err(err) => {
                    log::warn!("Settings file unreadable ({}); using defaults", err);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings; failures are logged, never fatal.
    pub fn save(&self) {
        let path = Self::storage_path();
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(&path, json) {
                    log::warn!("Failed to save settings to {}: {}", path.display(), err);
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(err) => log::warn!("Failed to serialize settings: {}", err),
        }
    }

    /// Push volume preferences onto an audio bus.
    pub fn apply_audio(&self, bus: &mut AudioBus) {
        bus.set_master_volume(self.master_volume);
        bus.set_sfx_volume(self.sfx_volume);
        bus.set_muted(self.muted);
    }
}
