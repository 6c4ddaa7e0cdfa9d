//! Game settings and preferences
//!
//! Read from a JSON file at startup. Every field has a default, so a partial
//! file only overrides what it names.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::TARGET_FPS;
use crate::error::{Error, Result};
use crate::sim::MatchConfig;

/// Environment variable naming an explicit settings file
pub const SETTINGS_ENV: &str = "PONGIVERSE_SETTINGS";
/// Settings file looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "pongiverse.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding textures, sounds, music and the font
    pub asset_dir: PathBuf,
    pub window_title: String,
    pub target_fps: u32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,

    /// Court geometry, speeds and scoring rules
    pub rules: MatchConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets"),
            window_title: "Pongiverse".to_string(),
            target_fps: TARGET_FPS,

            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,

            rules: MatchConfig::default(),
        }
    }
}

impl Settings {
    /// Load from `$PONGIVERSE_SETTINGS`, else `pongiverse.json`, else defaults
    pub fn load() -> Result<Self> {
        let (path, explicit) = match std::env::var_os(SETTINGS_ENV) {
            Some(path) => (PathBuf::from(path), true),
            None => (PathBuf::from(DEFAULT_SETTINGS_FILE), false),
        };

        match Self::load_from(&path) {
            Err(Error::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound && !explicit => {
                log::info!("No {} found, using default settings", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Load settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = serde_json::from_str(&json).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.rules.validate().map_err(|reason| Error::Config {
            path: path.to_path_buf(),
            reason,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings as pretty-printed JSON
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
