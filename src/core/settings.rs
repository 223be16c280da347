//! Settings persistence
//!
//! [`AppSettings`] is stored as JSON in the user's configuration directory,
//! e.g. `~/.config/tapchess/settings.json` on Linux. Loading never fails from
//! the caller's point of view: a missing or broken file yields the defaults and
//! a log line. Changes made at runtime are written back by
//! [`save_settings_system`].

use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tapchess_core::PawnPolicy;

use super::error::{CoreError, CoreResult};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Backend used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// How long the splash screen stays up
pub const DEFAULT_SPLASH_MILLIS: u64 = 2000;

/// User preferences that survive restarts
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Base URL of the identity and record backend
    pub api_base_url: String,
    /// 0.0 to 1.0
    pub master_volume: f32,
    pub splash_millis: u64,
    /// Pawn move shapes let through to the rules engine
    pub pawn_policy: PawnPolicy,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            master_volume: 1.0,
            splash_millis: DEFAULT_SPLASH_MILLIS,
            pawn_policy: PawnPolicy::default(),
        }
    }
}

impl AppSettings {
    pub fn validate(&self) -> CoreResult<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(CoreError::InvalidSetting {
                field: "api_base_url",
                message: "must not be empty".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.master_volume) {
            return Err(CoreError::InvalidSetting {
                field: "master_volume",
                message: format!("{} is outside 0.0..=1.0", self.master_volume),
            });
        }
        Ok(())
    }

    /// Read and validate settings from `path`
    pub fn load_from(path: &Path) -> CoreResult<Self> {
        let contents = fs::read_to_string(path)?;
        let settings: AppSettings = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Write settings to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Path to `settings.json` in the user's configuration directory.
///
/// Falls back to a local `settings.json` if the system config dir cannot be found.
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "tapchess", "TapChess") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Load settings, using defaults when the file is missing or unusable
pub fn load_settings() -> AppSettings {
    let path = settings_path();
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return AppSettings::default();
    }

    match AppSettings::load_from(&path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!("[SETTINGS] {:?}: {}. Using defaults.", path, e);
            AppSettings::default()
        }
    }
}

/// Save settings to file when they change after startup
pub fn save_settings_system(settings: Res<AppSettings>) {
    if !settings.is_changed() || settings.is_added() {
        return;
    }

    let path = settings_path();
    match settings.save_to(&path) {
        Ok(()) => info!("[SETTINGS] Saved settings to {:?}", path),
        Err(e) => error!("[SETTINGS] Failed to save settings to {:?}: {}", path, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("tapchess-{}", uuid::Uuid::new_v4()))
            .join(SETTINGS_FILENAME)
    }

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.splash_millis, 2000);
        assert_eq!(settings.pawn_policy, PawnPolicy::restricted());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path();
        let settings = AppSettings {
            api_base_url: "https://chess.example".to_string(),
            master_volume: 0.25,
            splash_millis: 500,
            pawn_policy: PawnPolicy::permissive(),
        };
        settings.save_to(&path).unwrap();
        assert_eq!(AppSettings::load_from(&path).unwrap(), settings);

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{"master_volume": 0.5}"#).unwrap();
        assert_eq!(settings.master_volume, 0.5);
        assert_eq!(settings.api_base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AppSettings::load_from(&scratch_path()).unwrap_err();
        assert!(matches!(err, CoreError::SettingsIo(_)));
    }

    #[test]
    fn test_out_of_range_volume_rejected() {
        let settings = AppSettings {
            master_volume: 3.0,
            ..AppSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(CoreError::InvalidSetting { field: "master_volume", .. })
        ));
    }
}
