use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Window preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSettings {
    pub width: i32,
    pub height: i32,
    pub fullscreen: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 960,
            height: 720,
            fullscreen: false,
        }
    }
}

/// Key bindings as canonical key identifier names.
///
/// Names are matched case-insensitively when polled, so hand-edited config
/// files may use any casing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyBindings {
    /// Move the ship left while held.
    pub left: String,
    /// Move the ship right while held.
    pub right: String,
    /// Fire one shot per press.
    pub fire: String,
    /// Toggle pause once per press.
    pub pause: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: "Left".to_string(),
            right: "Right".to_string(),
            fire: "Z".to_string(),
            pause: "P".to_string(),
        }
    }
}

/// User settings for the game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub bindings: KeyBindings,
}

impl Settings {
    /// Load settings from the platform config directory, falling back to
    /// defaults if the file is missing or unreadable.
    pub fn load() -> Self {
        Self::settings_path()
            .and_then(Self::load_from)
            .unwrap_or_default()
    }

    /// Load settings from a specific path.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save settings to the platform config directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(Self::settings_path()?)
    }

    /// Save settings to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn settings_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("dev", "nova", "nova") {
            Ok(proj_dirs.config_dir().join("settings.json"))
        } else {
            Ok(PathBuf::from(".nova-settings.json"))
        }
    }
}
