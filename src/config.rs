//! Settings persistence using a JSON file.
//!
//! Settings live in `settings.json` (working directory by default) with a
//! single recognized key:
//!
//! ```json
//! { "download_directory": "downloads" }
//! ```
//!
//! Loading never fails: a missing, unreadable, or malformed file yields the
//! defaults so the tool always starts. Saving is atomic (temp + rename).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default settings file name
pub const SETTINGS_FILE: &str = "settings.json";

/// User-tunable settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory downloaded tracks are saved into
    pub download_directory: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            download_directory: PathBuf::from("downloads"),
        }
    }
}

/// Handle to the settings file.
///
/// Commands hold one of these and re-load right before each download, so
/// edits made while the tool is running are picked up.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `settings.json` in the working directory
    pub fn open_default() -> Self {
        Self::new(SETTINGS_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings from disk.
    ///
    /// Returns default settings if the file doesn't exist or can't be parsed.
    /// Logs warnings but doesn't fail - we always return usable settings.
    pub fn load(&self) -> Settings {
        if !self.path.exists() {
            tracing::info!("No settings file found at {:?}, using defaults", self.path);
            return Settings::default();
        }

        match std::fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    tracing::debug!("Loaded settings from {:?}", self.path);
                    settings
                }
                Err(e) => {
                    tracing::error!("Failed to parse settings file {:?}: {}", self.path, e);
                    tracing::warn!("Using default settings");
                    Settings::default()
                }
            },
            Err(e) => {
                tracing::error!("Failed to read settings file {:?}: {}", self.path, e);
                Settings::default()
            }
        }
    }

    /// Save settings to disk.
    ///
    /// Creates the parent directory if needed and writes atomically
    /// (write to temp, then rename).
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            std::fs::create_dir_all(dir)
                .map_err(|e| SettingsError::CreateDir(dir.to_path_buf(), e))?;
        }

        let contents = serde_json::to_string_pretty(settings).map_err(SettingsError::Serialize)?;

        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, &contents)
            .map_err(|e| SettingsError::Write(temp_path.clone(), e))?;
        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| SettingsError::Rename(temp_path, self.path.clone(), e))?;

        tracing::info!("Saved settings to {:?}", self.path);
        Ok(())
    }
}

/// Expand a leading `~` to the user's home directory.
///
/// Plain `~` and `~/sub/dir` are expanded; anything else passes through
/// unchanged.
pub fn expand_home(input: &str) -> PathBuf {
    if input == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = input.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(input)
}

// ============================================================================
// Error Types
// ============================================================================

/// Settings persistence errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to create settings directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize settings: {0}")]
    Serialize(serde_json::Error),

    #[error("Failed to write settings to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================
