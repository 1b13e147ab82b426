//! Configuration management for the application.
//!
//! Handles loading, validating, and saving the configuration in TOML
//! format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::APP_NAME;
use crate::tui::theme::ThemeId;

/// Longest accepted theme crossfade, in milliseconds.
const MAX_TRANSITION_MS: u64 = 60_000;

fn default_transition_ms() -> u64 {
    700
}

fn default_mouse() -> bool {
    true
}

/// UI preferences configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Startup theme; `None` falls back to OS dark/light detection
    #[serde(default)]
    pub theme: Option<ThemeId>,
    /// Theme crossfade duration in milliseconds (0 switches instantly)
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Capture mouse movement for the reactive background
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: None,
            transition_ms: default_transition_ms(),
            mouse: default_mouse(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Folio/config.toml`
/// - macOS: `~/Library/Application Support/Folio/config.toml`
/// - Windows: `%APPDATA%\Folio\config.toml`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Deletes the config file if present.
    pub fn reset() -> Result<()> {
        let config_path = Self::config_file_path()?;
        if config_path.exists() {
            fs::remove_file(&config_path).context(format!(
                "Failed to remove config file: {}",
                config_path.display()
            ))?;
        }
        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.ui.transition_ms > MAX_TRANSITION_MS {
            anyhow::bail!(
                "transition_ms must be at most {MAX_TRANSITION_MS} (got {})",
                self.ui.transition_ms
            );
        }
        Ok(())
    }

    /// The startup theme: the configured one, or OS detection.
    #[must_use]
    pub fn startup_theme(&self) -> ThemeId {
        self.ui.theme.unwrap_or_else(ThemeId::detect)
    }
}
