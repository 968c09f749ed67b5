//! Configuration file handling for the CLI.
//!
//! Settings live in `$XDG_CONFIG_HOME/clipfill/config.toml` following the
//! XDG Base Directory Specification, unless `--config` points elsewhere.
//! Every field is optional; command-line flags and environment variables
//! win over the file.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::dialog::DialogKind;

/// CLI configuration stored on disk
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Clipboard section
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    /// Dialog section
    #[serde(default)]
    pub dialog: DialogConfig,
    /// Round-trip test section
    #[serde(default)]
    pub round_trip: RoundTripConfig,
}

/// Clipboard configuration
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ClipboardConfig {
    /// Backend name, e.g. "xclip"
    pub backend: Option<String>,
}

/// Dialog configuration
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DialogConfig {
    /// How dialogs are shown
    pub kind: Option<DialogKind>,
}

/// Round-trip test configuration
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RoundTripConfig {
    /// Text written to the clipboard
    pub text: Option<String>,
}

impl Config {
    /// Get the default configuration file path.
    ///
    /// Returns `$XDG_CONFIG_HOME/clipfill/config.toml` on Linux,
    /// appropriate paths on other platforms.
    pub fn default_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("org", "clipfill", "clipfill")
            .context("Failed to determine config directory")?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Resolve the path to use: `explicit` if given, the default otherwise.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load configuration from `path`.
    ///
    /// Returns default configuration if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to `path`.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
