//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/phototree/phototree.toml`
//! 3. Environment variables: `PHOTOTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Raw settings for intermediate parsing (fields are Option to detect
/// "not specified", so a partial config file inherits the rest).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub marker: Option<String>,
    pub indent_step: Option<usize>,
    pub echo_tabs: Option<usize>,
}

/// Unified configuration for phototree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Marker repeated once per depth level in Display output
    pub marker: String,
    /// Depth increase per nesting level (children render at depth + step)
    pub indent_step: usize,
    /// Tab characters prefixed to every echoed script line
    pub echo_tabs: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            marker: "-".into(),
            indent_step: 2,
            echo_tabs: 4,
        }
    }
}

/// Get the XDG config directory for phototree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "phototree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("phototree.toml"))
}

fn load_raw_settings(path: &Path) -> Result<RawSettings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

impl Settings {
    /// Overlay wins if Some, otherwise keep self.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            marker: overlay.marker.clone().unwrap_or_else(|| self.marker.clone()),
            indent_step: overlay.indent_step.unwrap_or(self.indent_step),
            echo_tabs: overlay.echo_tabs.unwrap_or(self.echo_tabs),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/phototree/phototree.toml`
    /// 3. Environment variables: `PHOTOTREE_*` prefix (explicit override)
    pub fn load() -> Result<Self, ConfigError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;

        Ok(current)
    }

    /// Apply PHOTOTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ConfigError> {
        // Use config crate just for env var parsing
        let builder = Config::builder().add_source(Environment::with_prefix("PHOTOTREE"));

        let config = builder
            .build()
            .map_err(|e| ConfigError::Message(e.to_string()))?;

        if let Ok(val) = config.get_string("marker") {
            settings.marker = val;
        }
        if let Ok(val) = config.get_int("indent_step") {
            settings.indent_step = val.max(0) as usize;
        }
        if let Ok(val) = config.get_int("echo_tabs") {
            settings.echo_tabs = val.max(0) as usize;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Message(e.to_string()))
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# phototree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/phototree/phototree.toml
#   Env:    PHOTOTREE_* environment variables (explicit overrides)

# Marker repeated once per depth level in Display output
# marker = "-"

# Depth increase per nesting level
# indent_step = 2

# Tab characters prefixed to every echoed script line
# echo_tabs = 4
"#
        .to_string()
    }
}
