//! Configuration module for the help formatter.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `HELPFMT_` and use double
//! underscores to separate nested levels:
//! - `HELPFMT_LAYOUT__WIDTH=100` sets `layout.width`
//! - `HELPFMT_COLOR__MODE=never` sets `color.mode`
//! - `HELPFMT_THEME__TITLE=blue.bold` sets `theme.title`

use crate::display::ColorChoice;
use crate::display::help::{DEFAULT_INDENTATION, DEFAULT_WIDTH};
use crate::display::theme::Theme;
use crate::error::{HelpError, HelpResult};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding the settings file.
pub const CONFIG_DIR: &str = ".helpfmt";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "HELPFMT_";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Global debug mode
    #[serde(default = "default_false")]
    pub debug: bool,

    /// Line width and indentation
    #[serde(default)]
    pub layout: LayoutConfig,

    /// When to emit color
    #[serde(default)]
    pub color: ColorConfig,

    /// Styles for titles, commands and options
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Maximum line width, indentation included
    #[serde(default = "default_width")]
    pub width: usize,

    /// Number of spaces in front of wrapped text
    #[serde(default = "default_indentation")]
    pub indentation: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct ColorConfig {
    /// "auto", "always" or "never"
    #[serde(default)]
    pub mode: ColorChoice,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Dotted console style for section titles
    #[serde(default = "default_title_style")]
    pub title: String,

    /// Dotted console style for command names
    #[serde(default = "default_command_style")]
    pub command: String,

    /// Dotted console style for option names
    #[serde(default = "default_option_style")]
    pub option: String,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_false() -> bool {
    false
}
fn default_width() -> usize {
    DEFAULT_WIDTH
}
fn default_indentation() -> usize {
    DEFAULT_INDENTATION
}
fn default_title_style() -> String {
    "red.bold".to_string()
}
fn default_command_style() -> String {
    "green".to_string()
}
fn default_option_style() -> String {
    "yellow".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            debug: false,
            layout: LayoutConfig::default(),
            color: ColorConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            indentation: default_indentation(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            title: default_title_style(),
            command: default_command_style(),
            option: default_option_style(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> HelpResult<Self> {
        // Try to find the workspace root by looking for .helpfmt directory
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join("settings.toml"));

        tracing::debug!("loading settings from {}", config_path.display());
        Self::extract(Self::figment(&config_path, ENV_PREFIX))
    }

    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<Path>) -> HelpResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(HelpError::Config {
                reason: format!("configuration file '{}' does not exist", path.display()),
            });
        }

        tracing::debug!("loading settings from {}", path.display());
        Self::extract(Self::figment(path, ENV_PREFIX))
    }

    /// Defaults, then the TOML file, then prefixed environment variables.
    fn figment(config_path: &Path, env_prefix: &str) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(config_path))
            // Double underscore separates nested levels, single underscores
            // stay inside field names
            .merge(Env::prefixed(env_prefix).map(|key| {
                key.as_str()
                    .to_lowercase()
                    .replace("__", ".")
                    .into()
            }))
    }

    fn extract(figment: Figment) -> HelpResult<Self> {
        let settings: Settings = figment.extract().map_err(Box::new)?;
        tracing::trace!("effective settings: {settings:?}");
        Ok(settings)
    }

    /// Find the settings file by searching from the current directory up
    fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .map(|ancestor| ancestor.join(CONFIG_DIR))
            .find(|dir| dir.is_dir())
            .map(|dir| dir.join("settings.toml"))
    }

    /// Check that the layout leaves room for text and the theme parses.
    pub fn validate(&self) -> HelpResult<()> {
        if self.layout.width <= self.layout.indentation {
            return Err(HelpError::InvalidLayout {
                width: self.layout.width,
                indentation: self.layout.indentation,
            });
        }
        Theme::from_config(&self.theme)?;
        Ok(())
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> HelpResult<()> {
        let path = path.as_ref();
        let toml_string = toml::to_string_pretty(self).map_err(|e| HelpError::Config {
            reason: e.to_string(),
        })?;
        write_file(path, &toml_string)
    }

    /// Create a default settings file in the current directory
    pub fn init_config_file(force: bool) -> HelpResult<PathBuf> {
        let config_path = PathBuf::from(CONFIG_DIR).join("settings.toml");
        Self::init_config_file_at(&config_path, force)?;
        Ok(config_path)
    }

    /// Write the commented settings template to `path`
    pub fn init_config_file_at(path: &Path, force: bool) -> HelpResult<()> {
        if !force && path.exists() {
            return Err(HelpError::ConfigExists {
                path: path.to_path_buf(),
            });
        }

        let template = format!(
            r#"# helpfmt configuration file

# Version of the configuration schema
version = 1

# Log debug information to stderr
debug = false

[layout]
# Maximum line width, indentation included
width = {DEFAULT_WIDTH}

# Number of spaces in front of wrapped text
indentation = {DEFAULT_INDENTATION}

[color]
# "auto" colors only terminals without NO_COLOR set
# "always" and "never" override detection
mode = "auto"

[theme]
# Dotted console styles, e.g. "red.bold", "green", "on_black.white", "208"
title = "{}"
command = "{}"
option = "{}"
"#,
            default_title_style(),
            default_command_style(),
            default_option_style(),
        );

        write_file(path, &template)?;
        tracing::debug!("wrote settings template to {}", path.display());
        Ok(())
    }
}

fn write_file(path: &Path, contents: &str) -> HelpResult<()> {
    let wrap = |source: std::io::Error| HelpError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(wrap)?;
    }
    std::fs::write(path, contents).map_err(wrap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.version, 1);
        assert!(!settings.debug);
        assert_eq!(settings.layout.width, 78);
        assert_eq!(settings.layout.indentation, 4);
        assert_eq!(settings.color.mode, ColorChoice::Auto);
        assert_eq!(settings.theme.title, "red.bold");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_from_toml_file() {
        println!("\n=== TEST: Settings from TOML ===");

        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r#"
[layout]
width = 100

[color]
mode = "never"
"#,
        )
        .unwrap();

        let settings = Settings::extract(Settings::figment(&config_path, "HELPFMT_TEST_NONE_"))
            .unwrap();

        assert_eq!(settings.layout.width, 100);
        // Not in the file, default value
        assert_eq!(settings.layout.indentation, 4);
        assert_eq!(settings.color.mode, ColorChoice::Never);
        assert_eq!(settings.theme, ThemeConfig::default());

        println!("  ✓ width={}, mode={:?}", settings.layout.width, settings.color.mode);
        println!("=== TEST PASSED ===");
    }

    #[test]
    fn test_env_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[layout]\nwidth = 100\nindentation = 8\n").unwrap();

        // Unique prefix so parallel tests never observe these variables
        unsafe {
            std::env::set_var("HELPFMT_TEST_ENV_LAYOUT__WIDTH", "60");
            std::env::set_var("HELPFMT_TEST_ENV_THEME__TITLE", "blue.bold");
        }

        let settings =
            Settings::extract(Settings::figment(&config_path, "HELPFMT_TEST_ENV_")).unwrap();

        assert_eq!(settings.layout.width, 60);
        assert_eq!(settings.layout.indentation, 8);
        assert_eq!(settings.theme.title, "blue.bold");

        unsafe {
            std::env::remove_var("HELPFMT_TEST_ENV_LAYOUT__WIDTH");
            std::env::remove_var("HELPFMT_TEST_ENV_THEME__TITLE");
        }
    }

    #[test]
    fn test_load_from_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Settings::load_from(temp_dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, HelpError::Config { .. }));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[layout]\nwidth = \"wide\"\n").unwrap();

        let err = Settings::extract(Settings::figment(&config_path, "HELPFMT_TEST_NONE_"))
            .unwrap_err();
        assert!(matches!(err, HelpError::Config { .. }));
    }

    #[test]
    fn test_validate_layout() {
        let mut settings = Settings::default();
        settings.layout.width = 10;
        settings.layout.indentation = 10;
        assert!(matches!(
            settings.validate(),
            Err(HelpError::InvalidLayout {
                width: 10,
                indentation: 10
            })
        ));

        settings.layout.indentation = 9;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_theme() {
        let mut settings = Settings::default();
        settings.theme.command = "greenish".to_string();
        assert!(matches!(
            settings.validate(),
            Err(HelpError::InvalidStyle { .. })
        ));
    }

    #[test]
    fn test_template_round_trips_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_DIR).join("settings.toml");

        Settings::init_config_file_at(&config_path, false).unwrap();
        let loaded: Settings = toml::from_str(&fs::read_to_string(&config_path).unwrap()).unwrap();
        assert_eq!(loaded, Settings::default());

        let err = Settings::init_config_file_at(&config_path, false).unwrap_err();
        assert!(matches!(err, HelpError::ConfigExists { .. }));
        assert!(Settings::init_config_file_at(&config_path, true).is_ok());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("out").join("settings.toml");

        let mut settings = Settings::default();
        settings.layout.width = 120;
        settings.color.mode = ColorChoice::Always;
        settings.save(&config_path).unwrap();

        let loaded = Settings::extract(Settings::figment(&config_path, "HELPFMT_TEST_NONE_"))
            .unwrap();
        assert_eq!(loaded, settings);
    }
}
