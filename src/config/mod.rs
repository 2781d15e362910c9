//! Configuration file support for huewheel.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/huewheel/config.toml`. Settings cover the selector marker size,
//! the initially selected color and the look of the rendered preview.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{PickerConfig, PreviewConfig, SelectorConfig};

use crate::draw::{BLACK, Color, Hsv};
use crate::draw::render::MarkerStyle;
use crate::wheel::SelectorSize;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest accepted selector half-size in pixels.
const MAX_SELECTOR_HALF_SIZE: i32 = 100;

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [selector]
/// half_width = 12
/// half_height = 12
///
/// [picker]
/// initial_color = "white"
///
/// [preview]
/// show_marker = true
/// marker_color = "black"
/// marker_thickness = 2.0
/// ```
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, JsonSchema)]
pub struct Config {
    /// Selector marker size
    #[serde(default)]
    pub selector: SelectorConfig,

    /// Picker behaviour
    #[serde(default)]
    pub picker: PickerConfig,

    /// Preview image appearance
    #[serde(default)]
    pub preview: PreviewConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `selector.half_width`, `selector.half_height`: 0 - 100
    /// - `preview.marker_thickness`: 0.5 - 10.0
    /// - color specs must name a known color, otherwise the default is used
    fn validate_and_clamp(&mut self) {
        if !(0..=MAX_SELECTOR_HALF_SIZE).contains(&self.selector.half_width) {
            log::warn!(
                "Invalid selector half_width {}, clamping to 0-{} range",
                self.selector.half_width,
                MAX_SELECTOR_HALF_SIZE
            );
            self.selector.half_width = self.selector.half_width.clamp(0, MAX_SELECTOR_HALF_SIZE);
        }

        if !(0..=MAX_SELECTOR_HALF_SIZE).contains(&self.selector.half_height) {
            log::warn!(
                "Invalid selector half_height {}, clamping to 0-{} range",
                self.selector.half_height,
                MAX_SELECTOR_HALF_SIZE
            );
            self.selector.half_height =
                self.selector.half_height.clamp(0, MAX_SELECTOR_HALF_SIZE);
        }

        // NaN fails the range check too; clamp() would keep it, so reset explicitly
        if !(0.5..=10.0).contains(&self.preview.marker_thickness) {
            log::warn!(
                "Invalid marker_thickness {:.1}, clamping to 0.5-10.0 range",
                self.preview.marker_thickness
            );
            self.preview.marker_thickness = if self.preview.marker_thickness.is_nan() {
                PreviewConfig::default().marker_thickness
            } else {
                self.preview.marker_thickness.clamp(0.5, 10.0)
            };
        }

        if !self.picker.initial_color.is_valid() {
            log::warn!(
                "Invalid initial_color {:?}, falling back to 'white'",
                self.picker.initial_color
            );
            self.picker.initial_color = PickerConfig::default().initial_color;
        }

        if !self.preview.marker_color.is_valid() {
            log::warn!(
                "Invalid marker_color {:?}, falling back to 'black'",
                self.preview.marker_color
            );
            self.preview.marker_color = PreviewConfig::default().marker_color;
        }

        if self
            .preview
            .background
            .as_ref()
            .is_some_and(|spec| !spec.is_valid())
        {
            log::warn!(
                "Invalid preview background {:?}, using a transparent background",
                self.preview.background
            );
            self.preview.background = None;
        }
    }

    /// Marker half-size as used by the wheel geometry.
    pub fn selector_size(&self) -> SelectorSize {
        SelectorSize::new(self.selector.half_width, self.selector.half_height)
    }

    /// Color the picker should show on startup.
    pub fn initial_color(&self) -> Hsv {
        self.picker.initial_color.to_color().to_hsv()
    }

    /// Ring style for the preview renderer.
    pub fn marker_style(&self) -> MarkerStyle {
        MarkerStyle {
            visible: self.preview.show_marker,
            color: self.preview.marker_color.to_color_or(BLACK),
            thickness: self.preview.marker_thickness,
        }
    }

    /// Background fill for the preview, `None` for transparent.
    pub fn preview_background(&self) -> Option<Color> {
        self.preview
            .background
            .as_ref()
            .map(ColorSpec::to_color)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/huewheel/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("huewheel");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, or returns defaults if it doesn't exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Serializes the config to TOML and writes it to `config_path`.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the config cannot
    /// be serialized, or the file cannot be written.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's
    /// config directory and returns the path written.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(&config_path, Self::example_toml())
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// Documented example configuration shipped with the crate.
    pub fn example_toml() -> &'static str {
        include_str!("../../config.example.toml")
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
