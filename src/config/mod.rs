//! Configuration file support for sketchbridge.
//!
//! This module handles loading and validating component settings from the
//! configuration file located at `~/.config/sketchbridge/config.toml`.
//! Settings include stroke defaults, shape appearance, gesture
//! interpretation, platform density policy, permission prompt strings, and
//! export defaults.
//!
//! If no config file exists, sensible defaults are used automatically. The
//! host application typically overrides individual fields at runtime
//! before constructing the editor.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{BorderStyle, ColorSpec, HostPlatform, ImageFormat, SourceImageMode};
pub use types::{
    ExportConfig, GestureConfig, PermissionConfig, PlatformConfig, ShapeStyleConfig,
    SourceImageConfig, StrokeConfig, TextOverlayConfig,
};

// Re-export for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use enums::{CoordinateSpace, OverlayOrder, TextAlignment};
#[allow(unused_imports)]
pub use types::Point;

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all component settings.
///
/// This is the root configuration type that gets deserialized from the
/// TOML file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// author = "alice"
///
/// [stroke]
/// color = "#1a6dd4"
/// width = 4.0
///
/// [gesture]
/// scale = 1.0
/// rotation = 0.0
/// touch_enabled = true
///
/// [platform]
/// platform = "android"
/// pixel_ratio = 2.0
///
/// [export]
/// folder = "Sketches"
/// format = "png"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Optional author tag attached to every sealed stroke
    #[serde(default)]
    pub author: Option<String>,

    /// Stroke (pen) defaults
    #[serde(default)]
    pub stroke: StrokeConfig,

    /// Shape appearance defaults
    #[serde(default)]
    pub shape: ShapeStyleConfig,

    /// Gesture interpretation settings
    #[serde(default)]
    pub gesture: GestureConfig,

    /// Host platform and display density
    #[serde(default)]
    pub platform: PlatformConfig,

    /// Permission dialog prompt strings
    #[serde(default)]
    pub permissions: PermissionConfig,

    /// Save/export defaults
    #[serde(default)]
    pub export: ExportConfig,

    /// Optional background image under the sketch layer
    #[serde(default)]
    pub source_image: Option<SourceImageConfig>,

    /// Static text overlays composited by the native surface
    #[serde(default)]
    pub text: Vec<TextOverlayConfig>,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning
    /// is logged.
    ///
    /// Validated ranges:
    /// - `stroke.width`: 1.0 - 20.0
    /// - `gesture.scale`: 0.1 - 10.0
    /// - `platform.pixel_ratio`: 0.5 - 4.0
    /// - `shape.border_stroke_width`: 0.0 - 20.0
    /// - text overlay `font_size`: 8.0 - 72.0
    pub fn validate_and_clamp(&mut self) {
        // Stroke width: 1.0 - 20.0
        if !(1.0..=20.0).contains(&self.stroke.width) {
            log::warn!(
                "Invalid stroke width {:.1}, clamping to 1.0-20.0 range",
                self.stroke.width
            );
            self.stroke.width = self.stroke.width.clamp(1.0, 20.0);
        }

        // Scale: 0.1 - 10.0 (a zero scale would divide gesture deltas away)
        if !(0.1..=10.0).contains(&self.gesture.scale) {
            log::warn!(
                "Invalid gesture scale {:.2}, clamping to 0.1-10.0 range",
                self.gesture.scale
            );
            self.gesture.scale = self.gesture.scale.clamp(0.1, 10.0);
        }

        // Pixel ratio: 0.5 - 4.0
        if !(0.5..=4.0).contains(&self.platform.pixel_ratio) {
            log::warn!(
                "Invalid pixel_ratio {:.2}, clamping to 0.5-4.0 range",
                self.platform.pixel_ratio
            );
            self.platform.pixel_ratio = self.platform.pixel_ratio.clamp(0.5, 4.0);
        }

        // Border stroke width: 0.0 - 20.0
        if !(0.0..=20.0).contains(&self.shape.border_stroke_width) {
            log::warn!(
                "Invalid border_stroke_width {:.1}, clamping to 0.0-20.0 range",
                self.shape.border_stroke_width
            );
            self.shape.border_stroke_width = self.shape.border_stroke_width.clamp(0.0, 20.0);
        }

        // Color specs: fall back to defaults with a warning
        if !self.stroke.color.is_valid() {
            log::warn!("Unparseable stroke color, falling back to #000000");
            self.stroke.color = ColorSpec::Spec("#000000".to_string());
        }
        if !self.shape.border_color.is_valid() {
            log::warn!("Unparseable shape border color, falling back to transparent");
            self.shape.border_color = ColorSpec::Spec("transparent".to_string());
        }

        // Text overlay font sizes: 8.0 - 72.0
        for overlay in &mut self.text {
            if let Some(size) = overlay.font_size
                && !(8.0..=72.0).contains(&size)
            {
                log::warn!(
                    "Invalid overlay font_size {:.1}, clamping to 8.0-72.0 range",
                    size
                );
                overlay.font_size = Some(size.clamp(8.0, 72.0));
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchbridge/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchbridge");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// If the file doesn't exist, returns a Config with default values.
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses a configuration from a TOML string without touching the
    /// filesystem. Values are not clamped; callers wanting validation use
    /// [`Config::validate_and_clamp`].
    pub fn from_toml(config_str: &str) -> Result<Self> {
        toml::from_str(config_str).context("Invalid TOML configuration")
    }

    /// Saves the current configuration to file.
    ///
    /// Serializes the config to TOML format and writes it to
    /// `~/.config/sketchbridge/config.toml`. Creates the parent directory
    /// if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        // Create directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, TRANSPARENT};

    #[test]
    fn defaults_mirror_component_prop_defaults() {
        let config = Config::default();

        assert_eq!(config.stroke.color.to_color(), BLACK);
        assert_eq!(config.stroke.width, 3.0);
        assert_eq!(config.gesture.scale, 1.0);
        assert_eq!(config.gesture.rotation, 0.0);
        assert!(config.gesture.touch_enabled);
        assert_eq!(config.shape.border_color.to_color(), TRANSPARENT);
        assert_eq!(config.shape.border_style, BorderStyle::Dashed);
        assert_eq!(config.shape.border_stroke_width, 1.0);
        assert_eq!(config.platform.platform, HostPlatform::Ios);
        assert!(config.author.is_none());
        assert!(config.permissions.dialog_title.is_empty());
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config = Config::from_toml(
            r#"
            author = "alice"

            [stroke]
            width = 6.0

            [platform]
            platform = "android"
            pixel_ratio = 2.0
            "#,
        )
        .unwrap();

        assert_eq!(config.author.as_deref(), Some("alice"));
        assert_eq!(config.stroke.width, 6.0);
        assert_eq!(config.stroke.color.to_color(), BLACK);
        assert_eq!(config.platform.platform, HostPlatform::Android);
        assert_eq!(config.platform.pixel_ratio, 2.0);
        assert!(config.gesture.touch_enabled);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::from_toml(
            r#"
            [stroke]
            width = 99.0

            [gesture]
            scale = 0.0

            [platform]
            pixel_ratio = 10.0
            "#,
        )
        .unwrap();

        config.validate_and_clamp();

        assert_eq!(config.stroke.width, 20.0);
        assert_eq!(config.gesture.scale, 0.1);
        assert_eq!(config.platform.pixel_ratio, 4.0);
    }

    #[test]
    fn bad_color_specs_fall_back_with_defaults() {
        let mut config = Config::from_toml(
            r##"
            [stroke]
            color = "#nothex"
            "##,
        )
        .unwrap();

        config.validate_and_clamp();
        assert_eq!(config.stroke.color.to_color(), BLACK);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = Config::default();
        config.author = Some("bob".to_string());
        config.gesture.rotation = 90.0;

        let serialized = toml::to_string_pretty(&config).unwrap();
        let reparsed = Config::from_toml(&serialized).unwrap();

        assert_eq!(reparsed.author.as_deref(), Some("bob"));
        assert_eq!(reparsed.gesture.rotation, 90.0);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(Config::from_toml("stroke = [not toml").is_err());
    }
}
