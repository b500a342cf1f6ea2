//! Configuration enum types.

use crate::draw::{Color, color::*};
use log::warn;
use serde::{Deserialize, Serialize};

/// Color specification - either a color string or RGB values.
///
/// # Examples
/// ```toml
/// # Hex literal
/// color = "#ff8000"
///
/// # Named color or keyword
/// border_color = "transparent"
///
/// # Custom RGB color (0-255 per component)
/// color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Hex literal (`#RGB`, `#RRGGBB`, `#RRGGBBAA`), `transparent`, or a
    /// named color: red, green, blue, yellow, orange, pink, white, black
    Spec(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// String specs are parsed with `Color::parse()`. Unparseable specs
    /// default to black with a warning. RGB arrays are converted from
    /// 0-255 range to 0.0-1.0 range with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Spec(spec) => Color::parse(spec).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", spec);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            },
        }
    }

    /// Whether the spec resolves without falling back.
    pub fn is_valid(&self) -> bool {
        match self {
            ColorSpec::Spec(spec) => Color::parse(spec).is_some(),
            ColorSpec::Rgb(_) => true,
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(spec: &str) -> Self {
        ColorSpec::Spec(spec.to_string())
    }
}

/// Host platform family the component is bridged into.
///
/// Decides the screen-density policy: one family addresses the native
/// surface in logical points, the other in physical pixels.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HostPlatform {
    /// Native coordinates are logical points; density multiplier is 1
    #[default]
    Ios,
    /// Native coordinates are physical pixels; density multiplier is the
    /// device pixel ratio
    Android,
}

impl HostPlatform {
    /// The multiplier applied to coordinates sent across the bridge.
    pub fn screen_scale(self, pixel_ratio: f64) -> f64 {
        match self {
            HostPlatform::Ios => 1.0,
            HostPlatform::Android => pixel_ratio,
        }
    }
}

/// Image format for save and export operations.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Jpg,
}

impl ImageFormat {
    /// The wire name the native surface expects, doubling as the file
    /// extension.
    pub fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpg => "jpg",
        }
    }
}

/// Border stroke style for selected shapes.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    #[default]
    Dashed,
    Solid,
}

/// How a background source image is fitted into the view.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceImageMode {
    #[default]
    AspectFill,
    AspectFit,
    ScaleToFill,
}

/// Stacking order between text overlays and the sketch layer.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayOrder {
    #[default]
    TextOnSketch,
    SketchOnText,
}

/// Coordinate space a text overlay position is expressed in.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinateSpace {
    /// Logical points from the view origin
    #[default]
    Absolute,
    /// Fractions of the view size (0.0 - 1.0)
    Ratio,
}

/// Horizontal alignment for text overlays.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_spec_resolves_strings_and_rgb() {
        assert_eq!(ColorSpec::from("#ff0000").to_color(), RED);
        assert_eq!(ColorSpec::from("transparent").to_color(), TRANSPARENT);
        assert_eq!(ColorSpec::Rgb([0, 255, 0]).to_color(), GREEN);
    }

    #[test]
    fn unparseable_color_spec_falls_back_to_black() {
        let spec = ColorSpec::from("definitely-not-a-color");
        assert!(!spec.is_valid());
        assert_eq!(spec.to_color(), BLACK);
    }

    #[test]
    fn screen_scale_follows_platform_policy() {
        assert_eq!(HostPlatform::Ios.screen_scale(3.0), 1.0);
        assert_eq!(HostPlatform::Android.screen_scale(3.0), 3.0);
    }

    #[test]
    fn image_format_wire_names() {
        assert_eq!(ImageFormat::Png.as_str(), "png");
        assert_eq!(ImageFormat::Jpg.as_str(), "jpg");
    }
}
