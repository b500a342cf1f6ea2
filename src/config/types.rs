//! Configuration type definitions.

use super::enums::{
    BorderStyle, ColorSpec, CoordinateSpace, HostPlatform, ImageFormat, OverlayOrder,
    SourceImageMode, TextAlignment,
};
use serde::{Deserialize, Serialize};

/// Stroke defaults.
///
/// Controls the pen used for freehand gestures. The host application can
/// change these between gestures; a stroke captures them at gesture start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrokeConfig {
    /// Pen color - hex literal, `transparent`, a named color, or an RGB array
    #[serde(default = "default_stroke_color")]
    pub color: ColorSpec,

    /// Pen width in logical points (valid range: 1.0 - 20.0)
    #[serde(default = "default_stroke_width")]
    pub width: f64,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            color: default_stroke_color(),
            width: default_stroke_width(),
        }
    }
}

/// Shape appearance defaults forwarded to the native surface.
///
/// The border settings style the selection chrome around a manipulated
/// shape; fill color and stroke width mirror the pen settings at mount
/// time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeStyleConfig {
    /// Selection border color
    #[serde(default = "default_border_color")]
    pub border_color: ColorSpec,

    /// Selection border stroke style
    #[serde(default)]
    pub border_style: BorderStyle,

    /// Selection border stroke width in logical points
    #[serde(default = "default_border_stroke_width")]
    pub border_stroke_width: f64,

    /// Shape fill/outline color
    #[serde(default = "default_stroke_color")]
    pub color: ColorSpec,

    /// Shape outline stroke width in logical points
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
}

impl Default for ShapeStyleConfig {
    fn default() -> Self {
        Self {
            border_color: default_border_color(),
            border_style: BorderStyle::default(),
            border_stroke_width: default_border_stroke_width(),
            color: default_stroke_color(),
            stroke_width: default_stroke_width(),
        }
    }
}

/// Gesture interpretation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureConfig {
    /// External view scale factor applied to gesture deltas
    /// (valid range: 0.1 - 10.0)
    #[serde(default = "default_scale")]
    pub scale: f64,

    /// View rotation in the component API's unit, where 90 corresponds to
    /// a half turn (legacy convention, preserved)
    #[serde(default)]
    pub rotation: f64,

    /// Whether touch input reaches the drawing layer at all
    #[serde(default = "default_touch_enabled")]
    pub touch_enabled: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            rotation: 0.0,
            touch_enabled: default_touch_enabled(),
        }
    }
}

/// Host platform and display density.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Which platform family hosts the native surface
    #[serde(default)]
    pub platform: HostPlatform,

    /// Device pixel ratio (valid range: 0.5 - 4.0); only consulted on the
    /// platform that addresses the surface in physical pixels
    #[serde(default = "default_pixel_ratio")]
    pub pixel_ratio: f64,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            platform: HostPlatform::default(),
            pixel_ratio: default_pixel_ratio(),
        }
    }
}

/// Prompt strings for the storage permission dialog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionConfig {
    /// Dialog title shown by the permission collaborator
    #[serde(default)]
    pub dialog_title: String,

    /// Dialog body text shown by the permission collaborator
    #[serde(default)]
    pub dialog_message: String,
}

/// Defaults for save and export requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Target folder name the native surface saves into
    #[serde(default = "default_export_folder")]
    pub folder: String,

    /// Filename template (supports chrono format specifiers)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Image format for saved and exported images
    #[serde(default)]
    pub format: ImageFormat,

    /// Render on a transparent background
    #[serde(default)]
    pub transparent: bool,

    /// Composite the background source image into the output
    #[serde(default = "default_true")]
    pub include_image: bool,

    /// Composite text overlays into the output
    #[serde(default = "default_true")]
    pub include_text: bool,

    /// Crop the output to the source image bounds
    #[serde(default)]
    pub crop_to_image_size: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            folder: default_export_folder(),
            filename_template: default_filename_template(),
            format: ImageFormat::default(),
            transparent: false,
            include_image: default_true(),
            include_text: default_true(),
            crop_to_image_size: false,
        }
    }
}

/// Background source image displayed under the sketch layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceImageConfig {
    /// Image filename, resolved by the native surface
    pub filename: String,

    /// Directory the filename is relative to; empty means a bundled asset
    #[serde(default)]
    pub directory: Option<String>,

    /// How the image is fitted into the view
    #[serde(default)]
    pub mode: SourceImageMode,
}

/// A 2D point used by text overlay anchors and positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A static text overlay composited by the native surface.
///
/// Overlays are render-only: they are forwarded at mount and never
/// participate in undo/redo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextOverlayConfig {
    /// Text content
    pub text: String,

    /// Font family; native default when absent
    #[serde(default)]
    pub font: Option<String>,

    /// Font size in points; native default when absent
    #[serde(default)]
    pub font_size: Option<f64>,

    /// Text color
    #[serde(default = "default_stroke_color")]
    pub font_color: ColorSpec,

    /// Stacking order relative to the sketch layer
    #[serde(default)]
    pub overlay: OverlayOrder,

    /// Anchor point within the text box (0.0 - 1.0 per axis)
    #[serde(default)]
    pub anchor: Point,

    /// Position of the anchor in the view
    #[serde(default)]
    pub position: Point,

    /// Coordinate space `position` is expressed in
    #[serde(default)]
    pub coordinate: CoordinateSpace,

    /// Horizontal alignment
    #[serde(default)]
    pub alignment: TextAlignment,

    /// Line height multiplier; native default when absent
    #[serde(default)]
    pub line_height_multiple: Option<f64>,
}

// ============================================================================
// Default value functions (referenced by serde defaults)
// ============================================================================

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Spec("#000000".to_string())
}

fn default_stroke_width() -> f64 {
    3.0
}

fn default_border_color() -> ColorSpec {
    ColorSpec::Spec("transparent".to_string())
}

fn default_border_stroke_width() -> f64 {
    1.0
}

fn default_scale() -> f64 {
    1.0
}

fn default_touch_enabled() -> bool {
    true
}

fn default_pixel_ratio() -> f64 {
    1.0
}

fn default_export_folder() -> String {
    "Sketchbridge".to_string()
}

fn default_filename_template() -> String {
    "sketch_%Y-%m-%d_%H%M%S".to_string()
}

fn default_true() -> bool {
    true
}
