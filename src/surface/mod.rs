//! The native drawing surface capability interface.
//!
//! Rendering, hit-testing, shape manipulation, and rasterization all live
//! in platform code outside this crate. The core addresses that code
//! exclusively through [`DrawingSurface`]: a fire-and-forget command set
//! plus one asynchronous export query. Tests substitute recording fakes;
//! nothing in this crate depends on a concrete rendering implementation.

pub mod events;

pub use events::{ChangePayload, SurfaceEvent};

use crate::config::enums::ImageFormat;
use crate::config::types::{ShapeStyleConfig, SourceImageConfig, TextOverlayConfig};
use crate::draw::ShapeConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by the asynchronous export path.
///
/// The command set itself is fire-and-forget and cannot fail from the
/// core's point of view; only the export query and its manager report
/// errors.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("native surface is detached")]
    Detached,

    #[error("base64 transfer failed: {0}")]
    TransferFailed(String),

    #[error("export manager not running")]
    ManagerStopped,
}

/// Static settings pushed to the surface once, at mount time.
///
/// Mirrors the render-time props of the host component: shape appearance,
/// the optional background image, and text overlays. The shape fill color
/// and stroke width follow the pen settings, not the shape section's own
/// values - a quirk of the host component API that callers rely on.
#[derive(Debug, Clone)]
pub struct SurfaceSettings {
    pub shape_style: ShapeStyleConfig,
    pub source_image: Option<SourceImageConfig>,
    pub text_overlays: Vec<TextOverlayConfig>,
}

/// A save command: rasterize and write to host storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveRequest {
    pub format: ImageFormat,
    pub folder: String,
    pub filename: String,
    pub transparent: bool,
    pub include_image: bool,
    pub include_text: bool,
    pub crop_to_image_size: bool,
}

/// An export query: rasterize and return the image as base64.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportQuery {
    pub format: ImageFormat,
    pub transparent: bool,
    pub include_image: bool,
    pub include_text: bool,
    pub crop_to_image_size: bool,
}

/// Capability interface over the opaque native rendering view.
///
/// Commands are dispatched in call order and observe no return value. The
/// surface reports back asynchronously through the multiplexed change
/// event channel (see [`events`]).
#[async_trait]
pub trait DrawingSurface: Send + Sync {
    /// Pushes the static mount-time settings.
    fn configure(&self, settings: &SurfaceSettings);

    /// Drops all rendered paths.
    fn clear(&self);

    /// Opens a new in-progress path. `color` is packed ARGB; `width` is
    /// already density-scaled.
    fn new_path(&self, id: u32, color: u32, width: f64);

    /// Appends a point to the in-progress path, in device coordinates.
    fn add_point(&self, x: f64, y: f64, is_move: bool);

    /// Seals the in-progress path.
    fn end_path(&self);

    /// Replays a complete path, points pre-scaled to the current layout.
    fn add_path(&self, id: u32, color: u32, width: f64, points: &[String]);

    /// Removes a rendered path.
    fn delete_path(&self, id: u32);

    /// Instantiates a shape. The descriptor's id is always set.
    fn add_shape(&self, shape: &ShapeConfig);

    /// Removes a shape.
    fn delete_shape_by_id(&self, id: &str);

    /// Removes whichever shape is natively selected.
    fn delete_selected_shape(&self);

    /// Drops the native selection without removing anything.
    fn unselect_shape(&self);

    /// Grows the selected text shape's font by the native step.
    fn increase_shape_fontsize(&self);

    /// Shrinks the selected text shape's font by the native step.
    fn decrease_shape_fontsize(&self);

    /// Replaces the selected text shape's content.
    fn change_shape_text(&self, text: &str);

    /// Rasterizes and writes to host storage. Completion arrives on the
    /// change event channel.
    fn save(&self, request: &SaveRequest);

    /// Rasterizes and returns the image as a base64 string.
    async fn transfer_to_base64(&self, query: &ExportQuery) -> Result<String, SurfaceError>;
}
