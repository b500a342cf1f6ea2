//! Host application callbacks.

use crate::draw::DrawingRecord;

/// Notifications the editor delivers back to the host application.
///
/// Every method has a no-op default, so hosts implement only what they
/// care about. Native success/failure flags are forwarded verbatim.
pub trait EditorObserver: Send + Sync {
    /// A gesture started; coordinates are normalized canvas-local.
    fn stroke_started(&self, _x: f64, _y: f64) {}

    /// An accepted move extended the in-progress stroke.
    fn stroke_changed(&self, _x: f64, _y: f64) {}

    /// A gesture released; the sealed record is about to be registered.
    fn stroke_ended(&self, _record: &DrawingRecord) {}

    /// The native path list changed.
    fn paths_changed(&self, _count: u32) {}

    /// A save request finished on the native side.
    fn save_completed(&self, _success: bool, _path: Option<&str>) {}

    /// Native shape selection changed.
    fn shape_selection_changed(&self, _selected: bool, _text: Option<&str>) {}
}

/// Observer that ignores every notification.
pub struct NullObserver;

impl EditorObserver for NullObserver {}
