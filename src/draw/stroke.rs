//! Freehand stroke data model.

use super::color::Color;
use serde::{Deserialize, Serialize};

/// One continuous freehand drawing gesture.
///
/// A stroke is allocated on gesture start, grows one point per accepted
/// gesture move, and is sealed into a [`DrawingRecord`] on release. Points
/// are stored in the normalized (device-independent) coordinate space as
/// `"x,y"` labels rounded to two decimal places, matching what the native
/// surface receives for replays.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stroke {
    /// Session-unique integer id (random, not cryptographic)
    pub id: u32,
    /// Stroke color
    pub color: Color,
    /// Pen width in logical points
    pub width: f64,
    /// Ordered `"x,y"` point labels in normalized coordinates
    pub data: Vec<String>,
}

impl Stroke {
    /// Allocates an empty stroke with the given id, color, and width.
    pub fn new(id: u32, color: Color, width: f64) -> Self {
        Self {
            id,
            color,
            width,
            data: Vec::new(),
        }
    }

    /// Appends a normalized point to the stroke.
    pub fn push_point(&mut self, x: f64, y: f64) {
        self.data.push(point_label(x, y));
    }

    /// Number of points recorded so far.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the stroke has no points yet.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Logical canvas dimensions a stroke was captured against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A sealed stroke together with the canvas size it was captured against,
/// so a later re-add can rescale it to the current layout.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DrawingRecord {
    /// The sealed stroke; immutable once wrapped
    pub stroke: Stroke,
    /// Canvas size at capture time
    pub size: CanvasSize,
    /// Optional author tag supplied by the host application
    pub author: Option<String>,
}

/// Generates a random stroke id in the range the host component API uses.
///
/// Collision-resistant enough for a UI session; deliberately not
/// cryptographic.
pub fn random_stroke_id() -> u32 {
    rand::random::<u32>() % 100_000_000
}

/// Formats a normalized point as the `"x,y"` label stored in stroke data,
/// rounded to two decimal places.
pub fn point_label(x: f64, y: f64) -> String {
    format!("{x:.2},{y:.2}")
}

/// Parses an `"x,y"` point label back into coordinates.
///
/// Returns `None` for malformed labels.
pub fn parse_point(label: &str) -> Option<(f64, f64)> {
    let (x, y) = label.split_once(',')?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;

    #[test]
    fn point_labels_round_to_two_decimals() {
        assert_eq!(point_label(13.0, 13.0), "13.00,13.00");
        assert_eq!(point_label(1.005, -2.5), "1.00,-2.50");
    }

    #[test]
    fn point_labels_round_trip() {
        let label = point_label(12.34, 56.78);
        assert_eq!(parse_point(&label), Some((12.34, 56.78)));
        assert!(parse_point("not-a-point").is_none());
        assert!(parse_point("1.0;2.0").is_none());
    }

    #[test]
    fn stroke_accumulates_points_in_order() {
        let mut stroke = Stroke::new(42, BLACK, 3.0);
        assert!(stroke.is_empty());

        stroke.push_point(1.0, 2.0);
        stroke.push_point(3.0, 4.0);

        assert_eq!(stroke.len(), 2);
        assert_eq!(stroke.data, vec!["1.00,2.00", "3.00,4.00"]);
    }

    #[test]
    fn stroke_ids_stay_in_component_range() {
        for _ in 0..64 {
            assert!(random_stroke_id() < 100_000_000);
        }
    }
}
