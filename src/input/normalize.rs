//! Coordinate normalization for pointer-gesture deltas.
//!
//! Raw gesture deltas arrive in screen space, affected by the view's
//! external scale, its rotation, and (on one platform family) the device
//! pixel density. This module converts them into canvas-local,
//! device-independent coordinates.
//!
//! The rotation unit is deliberately non-standard: the host component API
//! divides by 90 and multiplies by PI, so `rotation = 90` means a rotation
//! of PI radians, not PI/2. Existing callers depend on that convention, so
//! it is reproduced bit-for-bit here.

use std::f64::consts::PI;

/// Minimum on-screen delta, per axis, for a move event to count as
/// intentional. Anything below this is sensor noise and produces no point.
pub const NOISE_THRESHOLD: f64 = 2.5;

/// Returns whether a raw (un-rotated) gesture delta falls under the noise
/// gate on either axis.
pub fn below_noise_floor(dx: f64, dy: f64) -> bool {
    dx.abs() < NOISE_THRESHOLD || dy.abs() < NOISE_THRESHOLD
}

/// Rotates a raw gesture delta into canvas orientation.
///
/// The angle is `rotation * (PI / 90) * -1`: clockwise view rotation is
/// compensated by a counter-clockwise delta rotation, in the component
/// API's quarter-turn-is-90 unit.
pub fn rotate_delta(dx: f64, dy: f64, rotation: f64) -> (f64, f64) {
    let angle = rotation * (PI / 90.0) * -1.0;
    let (sin, cos) = angle.sin_cos();
    (cos * dx - sin * dy, sin * dx + cos * dy)
}

/// Rounds a coordinate to two decimal places, the precision carried in
/// stroke point labels.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Anchor captured at gesture start: raw page position minus raw local
/// position. Subtracting it converts page coordinates to canvas-local ones.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// The fixed frame of one gesture: its absolute start position, the
/// captured offset, and the view transform in effect when it began.
#[derive(Clone, Copy, Debug)]
pub struct GestureSpace {
    /// Absolute page X of the gesture start
    pub origin_x: f64,
    /// Absolute page Y of the gesture start
    pub origin_y: f64,
    /// Page-to-local anchor captured at gesture start
    pub offset: Offset,
    /// External view scale factor
    pub scale: f64,
    /// View rotation in the component API's unit (90 = PI radians)
    pub rotation: f64,
}

impl GestureSpace {
    /// The canvas-local start point, rounded to label precision.
    pub fn start_point(&self) -> (f64, f64) {
        (
            round2(self.origin_x - self.offset.x),
            round2(self.origin_y - self.offset.y),
        )
    }

    /// Projects a raw move delta into a canvas-local point.
    ///
    /// Returns `None` when the delta is under the noise gate (evaluated on
    /// the raw, un-rotated values).
    pub fn project(&self, dx: f64, dy: f64) -> Option<(f64, f64)> {
        if below_noise_floor(dx, dy) {
            return None;
        }

        let (rdx, rdy) = rotate_delta(dx, dy, self.rotation);
        Some((
            round2(self.origin_x + rdx / self.scale - self.offset.x),
            round2(self.origin_y + rdy / self.scale - self.offset.y),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space(origin: (f64, f64), offset: (f64, f64), scale: f64, rotation: f64) -> GestureSpace {
        GestureSpace {
            origin_x: origin.0,
            origin_y: origin.1,
            offset: Offset {
                x: offset.0,
                y: offset.1,
            },
            scale,
            rotation,
        }
    }

    #[test]
    fn identity_transform_translates_by_delta() {
        let space = space((10.0, 10.0), (0.0, 0.0), 1.0, 0.0);
        assert_eq!(space.project(3.0, 3.0), Some((13.0, 13.0)));
    }

    #[test]
    fn rotation_ninety_means_pi_radians() {
        // rotation=90 is a half turn in this unit, so the delta negates.
        let space = space((10.0, 10.0), (0.0, 0.0), 1.0, 90.0);
        assert_eq!(space.project(3.0, 3.0), Some((7.0, 7.0)));
    }

    #[test]
    fn rotation_forty_five_is_a_quarter_turn() {
        let space = space((0.0, 0.0), (0.0, 0.0), 1.0, 45.0);
        // Clockwise modifier: (dx, dy) maps to (-dy, dx) rotated by -PI/2.
        let (x, y) = space.project(3.0, 4.0).unwrap();
        assert!((x - 4.0).abs() < 1e-9, "x was {x}");
        assert!((y - -3.0).abs() < 1e-9, "y was {y}");
    }

    #[test]
    fn scale_divides_the_rotated_delta() {
        let space = space((10.0, 10.0), (0.0, 0.0), 2.0, 0.0);
        assert_eq!(space.project(5.0, 5.0), Some((12.5, 12.5)));
    }

    #[test]
    fn offset_is_subtracted_from_the_projection() {
        let space = space((100.0, 50.0), (20.0, 5.0), 1.0, 0.0);
        assert_eq!(space.start_point(), (80.0, 45.0));
        assert_eq!(space.project(3.0, 3.0), Some((83.0, 48.0)));
    }

    #[test]
    fn noise_gate_applies_per_axis_on_raw_deltas() {
        let space = space((0.0, 0.0), (0.0, 0.0), 1.0, 0.0);
        assert_eq!(space.project(2.4, 100.0), None);
        assert_eq!(space.project(100.0, 2.4), None);
        assert_eq!(space.project(-2.0, -2.0), None);
        assert!(space.project(2.5, 2.5).is_some());
    }

    #[test]
    fn noise_gate_ignores_rotation() {
        // The gate sees raw deltas, before rotation could change magnitudes.
        let space = space((0.0, 0.0), (0.0, 0.0), 1.0, 45.0);
        assert_eq!(space.project(2.0, 2.0), None);
    }

    #[test]
    fn round2_matches_label_precision() {
        assert_eq!(round2(13.006), 13.01);
        assert_eq!(round2(13.004), 13.0);
        assert_eq!(round2(-2.678), -2.68);
    }
}
