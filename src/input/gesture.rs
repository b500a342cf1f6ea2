//! Gesture lifecycle state machine.

use super::normalize::GestureSpace;
use crate::draw::Stroke;

/// Raw coordinates delivered with a gesture-start event.
///
/// `page_*` is the absolute position in the host window; `local_*` is the
/// same position relative to the drawing view. Their difference is the
/// offset anchor for the rest of the gesture.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureStart {
    pub page_x: f64,
    pub page_y: f64,
    pub local_x: f64,
    pub local_y: f64,
}

/// Current gesture state machine.
///
/// A stroke is allocated on gesture start, grows during moves, and is
/// sealed into the registry on release. Gestures are delivered in temporal
/// order and never interleave on one component instance, so there is no
/// concurrent mutator to guard against.
#[derive(Debug, Default)]
pub enum GestureState {
    /// No gesture in flight
    #[default]
    Idle,
    /// Finger down - accumulating stroke points
    Active {
        /// The stroke under construction
        stroke: Stroke,
        /// Frozen gesture frame (origin, offset, view transform)
        space: GestureSpace,
    },
}

impl GestureState {
    /// Whether a stroke is currently being drawn.
    pub fn is_active(&self) -> bool {
        matches!(self, GestureState::Active { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;
    use crate::input::normalize::Offset;

    #[test]
    fn default_state_is_idle() {
        let state = GestureState::default();
        assert!(!state.is_active());
    }

    #[test]
    fn active_state_reports_itself() {
        let state = GestureState::Active {
            stroke: Stroke::new(1, BLACK, 3.0),
            space: GestureSpace {
                origin_x: 0.0,
                origin_y: 0.0,
                offset: Offset::default(),
                scale: 1.0,
                rotation: 0.0,
            },
        };
        assert!(state.is_active());
    }
}
