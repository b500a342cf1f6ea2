//! Gesture input handling.
//!
//! This module translates raw pointer-gesture events into normalized
//! canvas coordinates and tracks the lifecycle of the stroke being drawn.
//! The editor feeds it start/move/release callbacks; everything here is
//! synchronous in-memory state.

pub mod gesture;
pub mod normalize;

// Re-export commonly used types at module level
pub use gesture::{GestureStart, GestureState};
pub use normalize::{GestureSpace, Offset};

// Re-export for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use normalize::NOISE_THRESHOLD;
