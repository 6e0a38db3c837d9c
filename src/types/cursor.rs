//! Cursor state sampled from pointer movement

use serde::{Deserialize, Serialize};

/// Position and velocity of the pointer
///
/// Velocity stays zero until the sampler has seen two samples, so
/// consumers never observe a missing or non-finite velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CursorState {
    /// x position in pixels (0 = unset/off-screen)
    pub x: f64,
    /// y position in pixels (0 = unset/off-screen)
    pub y: f64,
    /// Horizontal velocity in pixels per millisecond, signed
    pub velocity_x: f64,
    /// Vertical velocity in pixels per millisecond, signed
    pub velocity_y: f64,
}

impl CursorState {
    /// Create a cursor state
    pub fn new(x: f64, y: f64, velocity_x: f64, velocity_y: f64) -> Self {
        Self {
            x,
            y,
            velocity_x,
            velocity_y,
        }
    }

    /// Scalar speed in pixels per millisecond
    pub fn speed(&self) -> f64 {
        (self.velocity_x * self.velocity_x + self.velocity_y * self.velocity_y).sqrt()
    }
}

// =============================================================================
// TESTS
// =============================================================================
