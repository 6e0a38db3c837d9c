//! Cursor sampler: pointer movement → position/velocity + reality integrity
//!
//! Same single-slot coalescing as the scroll sampler: the latest pointer
//! event recorded before a flush is the only one processed.

use serde::{Deserialize, Serialize};

use crate::core::VoidStore;
use crate::types::CursorState;
use crate::{INTEGRITY_SPEED_FACTOR, INTEGRITY_SPEED_THRESHOLD};

/// A raw pointer sample from the hosting environment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// x position in pixels
    pub x: f64,
    /// y position in pixels
    pub y: f64,
    /// Monotonic timestamp in milliseconds
    pub timestamp_ms: u64,
}

/// Cursor sampler with single-slot frame coalescing
#[derive(Debug, Default)]
pub struct CursorSampler {
    /// Event waiting for the next flush, if any
    pending: Option<PointerEvent>,
    /// Last processed sample, for velocity differencing
    last: Option<PointerEvent>,
}

impl CursorSampler {
    /// Create a sampler with no history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw event; replaces any event still pending for this frame
    pub fn record(&mut self, event: PointerEvent) {
        self.pending = Some(event);
    }

    /// Whether an event is waiting for the next flush
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending event without processing it (listener teardown)
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Process the pending event, if any
    ///
    /// Returns true when the store was written. The first sample writes
    /// position with zero velocity; zero elapsed time skips the write
    /// entirely so NaN never reaches the store. Fast movement accrues
    /// reality integrity; position and velocity are written regardless
    /// of the speed threshold.
    pub fn flush(&mut self, store: &mut VoidStore) -> bool {
        let Some(event) = self.pending.take() else {
            return false;
        };

        let wrote = match self.last {
            None => {
                store.set_cursor(CursorState::new(event.x, event.y, 0.0, 0.0));
                true
            }
            Some(last) => {
                let elapsed_ms = event.timestamp_ms.saturating_sub(last.timestamp_ms);
                if elapsed_ms > 0 {
                    let velocity_x = (event.x - last.x) / elapsed_ms as f64;
                    let velocity_y = (event.y - last.y) / elapsed_ms as f64;
                    let cursor = CursorState::new(event.x, event.y, velocity_x, velocity_y);

                    let speed = cursor.speed();
                    if speed > INTEGRITY_SPEED_THRESHOLD {
                        store.increment_reality_integrity(speed * INTEGRITY_SPEED_FACTOR);
                    }

                    store.set_cursor(cursor);
                    true
                } else {
                    false
                }
            }
        };

        self.last = Some(event);
        wrote
    }
}

// =============================================================================
// TESTS
// =============================================================================
