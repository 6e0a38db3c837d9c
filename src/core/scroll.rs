//! Scroll sampler: raw scroll events → clamped progress + smoothed velocity
//!
//! Coalescing is a single pending slot: recording a new event before the
//! frame fires replaces the old one, so each flush processes at most the
//! latest event ("latest wins").

use serde::{Deserialize, Serialize};

use crate::core::VoidStore;
use crate::{VELOCITY_BLEND, VELOCITY_RETAIN};

/// A raw scroll sample from the hosting environment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollEvent {
    /// Current scroll offset in pixels
    pub scroll_y: f64,
    /// Monotonic timestamp in milliseconds
    pub timestamp_ms: u64,
}

/// Document and viewport geometry read at frame time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DocumentGeometry {
    /// Total document height in pixels
    pub scroll_height: f64,
    /// Viewport height in pixels
    pub viewport_height: f64,
}

impl DocumentGeometry {
    /// Create geometry
    pub fn new(scroll_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_height,
            viewport_height,
        }
    }

    /// Maximum scrollable offset; 0 when the document fits the viewport
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_height - self.viewport_height).max(0.0)
    }
}

/// Scroll sampler with single-slot frame coalescing
#[derive(Debug, Default)]
pub struct ScrollSampler {
    /// Event waiting for the next flush, if any
    pending: Option<ScrollEvent>,
    /// Last processed sample, for velocity differencing
    last: Option<ScrollEvent>,
    /// Exponentially smoothed velocity (pixels per millisecond)
    smoothed_velocity: f64,
}

impl ScrollSampler {
    /// Create a sampler with no history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw event; replaces any event still pending for this frame
    pub fn record(&mut self, event: ScrollEvent) {
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

    /// Current smoothed velocity (pixels per millisecond)
    pub fn smoothed_velocity(&self) -> f64 {
        self.smoothed_velocity
    }

    /// Process the pending event, if any
    ///
    /// Returns true when the store was written. Velocity smoothing is
    /// skipped for the first sample and for zero elapsed time; progress
    /// is written on every processed event and is 0 when the document is
    /// not scrollable, never NaN.
    pub fn flush(&mut self, store: &mut VoidStore, geometry: &DocumentGeometry) -> bool {
        let Some(event) = self.pending.take() else {
            return false;
        };

        if let Some(last) = self.last {
            let elapsed_ms = event.timestamp_ms.saturating_sub(last.timestamp_ms);
            if elapsed_ms > 0 {
                let instant = (event.scroll_y - last.scroll_y) / elapsed_ms as f64;
                self.smoothed_velocity =
                    self.smoothed_velocity * VELOCITY_RETAIN + instant * VELOCITY_BLEND;
            }
        }

        let max_scroll = geometry.max_scroll();
        let progress = if max_scroll > 0.0 {
            event.scroll_y / max_scroll
        } else {
            0.0
        };

        // setter clamps to [0,1] and re-derives the phase
        store.set_scroll_progress(progress);
        store.set_scroll_velocity(self.smoothed_velocity);

        self.last = Some(event);
        true
    }
}

// =============================================================================
// TESTS
// =============================================================================
