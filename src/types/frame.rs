//! Frame snapshot for terminal display

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CursorState, Phase};

/// Snapshot of the shared store taken after a frame update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameOutput {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Scroll progress in [0,1]
    pub scroll_progress: f64,
    /// Smoothed scroll velocity (pixels per millisecond)
    pub scroll_velocity: f64,
    /// Phase derived from scroll progress
    pub phase: Phase,
    /// Cursor position and velocity
    pub cursor: CursorState,
    /// Reality integrity in [0,100]
    pub reality_integrity: f64,
}

impl FrameOutput {
    /// Create new output
    pub fn new(
        scroll_progress: f64,
        scroll_velocity: f64,
        phase: Phase,
        cursor: CursorState,
        reality_integrity: f64,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            scroll_progress,
            scroll_velocity,
            phase,
            cursor,
            reality_integrity,
        }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let color = self.phase.color_code();
        let reset = Phase::color_reset();
        let glyph = self.phase.glyph();

        format!(
            "{}{} progress={:.3} | phase={} | vel={:+.3} | integrity={:5.1}{}",
            color,
            glyph,
            self.scroll_progress,
            self.phase,
            self.scroll_velocity,
            self.reality_integrity,
            reset
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "progress={:.3} | phase={} | vel={:+.3} | integrity={:.1}",
            self.scroll_progress, self.phase, self.scroll_velocity, self.reality_integrity
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
