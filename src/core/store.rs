//! Shared presentation state
//!
//! One-writer-many-reader discipline: the scroll and cursor samplers are
//! the only writers, each touching its own fields; every consumer reads
//! through `&VoidStore`. The store is constructed explicitly and passed
//! by reference, never held in a global.

use crate::types::{CursorState, FrameOutput, Phase};
use crate::{
    PHASE_MEMORY_AT, PHASE_SCAN_AT, PHASE_SIGNAL_AT, PHASE_TERMINAL_AT, REALITY_INTEGRITY_MAX,
};

/// Derive the presentation phase from scroll progress
///
/// Half-open thresholds, recomputed on every progress write. No
/// hysteresis: oscillation around a boundary flickers the phase.
pub fn phase_from_progress(progress: f64) -> Phase {
    if progress < PHASE_SIGNAL_AT {
        Phase::Breach
    } else if progress < PHASE_MEMORY_AT {
        Phase::Signal
    } else if progress < PHASE_SCAN_AT {
        Phase::Memory
    } else if progress < PHASE_TERMINAL_AT {
        Phase::Scan
    } else {
        Phase::Terminal
    }
}

/// Shared presentation state for one experience session
#[derive(Debug)]
pub struct VoidStore {
    /// Scroll progress, always in [0,1]
    scroll_progress: f64,
    /// Smoothed scroll velocity, unbounded sign and magnitude
    scroll_velocity: f64,
    /// Phase derived from scroll progress, never set independently
    phase: Phase,
    /// Cursor position and velocity
    cursor: CursorState,
    /// Pointer is over an interactive element
    is_hovering: bool,
    /// Saturating interaction counter in [0,100]
    reality_integrity: f64,
    /// Opening breach sequence finished playing
    breach_complete: bool,
    /// Ambient audio toggle
    audio_enabled: bool,
    /// Terminal section has focus
    terminal_active: bool,
}

impl Default for VoidStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VoidStore {
    /// Create a store in its initial state (progress 0, phase BREACH)
    pub fn new() -> Self {
        Self {
            scroll_progress: 0.0,
            scroll_velocity: 0.0,
            phase: Phase::Breach,
            cursor: CursorState::default(),
            is_hovering: false,
            reality_integrity: 0.0,
            breach_complete: false,
            audio_enabled: false,
            terminal_active: false,
        }
    }

    /// Write scroll progress and re-derive the phase in the same update
    ///
    /// Clamps to [0,1]; non-finite input collapses to 0.
    pub fn set_scroll_progress(&mut self, progress: f64) {
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.scroll_progress = progress;
        self.phase = phase_from_progress(progress);
    }

    /// Write the smoothed scroll velocity
    pub fn set_scroll_velocity(&mut self, velocity: f64) {
        self.scroll_velocity = velocity;
    }

    /// Write cursor position and velocity
    pub fn set_cursor(&mut self, cursor: CursorState) {
        self.cursor = cursor;
    }

    /// Accrue reality integrity, saturating at 100
    ///
    /// Non-positive and non-finite amounts are ignored; integrity never
    /// decreases.
    pub fn increment_reality_integrity(&mut self, amount: f64) {
        if amount.is_finite() && amount > 0.0 {
            self.reality_integrity = (self.reality_integrity + amount).min(REALITY_INTEGRITY_MAX);
        }
    }

    pub fn set_is_hovering(&mut self, hovering: bool) {
        self.is_hovering = hovering;
    }

    pub fn set_breach_complete(&mut self, complete: bool) {
        self.breach_complete = complete;
    }

    pub fn toggle_audio(&mut self) {
        self.audio_enabled = !self.audio_enabled;
    }

    pub fn set_terminal_active(&mut self, active: bool) {
        self.terminal_active = active;
    }

    /// Scroll progress in [0,1]
    pub fn scroll_progress(&self) -> f64 {
        self.scroll_progress
    }

    /// Smoothed scroll velocity (pixels per millisecond)
    pub fn scroll_velocity(&self) -> f64 {
        self.scroll_velocity
    }

    /// Current phase, always `phase_from_progress(scroll_progress())`
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Cursor position and velocity
    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    pub fn is_hovering(&self) -> bool {
        self.is_hovering
    }

    /// Reality integrity in [0,100]
    pub fn reality_integrity(&self) -> f64 {
        self.reality_integrity
    }

    pub fn breach_complete(&self) -> bool {
        self.breach_complete
    }

    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    pub fn terminal_active(&self) -> bool {
        self.terminal_active
    }

    /// Timestamped snapshot of the presentation state
    pub fn frame_output(&self) -> FrameOutput {
        FrameOutput::new(
            self.scroll_progress,
            self.scroll_velocity,
            self.phase,
            self.cursor,
            self.reality_integrity,
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let store = VoidStore::new();
        assert_eq!(store.scroll_progress(), 0.0);
        assert_eq!(store.scroll_velocity(), 0.0);
        assert_eq!(store.phase(), Phase::Breach);
        assert_eq!(store.reality_integrity(), 0.0);
        assert_eq!(store.cursor(), CursorState::default());
    }

    #[test]
    fn test_phase_table() {
        assert_eq!(phase_from_progress(0.0), Phase::Breach);
        assert_eq!(phase_from_progress(0.05), Phase::Breach);
        assert_eq!(phase_from_progress(0.1), Phase::Signal);
        assert_eq!(phase_from_progress(0.29), Phase::Signal);
        assert_eq!(phase_from_progress(0.3), Phase::Memory);
        assert_eq!(phase_from_progress(0.59), Phase::Memory);
        assert_eq!(phase_from_progress(0.6), Phase::Scan);
        assert_eq!(phase_from_progress(0.79), Phase::Scan);
        assert_eq!(phase_from_progress(0.8), Phase::Terminal);
        assert_eq!(phase_from_progress(1.0), Phase::Terminal);
    }

    #[test]
    fn test_progress_write_rederives_phase() {
        let mut store = VoidStore::new();

        store.set_scroll_progress(0.45);
        assert_eq!(store.phase(), Phase::Memory);

        store.set_scroll_progress(0.85);
        assert_eq!(store.phase(), Phase::Terminal);

        store.set_scroll_progress(0.0);
        assert_eq!(store.phase(), Phase::Breach);
    }

    #[test]
    fn test_progress_clamped() {
        let mut store = VoidStore::new();

        store.set_scroll_progress(1.7);
        assert_eq!(store.scroll_progress(), 1.0);
        assert_eq!(store.phase(), Phase::Terminal);

        store.set_scroll_progress(-0.3);
        assert_eq!(store.scroll_progress(), 0.0);
        assert_eq!(store.phase(), Phase::Breach);
    }

    #[test]
    fn test_non_finite_progress_collapses_to_zero() {
        let mut store = VoidStore::new();
        store.set_scroll_progress(f64::NAN);
        assert_eq!(store.scroll_progress(), 0.0);
        assert_eq!(store.phase(), Phase::Breach);

        store.set_scroll_progress(f64::INFINITY);
        assert_eq!(store.scroll_progress(), 0.0);
    }

    #[test]
    fn test_integrity_saturates_at_100() {
        let mut store = VoidStore::new();
        for _ in 0..1000 {
            store.increment_reality_integrity(0.7);
        }
        assert_eq!(store.reality_integrity(), 100.0);
    }

    #[test]
    fn test_integrity_never_decreases() {
        let mut store = VoidStore::new();
        store.increment_reality_integrity(5.0);

        store.increment_reality_integrity(-3.0);
        store.increment_reality_integrity(0.0);
        store.increment_reality_integrity(f64::NAN);

        assert_eq!(store.reality_integrity(), 5.0);
    }

    #[test]
    fn test_presentation_flags() {
        let mut store = VoidStore::new();

        store.toggle_audio();
        assert!(store.audio_enabled());
        store.toggle_audio();
        assert!(!store.audio_enabled());

        store.set_breach_complete(true);
        assert!(store.breach_complete());

        store.set_terminal_active(true);
        assert!(store.terminal_active());

        store.set_is_hovering(true);
        assert!(store.is_hovering());
    }
}
