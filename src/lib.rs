//! Voidcore: state engine behind the Void experience
//!
//! Pipeline: input samplers → VoidStore → phase derivation → consumers.
//! The void terminal interpreter runs beside it.

pub mod content;
pub mod core;
pub mod types;

// =============================================================================
// PHASE THRESHOLDS
// =============================================================================

/// Scroll progress at which SIGNAL begins (BREACH below this)
pub const PHASE_SIGNAL_AT: f64 = 0.1;

/// Scroll progress at which MEMORY begins
pub const PHASE_MEMORY_AT: f64 = 0.3;

/// Scroll progress at which SCAN begins
pub const PHASE_SCAN_AT: f64 = 0.6;

/// Scroll progress at which TERMINAL begins
pub const PHASE_TERMINAL_AT: f64 = 0.8;

// =============================================================================
// SCROLL VELOCITY SMOOTHING
// =============================================================================

/// Weight of the previous smoothed velocity in the moving average.
/// The 0.8/0.2 split kills event jitter while staying quick enough to feel live.
pub const VELOCITY_RETAIN: f64 = 0.8;

/// Weight of the newest instantaneous velocity in the moving average
pub const VELOCITY_BLEND: f64 = 0.2;

// =============================================================================
// REALITY INTEGRITY
// =============================================================================

/// Cursor speed (pixels per millisecond) above which integrity accrues
pub const INTEGRITY_SPEED_THRESHOLD: f64 = 0.5;

/// Fraction of cursor speed converted into integrity per sample
pub const INTEGRITY_SPEED_FACTOR: f64 = 0.01;

/// Integrity saturates here and never decreases
pub const REALITY_INTEGRITY_MAX: f64 = 100.0;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
