//! Integration tests for the shared store and phase derivation
//!
//! Covers the phase table, its monotonicity, and the store invariants:
//! progress stays in [0,1], phase never drifts from progress, integrity
//! saturates and never decreases.

use voidcore::core::{phase_from_progress, VoidStore};
use voidcore::types::Phase;

/// Every progress value maps to exactly one phase per the table
#[test]
fn test_phase_table_boundaries() {
    let cases = [
        (0.0, Phase::Breach),
        (0.099, Phase::Breach),
        (0.1, Phase::Signal),
        (0.299, Phase::Signal),
        (0.3, Phase::Memory),
        (0.599, Phase::Memory),
        (0.6, Phase::Scan),
        (0.799, Phase::Scan),
        (0.8, Phase::Terminal),
        (0.999, Phase::Terminal),
        (1.0, Phase::Terminal),
    ];

    for (progress, expected) in cases {
        assert_eq!(
            phase_from_progress(progress),
            expected,
            "progress {} should map to {:?}",
            progress,
            expected
        );
    }
}

/// p1 < p2 implies rank(p1) <= rank(p2)
#[test]
fn test_phase_mapping_is_monotonic() {
    let mut previous = phase_from_progress(0.0);
    for step in 0..=1000 {
        let progress = step as f64 / 1000.0;
        let phase = phase_from_progress(progress);
        assert!(
            phase.rank() >= previous.rank(),
            "phase rank regressed at progress {}",
            progress
        );
        previous = phase;
    }
}

/// Stored phase always agrees with stored progress
#[test]
fn test_store_phase_never_desynchronizes() {
    let mut store = VoidStore::new();

    for step in 0..=100 {
        let progress = step as f64 / 100.0;
        store.set_scroll_progress(progress);
        assert_eq!(store.phase(), phase_from_progress(store.scroll_progress()));
    }

    // Out-of-range and degenerate writes keep the invariant too
    for raw in [-5.0, 2.5, f64::NAN, f64::NEG_INFINITY] {
        store.set_scroll_progress(raw);
        let progress = store.scroll_progress();
        assert!((0.0..=1.0).contains(&progress));
        assert_eq!(store.phase(), phase_from_progress(progress));
    }
}

/// Integrity is capped at 100 and monotone across arbitrary inputs
#[test]
fn test_integrity_saturating_monotone() {
    let mut store = VoidStore::new();
    let mut previous = store.reality_integrity();

    let amounts = [0.3, -7.0, 250.0, 0.0, f64::NAN, 1.0, f64::INFINITY];
    for amount in amounts {
        store.increment_reality_integrity(amount);
        let current = store.reality_integrity();
        assert!(current >= previous, "integrity decreased");
        assert!(current <= 100.0, "integrity exceeded cap");
        previous = current;
    }

    assert_eq!(store.reality_integrity(), 100.0);
}

/// Frame output reflects the store and serializes cleanly
#[test]
fn test_frame_output_snapshot() {
    let mut store = VoidStore::new();
    store.set_scroll_progress(0.65);
    store.set_scroll_velocity(-0.25);
    store.increment_reality_integrity(12.0);

    let output = store.frame_output();
    assert_eq!(output.scroll_progress, 0.65);
    assert_eq!(output.scroll_velocity, -0.25);
    assert_eq!(output.phase, Phase::Scan);
    assert_eq!(output.reality_integrity, 12.0);

    let json = serde_json::to_string(&output).unwrap();
    assert!(json.contains("\"phase\":\"scan\""));
    assert!(json.contains("\"scroll_progress\""));
}
