//! Presentation phase definitions

use serde::{Deserialize, Serialize};

/// The five ordered phases of the scroll-driven experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Opening sequence, reality still cracking
    Breach,
    /// First transmission coming through
    Signal,
    /// Memory fragments surfacing
    Memory,
    /// Deep scan of skills and history
    Scan,
    /// Direct terminal link established
    Terminal,
}

impl Phase {
    /// Ordinal rank (BREACH = 0 .. TERMINAL = 4)
    pub fn rank(&self) -> u8 {
        match self {
            Phase::Breach => 0,
            Phase::Signal => 1,
            Phase::Memory => 2,
            Phase::Scan => 3,
            Phase::Terminal => 4,
        }
    }

    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            Phase::Breach => "\x1b[90m",   // Gray
            Phase::Signal => "\x1b[33m",   // Yellow
            Phase::Memory => "\x1b[36m",   // Cyan
            Phase::Scan => "\x1b[35m",     // Magenta
            Phase::Terminal => "\x1b[32m", // Green
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }

    /// Get glyph for phase
    pub fn glyph(&self) -> &'static str {
        match self {
            Phase::Breach => "🌑",
            Phase::Signal => "📡",
            Phase::Memory => "💾",
            Phase::Scan => "🔍",
            Phase::Terminal => "💻",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Breach => "BREACH",
            Phase::Signal => "SIGNAL",
            Phase::Memory => "MEMORY",
            Phase::Scan => "SCAN",
            Phase::Terminal => "TERMINAL",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_ordering_matches_rank() {
        let phases = [
            Phase::Breach,
            Phase::Signal,
            Phase::Memory,
            Phase::Scan,
            Phase::Terminal,
        ];
        for pair in phases.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].rank() < pair[1].rank());
        }
    }

    #[test]
    fn test_serde_lowercase_names() {
        let json = serde_json::to_string(&Phase::Breach).unwrap();
        assert_eq!(json, "\"breach\"");

        let phase: Phase = serde_json::from_str("\"terminal\"").unwrap();
        assert_eq!(phase, Phase::Terminal);
    }

    #[test]
    fn test_display_uppercase() {
        assert_eq!(Phase::Memory.to_string(), "MEMORY");
        assert_eq!(Phase::Scan.to_string(), "SCAN");
    }
}
