//! Terminal display lines

use serde::{Deserialize, Serialize};

/// Whether a line echoes user input or carries command output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Input,
    Output,
}

/// A single displayed terminal line
///
/// Output content may contain embedded newlines; it is rendered
/// pre-formatted, never reprocessed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalLine {
    pub kind: LineKind,
    pub content: String,
}

impl TerminalLine {
    /// Create an input-echo line
    pub fn input(content: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Input,
            content: content.into(),
        }
    }

    /// Create an output line
    pub fn output(content: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Output,
            content: content.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_tag_kind() {
        assert_eq!(TerminalLine::input("> ls").kind, LineKind::Input);
        assert_eq!(TerminalLine::output("done").kind, LineKind::Output);
    }

    #[test]
    fn test_serde_round_trip() {
        let line = TerminalLine::output("a\nb");
        let json = serde_json::to_string(&line).unwrap();
        let back: TerminalLine = serde_json::from_str(&json).unwrap();
        assert_eq!(back, line);
    }
}
