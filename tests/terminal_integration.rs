//! Integration tests for the void terminal
//!
//! Tests the full path: submitted text → interpreter → displayed lines
//! and side effects, plus recall navigation across `clear`.

use pretty_assertions::assert_eq;

use voidcore::content;
use voidcore::core::{NoopOpener, ResourceOpener, TerminalSession};
use voidcore::types::{LineKind, TerminalLine};

#[derive(Debug, Default)]
struct RecordingOpener {
    opened: Vec<String>,
}

impl ResourceOpener for RecordingOpener {
    fn open_url(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }
}

/// Output lines produced by one submission
fn outputs_of(session: &mut TerminalSession, command: &str) -> Vec<TerminalLine> {
    let before = session.lines().len();
    session.submit(command, &mut NoopOpener);
    session.lines()[before.min(session.lines().len())..]
        .iter()
        .filter(|line| line.kind == LineKind::Output)
        .cloned()
        .collect()
}

#[test]
fn test_help_lists_available_commands() {
    let mut session = TerminalSession::new();
    let outputs = outputs_of(&mut session, "help");

    assert_eq!(outputs.len(), 1);
    assert!(outputs[0].content.starts_with("Available commands:"));
}

#[test]
fn test_unknown_command_degrades_to_not_found() {
    let mut session = TerminalSession::new();
    let outputs = outputs_of(&mut session, "xyzzy");

    assert_eq!(outputs.len(), 1);
    assert!(outputs[0].content.contains("Command not found: xyzzy"));
}

#[test]
fn test_demo_commands_open_exactly_one_url() {
    for n in 1..=3usize {
        let mut session = TerminalSession::new();
        let mut opener = RecordingOpener::default();

        session.submit(&format!("demo {}", n), &mut opener);

        assert_eq!(opener.opened.len(), 1, "demo {} should open one URL", n);
        assert_eq!(opener.opened[0], content::DEMO_URLS[n - 1]);
    }
}

#[test]
fn test_demo_out_of_table_never_opens() {
    for command in ["demo 4", "demo 0", "demo abc", "demo", "demo 1.5"] {
        let mut session = TerminalSession::new();
        let mut opener = RecordingOpener::default();

        session.submit(command, &mut opener);

        assert!(
            opener.opened.is_empty(),
            "{:?} should not trigger a launch",
            command
        );
    }
}

#[test]
fn test_resume_opens_resume_url() {
    let mut session = TerminalSession::new();
    let mut opener = RecordingOpener::default();

    session.submit("resume", &mut opener);

    assert_eq!(opener.opened, vec![content::RESUME_URL.to_string()]);
}

/// Same command, `clear` in between, identical output both times
#[test]
fn test_idempotence_across_clear() {
    let mut session = TerminalSession::new();

    let first = outputs_of(&mut session, "projects");
    outputs_of(&mut session, "clear");
    let second = outputs_of(&mut session, "projects");

    assert_eq!(first, second);
}

#[test]
fn test_clear_resets_display_not_history() {
    let mut session = TerminalSession::new();
    session.submit("whoami", &mut NoopOpener);
    session.submit("skills", &mut NoopOpener);
    session.submit("clear", &mut NoopOpener);

    assert!(session.lines().is_empty());
    assert_eq!(
        session.command_history(),
        &["whoami".to_string(), "skills".to_string(), "clear".to_string()]
    );

    // Recall still walks the pre-clear history
    session.recall_older();
    assert_eq!(session.input(), "clear");
    session.recall_older();
    assert_eq!(session.input(), "skills");
    session.recall_older();
    assert_eq!(session.input(), "whoami");
}

/// Three commands up, three down, buffer ends empty
#[test]
fn test_recall_round_trip_exact_order() {
    let mut session = TerminalSession::new();
    for command in ["a", "b", "c"] {
        session.submit(command, &mut NoopOpener);
    }

    let mut walked = Vec::new();
    for _ in 0..3 {
        session.recall_older();
        walked.push(session.input().to_string());
    }
    for _ in 0..3 {
        session.recall_newer();
        walked.push(session.input().to_string());
    }

    assert_eq!(walked, vec!["c", "b", "a", "b", "c", ""]);
}

#[test]
fn test_multiline_responses_stay_one_line() {
    let mut session = TerminalSession::new();
    let outputs = outputs_of(&mut session, "skills");

    // One display line whose content embeds newlines, rendered pre-formatted
    assert_eq!(outputs.len(), 1);
    assert!(outputs[0].content.contains('\n'));
}

#[test]
fn test_session_survives_arbitrary_input() {
    let mut session = TerminalSession::new();
    let mut opener = RecordingOpener::default();

    for input in [
        "",
        "   ",
        "CLEAR",
        "demo demo demo",
        "resume please",
        "\u{202e}gnirts",
        &"x".repeat(10_000),
    ] {
        session.submit(input, &mut opener);
    }

    // "CLEAR" matches the clear command case-insensitively; everything
    // after it accumulated again without panicking
    assert!(!session.lines().is_empty());
}
