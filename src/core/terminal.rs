//! Void terminal: command interpreter with line history and recall
//!
//! Every submission is processed synchronously and atomically. The
//! interpreter is total over input strings: unknown commands degrade to
//! a "not found" line, nothing panics.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::content;
use crate::types::TerminalLine;
use crate::VERSION;

lazy_static! {
    /// `demo <n>` with a strictly numeric argument
    static ref RE_DEMO: Regex = Regex::new(r"^demo (\d+)$").unwrap();
}

/// Fire-and-forget opening of external resources (links)
///
/// Failures are not surfaced; the interpreter never learns whether the
/// hosting environment honored the request.
pub trait ResourceOpener {
    /// Open a URL in the hosting environment
    fn open_url(&mut self, url: &str);
}

/// Opener that ignores every request (headless default)
#[derive(Debug, Default)]
pub struct NoopOpener;

impl ResourceOpener for NoopOpener {
    fn open_url(&mut self, _url: &str) {}
}

/// Static command → response mapping
///
/// Lookup misses are not errors: the session maps every absent key to
/// its "not found" branch, so the command surface is total.
#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    entries: HashMap<String, String>,
}

impl CommandTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with the built-in void commands
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        for (command, response) in content::default_commands() {
            table.insert(command, response);
        }
        table
    }

    /// Add or replace a command (keys are matched lowercased)
    pub fn insert(&mut self, command: impl Into<String>, response: impl Into<String>) {
        self.entries.insert(command.into(), response.into());
    }

    /// Look up a lowercased command
    pub fn lookup(&self, command: &str) -> Option<&str> {
        self.entries.get(command).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One terminal session: displayed lines, command history, recall state
///
/// The displayed lines and the recall history are separate sequences:
/// `clear` empties the display but recall still walks the full history.
#[derive(Debug)]
pub struct TerminalSession {
    /// Displayed lines, oldest first
    lines: Vec<TerminalLine>,
    /// Submitted commands as typed, oldest first
    command_history: Vec<String>,
    /// Recall position: None = not recalling, Some(0) = newest command
    recall_index: Option<usize>,
    /// Current input buffer
    input: String,
    /// Command → response table
    table: CommandTable,
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSession {
    /// Create a session with the built-in command table
    pub fn new() -> Self {
        Self::with_table(CommandTable::with_defaults())
    }

    /// Create a session with a custom command table
    pub fn with_table(table: CommandTable) -> Self {
        Self {
            lines: vec![
                TerminalLine::output(format!("Welcome to VOID TERMINAL v{}", VERSION)),
                TerminalLine::output("Type 'help' for available commands."),
            ],
            command_history: Vec::new(),
            recall_index: None,
            input: String::new(),
            table,
        }
    }

    /// Displayed lines, oldest first
    pub fn lines(&self) -> &[TerminalLine] {
        &self.lines
    }

    /// Previously submitted commands, oldest first
    pub fn command_history(&self) -> &[String] {
        &self.command_history
    }

    /// Current input buffer contents
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input buffer (typing)
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Submit the current input buffer and clear it
    pub fn submit_input(&mut self, opener: &mut dyn ResourceOpener) {
        let raw = std::mem::take(&mut self.input);
        self.submit(&raw, opener);
    }

    /// Process one submitted command
    ///
    /// Matching is done on the trimmed, lowercased text; the echo line
    /// and the "not found" message keep the original casing.
    pub fn submit(&mut self, raw: &str, opener: &mut dyn ResourceOpener) {
        let trimmed = raw.trim();
        let command = trimmed.to_lowercase();

        if !trimmed.is_empty() {
            self.command_history.push(raw.to_string());
            self.recall_index = None;
        }

        self.lines.push(TerminalLine::input(format!("> {}", raw)));

        if command == "clear" {
            // Display resets; command_history survives for recall
            self.lines.clear();
            return;
        }

        if command == "resume" {
            opener.open_url(content::RESUME_URL);
            self.lines.push(TerminalLine::output("> Opening resume..."));
            return;
        }

        if let Some(n) = parse_demo_index(&command) {
            opener.open_url(content::DEMO_URLS[n - 1]);
            self.lines
                .push(TerminalLine::output(format!("> Launching project {}...", n)));
            return;
        }

        let response = self.table.lookup(&command).map(str::to_string);
        if let Some(response) = response {
            self.lines.push(TerminalLine::output(response));
        } else if !trimmed.is_empty() {
            self.lines.push(TerminalLine::output(format!(
                "Command not found: {}\nType 'help' for available commands.",
                trimmed
            )));
        }
    }

    /// Recall the previous (older) command into the input buffer
    pub fn recall_older(&mut self) {
        if self.command_history.is_empty() {
            return;
        }
        let next = match self.recall_index {
            None => 0,
            Some(index) => (index + 1).min(self.command_history.len() - 1),
        };
        self.recall_index = Some(next);
        self.input = self.command_history[self.command_history.len() - 1 - next].clone();
    }

    /// Step back toward the newest command; stepping past it leaves
    /// recall and clears the input buffer
    pub fn recall_newer(&mut self) {
        match self.recall_index {
            Some(index) if index > 0 => {
                let next = index - 1;
                self.recall_index = Some(next);
                self.input = self.command_history[self.command_history.len() - 1 - next].clone();
            }
            _ => {
                self.recall_index = None;
                self.input.clear();
            }
        }
    }
}

/// Parse `demo <n>` into a 1-based launch table index
///
/// Anything that is not exactly `demo ` plus an in-range integer falls
/// through to normal command lookup.
fn parse_demo_index(command: &str) -> Option<usize> {
    let caps = RE_DEMO.captures(command)?;
    let n: usize = caps[1].parse().ok()?;
    if (1..=content::DEMO_URLS.len()).contains(&n) {
        Some(n)
    } else {
        None
    }
}

// =============================================================================
// TESTS
// =============================================================================
