//! Test utilities for the help desk
//!
//! Fixtures for driving a full menu session from scripted input.

#![cfg(test)]

use std::io::Cursor;

use crate::cli::{LinePrompter, OutputFormatter, Session};
use crate::config::Config;
use crate::desk::HelpDesk;

type ScriptedPrompter = LinePrompter<Cursor<Vec<u8>>, Vec<u8>>;

/// A menu session fed from a fixed list of input lines
pub struct ScriptedSession {
    session: Session<ScriptedPrompter>,
}

impl ScriptedSession {
    /// Plain-text session with default configuration
    pub fn new(lines: &[&str]) -> Self {
        Self::with_config(lines, Config::default())
    }

    pub fn with_config(lines: &[&str], config: Config) -> Self {
        Self::with_formatter(lines, OutputFormatter::new(false, true), config)
    }

    pub fn with_formatter(lines: &[&str], formatter: OutputFormatter, config: Config) -> Self {
        let mut script = lines.join("\n");
        script.push('\n');
        let prompter = LinePrompter::new(Cursor::new(script.into_bytes()), Vec::new());
        Self {
            session: Session::new(prompter, formatter, config),
        }
    }

    /// Runs the menu until the script exits or runs out
    pub fn run(&mut self) {
        self.session.run().expect("scripted session failed");
    }

    pub fn desk(&self) -> &HelpDesk {
        self.session.desk()
    }

    /// Everything written so far
    pub fn output(&self) -> String {
        String::from_utf8(self.session.prompter().writer().clone()).expect("output is not UTF-8")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_session_runs_to_eof() {
        let mut run = ScriptedSession::new(&["9", ""]);
        run.run();

        let out = run.output();
        assert!(out.contains("🚀 Welcome to the Help Desk Ticket System!"));
        assert!(out.contains("❌ Invalid choice. Please enter a number between 0-8."));
        assert!(!out.contains("Thank you for using"));
    }

    #[test]
    fn test_exit_prints_farewell() {
        let mut run = ScriptedSession::new(&["0", "1"]);
        run.run();
        assert!(run.output().contains("👋 Thank you for using the Help Desk Ticket System!"));
        assert!(run.desk().is_empty());
    }
}
