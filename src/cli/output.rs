//! Message formatting for the interactive session

use colored::Colorize;
use serde::Serialize;

use crate::error::Result;

/// Formats status messages and structured output
///
/// Formatting is kept separate from writing so the same messages can go to
/// a terminal or to a captured writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputFormatter {
    json: bool,
    no_color: bool,
}

impl OutputFormatter {
    pub fn new(json: bool, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { json, no_color }
    }

    /// Whether structured views should be emitted as JSON
    pub const fn is_json(&self) -> bool {
        self.json
    }

    pub fn success(&self, message: &str) -> String {
        let line = format!("✅ {message}");
        if self.no_color { line } else { line.green().to_string() }
    }

    pub fn error(&self, message: &str) -> String {
        let line = format!("❌ {message}");
        if self.no_color { line } else { line.red().to_string() }
    }

    pub fn warning(&self, message: &str) -> String {
        let line = format!("⚠️  {message}");
        if self.no_color { line } else { line.yellow().to_string() }
    }

    pub fn info(&self, message: &str) -> String {
        message.to_string()
    }

    /// Section title followed by an underline
    pub fn heading(&self, title: &str) -> [String; 3] {
        let title = if self.no_color {
            title.to_string()
        } else {
            title.bold().to_string()
        };
        [String::new(), title, "-".repeat(30)]
    }

    pub fn json<T: Serialize>(&self, value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}
