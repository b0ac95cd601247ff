//! Line input abstraction for the interactive menu
//!
//! [`Prompter`] is the seam between the menu loop and the terminal.
//! [`LinePrompter`] reads plain lines from any reader, which covers piped
//! input and tests; [`TermPrompter`] uses `dialoguer` widgets on a real
//! terminal. Every read returns `None` once input is exhausted so the
//! session can end cleanly.

use std::io::{self, BufRead, Write};

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

use crate::error::Result;

pub trait Prompter {
    /// Reads one trimmed line
    fn input(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Yes/no question; anything but yes counts as no
    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>>;

    /// Picks one of `items`, re-asking until a valid choice is made
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<Option<usize>>;

    /// Writes one line of output
    fn say(&mut self, line: &str) -> Result<()>;
}

/// Plain line-based prompter over arbitrary I/O
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn input(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{prompt}: ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>> {
        let answer = self.input(&format!("{prompt} (y/n)"))?;
        Ok(answer.map(|a| matches!(a.to_lowercase().as_str(), "y" | "yes")))
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<Option<usize>> {
        let label = format!("{prompt} ({})", items.join("/"));
        loop {
            let Some(answer) = self.input(&label)? else {
                return Ok(None);
            };
            if let Some(index) = items.iter().position(|item| item.eq_ignore_ascii_case(&answer)) {
                return Ok(Some(index));
            }
            self.say(&format!(
                "❌ Invalid {}. Please enter one of: {}",
                prompt.to_lowercase(),
                items.join(", ")
            ))?;
        }
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }
}

/// Terminal prompter built on `dialoguer`
pub struct TermPrompter {
    theme: ColorfulTheme,
}

impl TermPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TermPrompter {
    fn input(&mut self, prompt: &str) -> Result<Option<String>> {
        let result = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();
        end_of_input(result).map(|line| line.map(|l| l.trim().to_string()))
    }

    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>> {
        let result = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact();
        end_of_input(result)
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<Option<usize>> {
        let result = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact();
        end_of_input(result)
    }

    fn say(&mut self, line: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")?;
        Ok(())
    }
}

/// Maps a closed terminal to `None`; other failures propagate
fn end_of_input<T>(result: dialoguer::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e.into()),
    }
}
