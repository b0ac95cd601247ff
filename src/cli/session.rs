//! The interactive menu loop

use std::ops::ControlFlow;

use serde::Serialize;
use tracing::{debug, info};

use super::handlers;
use super::menu::MenuChoice;
use super::output::OutputFormatter;
use super::prompt::Prompter;
use crate::config::Config;
use crate::core::TicketId;
use crate::desk::HelpDesk;
use crate::error::Result;

/// One interactive help desk session
///
/// Owns the desk state and the prompter for the lifetime of the menu loop.
/// Handlers in [`super::handlers`] borrow the session mutably, one command
/// at a time.
pub struct Session<P: Prompter> {
    pub(crate) desk: HelpDesk,
    pub(crate) prompter: P,
    pub(crate) formatter: OutputFormatter,
    pub(crate) config: Config,
}

impl<P: Prompter> Session<P> {
    pub fn new(prompter: P, formatter: OutputFormatter, config: Config) -> Self {
        Self {
            desk: HelpDesk::with_default_agent(config.default_agent.clone()),
            prompter,
            formatter,
            config,
        }
    }

    /// Runs the menu until the user exits or input runs out
    pub fn run(&mut self) -> Result<()> {
        info!("session started");
        self.info("🚀 Welcome to the Help Desk Ticket System!")?;
        self.info("This system demonstrates various data structures and algorithms.")?;

        loop {
            for line in MenuChoice::render_lines() {
                self.prompter.say(&line)?;
            }

            let Some(input) = self.prompter.input("Enter your choice (0-8)")? else {
                debug!("input closed");
                break;
            };

            match input.parse::<MenuChoice>() {
                Ok(choice) => {
                    if self.dispatch(choice)?.is_break() {
                        break;
                    }
                },
                Err(_) => self.error("Invalid choice. Please enter a number between 0-8.")?,
            }
        }

        info!(tickets = self.desk.len(), "session ended");
        Ok(())
    }

    /// Runs one menu command; recoverable errors are reported, not returned
    ///
    /// Returns `Break` once the user has chosen to exit.
    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<ControlFlow<()>> {
        debug!(?choice, "menu choice");
        let result = match choice {
            MenuChoice::Create => handlers::handle_create(self),
            MenuChoice::ProcessNext => handlers::handle_process_next(self),
            MenuChoice::Close => handlers::handle_close(self),
            MenuChoice::Undo => handlers::handle_undo(self),
            MenuChoice::Dashboard => handlers::handle_dashboard(self),
            MenuChoice::History => handlers::handle_history(self),
            MenuChoice::AssignAgent => handlers::handle_assign(self),
            MenuChoice::QueueStatus => handlers::handle_queue_status(self),
            MenuChoice::Exit => {
                handlers::handle_exit(self)?;
                return Ok(ControlFlow::Break(()));
            },
        };

        match result {
            Ok(()) => {},
            Err(e) if e.is_recoverable() => {
                debug!(error = %e, "command rejected");
                self.error(&e.user_message())?;
                for suggestion in e.suggestions() {
                    self.info(&format!("   • {suggestion}"))?;
                }
            },
            Err(e) => return Err(e),
        }
        Ok(ControlFlow::Continue(()))
    }

    pub const fn desk(&self) -> &HelpDesk {
        &self.desk
    }

    pub const fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Asks for an existing ticket id, re-asking on bad or unknown ids
    pub(crate) fn ask_ticket_id(&mut self) -> Result<Option<TicketId>> {
        loop {
            let Some(answer) = self.prompter.input("Enter ticket ID")? else {
                return Ok(None);
            };
            match answer.parse::<TicketId>() {
                Ok(id) if self.desk.contains(id) => return Ok(Some(id)),
                Ok(_) => self.error("Ticket ID not found. Please try again.")?,
                Err(_) => self.error("Invalid input. Please enter a number.")?,
            }
        }
    }

    pub(crate) fn success(&mut self, message: &str) -> Result<()> {
        let line = self.formatter.success(message);
        self.prompter.say(&line)
    }

    pub(crate) fn error(&mut self, message: &str) -> Result<()> {
        let line = self.formatter.error(message);
        self.prompter.say(&line)
    }

    pub(crate) fn warning(&mut self, message: &str) -> Result<()> {
        let line = self.formatter.warning(message);
        self.prompter.say(&line)
    }

    pub(crate) fn info(&mut self, message: &str) -> Result<()> {
        let line = self.formatter.info(message);
        self.prompter.say(&line)
    }

    pub(crate) fn heading(&mut self, title: &str) -> Result<()> {
        for line in self.formatter.heading(title) {
            self.prompter.say(&line)?;
        }
        Ok(())
    }

    pub(crate) fn lines(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            self.prompter.say(line)?;
        }
        Ok(())
    }

    pub(crate) fn json<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let rendered = self.formatter.json(value)?;
        self.prompter.say(&rendered)
    }
}
