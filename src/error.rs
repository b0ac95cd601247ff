//! Error types for the help desk
//!
//! All fallible operations return [`Result`], whose error type separates
//! validation and policy failures (reported and recovered from inside the
//! menu loop) from I/O, prompt and configuration failures (which end the
//! session).

use crate::core::{Status, TicketId};
use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, HelpdeskError>;

/// Main error type for the help desk
#[derive(Error, Debug)]
pub enum HelpdeskError {
    /// A ticket was submitted without a title
    #[error("Title cannot be empty")]
    EmptyTitle,

    /// An agent name was empty
    #[error("Agent name cannot be empty")]
    EmptyAgent,

    /// A parent id given at creation does not exist
    #[error("Parent ticket {parent} does not exist")]
    UnknownParent { parent: TicketId },

    /// No ticket with the given id is in the active set
    #[error("Ticket {id} not found")]
    TicketNotFound { id: TicketId },

    /// Attempted to close a ticket that is already closed
    #[error("Ticket {id} is already closed")]
    AlreadyClosed { id: TicketId },

    /// An ancestor in the parent chain is still open
    #[error("Cannot close ticket {id} until parent is resolved: parent {blocker} is {status}")]
    ParentNotClosed {
        id: TicketId,
        blocker: TicketId,
        status: Status,
    },

    /// The parent chain loops back on itself
    #[error("Dependency cycle detected for ticket {id}: {}", format_chain(.chain))]
    CycleDetected { id: TicketId, chain: Vec<TicketId> },

    /// Attempted to assign an agent to a closed ticket
    #[error("Cannot assign agent to closed ticket {id}")]
    TicketClosed { id: TicketId },

    /// The undo log is empty
    #[error("Nothing to undo")]
    NothingToUndo,

    /// Malformed user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration values failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration sources could not be read or parsed
    #[error("Failed to read config: {0}")]
    Config(#[from] config::ConfigError),

    /// Terminal prompt failure
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn format_chain(chain: &[TicketId]) -> String {
    chain
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

impl HelpdeskError {
    /// Message suitable for showing to the user
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Suggestions for resolving the error, if any
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ParentNotClosed { blocker, .. } => {
                vec![format!("Close ticket {blocker} first")]
            },
            Self::UnknownParent { .. } => {
                vec!["Leave the parent empty or pick an existing ticket id".to_string()]
            },
            Self::CycleDetected { .. } => {
                vec!["Break the cycle by removing one of the tickets with undo".to_string()]
            },
            Self::Config(_) | Self::InvalidConfig(_) => vec![
                "Check the config file passed with --config".to_string(),
                "Check HELPDESK_* environment variables".to_string(),
            ],
            _ => vec![],
        }
    }

    /// Whether the session can carry on after reporting this error
    pub const fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::Io(_) | Self::Prompt(_) | Self::Config(_) | Self::InvalidConfig(_)
        )
    }

    /// Whether the error came from configuration loading
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_) | Self::InvalidConfig(_))
    }
}
