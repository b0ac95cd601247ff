use std::fmt;

use crate::core::TicketId;

/// A reversible change recorded on the undo log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Create {
        ticket: TicketId,
    },
    Close {
        ticket: TicketId,
    },
    AssignAgent {
        ticket: TicketId,
        previous: String,
        assigned: String,
    },
}

impl Action {
    pub const fn ticket(&self) -> TicketId {
        match self {
            Self::Create { ticket } | Self::Close { ticket } | Self::AssignAgent { ticket, .. } => {
                *ticket
            },
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Close { .. } => "close",
            Self::AssignAgent { .. } => "assign_agent",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssignAgent {
                ticket,
                previous,
                assigned,
            } => write!(
                f,
                "assign_agent ticket {ticket} ({previous} -> {assigned})"
            ),
            _ => write!(f, "{} ticket {}", self.name(), self.ticket()),
        }
    }
}

/// What an undo actually did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Undone {
    /// A created ticket was removed from the active set
    Removed(TicketId),
    /// A closed ticket was reopened
    Reopened(TicketId),
    /// An agent assignment was rolled back
    Reassigned { ticket: TicketId, agent: String },
}

impl fmt::Display for Undone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Removed(id) => write!(f, "Removed Ticket {id}"),
            Self::Reopened(id) => write!(f, "Reopened Ticket {id}"),
            Self::Reassigned { ticket, agent } => {
                write!(f, "Ticket {ticket} assigned back to '{agent}'")
            },
        }
    }
}
