//! Core domain types: tickets and the closure rule over their parent chains

mod builders;
pub mod dependency;
mod ticket;

pub use builders::TicketBuilder;
pub use dependency::{Closability, check_closable, is_closable};
pub use ticket::{Priority, Status, Ticket, TicketId, UNASSIGNED};
