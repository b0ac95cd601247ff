//! Containers backing the help desk session
//!
//! All of them hold ticket ids rather than tickets; the desk's arena owns
//! the tickets themselves.

mod history;
mod queue;
mod stack;

pub use history::History;
pub use queue::{PriorityQueue, TicketQueue};
pub use stack::UndoStack;
