//! Menu command handlers
//!
//! Each handler runs one menu entry to completion against the session.
//! Validation and policy failures are returned as errors and reported by
//! [`Session::dispatch`](crate::cli::Session::dispatch).

mod assign;
mod close;
mod create;
mod process;
mod undo;
mod views;

pub use assign::handle_assign;
pub use close::handle_close;
pub use create::handle_create;
pub use process::handle_process_next;
pub use undo::handle_undo;
pub use views::{handle_dashboard, handle_history, handle_queue_status};

use crate::cli::prompt::Prompter;
use crate::cli::session::Session;
use crate::error::Result;

pub fn handle_exit<P: Prompter>(session: &mut Session<P>) -> Result<()> {
    session.lines(&[
        String::new(),
        "👋 Thank you for using the Help Desk Ticket System!".to_string(),
        "This system demonstrated:".to_string(),
        "   • Lists & Matrices (dashboard aggregates)".to_string(),
        "   • Recursion (parent dependency check)".to_string(),
        "   • Linked Lists (ticket history)".to_string(),
        "   • Stacks & Queues (undo, work queues)".to_string(),
    ])
}
