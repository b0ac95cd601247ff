use crate::cli::prompt::Prompter;
use crate::cli::session::Session;
use crate::error::{HelpdeskError, Result};

/// Handler for the assign-agent menu entry
///
/// # Errors
///
/// Returns an error if:
/// - The ticket is closed
/// - The agent name is empty
/// - Reading input fails
pub fn handle_assign<P: Prompter>(session: &mut Session<P>) -> Result<()> {
    session.heading("👤 ASSIGN AGENT TO TICKET")?;

    if session.desk.is_empty() {
        return session.error("No tickets exist to assign.");
    }
    let Some(id) = session.ask_ticket_id()? else {
        return Ok(());
    };
    if session.desk.get(id).is_some_and(|t| t.is_closed()) {
        return Err(HelpdeskError::TicketClosed { id });
    }

    let Some(agent) = session.prompter.input("Enter agent name")? else {
        return Ok(());
    };
    session.desk.assign(id, &agent)?;
    session.success(&format!("Agent '{agent}' assigned to ticket {id}"))
}
