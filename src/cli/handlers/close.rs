use crate::cli::prompt::Prompter;
use crate::cli::session::Session;
use crate::error::{HelpdeskError, Result};

/// Handler for the close menu entry
///
/// Re-prompts until an existing ticket id is entered. Closing is refused
/// while any ancestor in the parent chain is still open; in that case the
/// blocking ticket and its status are shown.
///
/// # Errors
///
/// Returns an error if:
/// - The ticket is already closed
/// - The parent chain contains a cycle
/// - Reading input fails
pub fn handle_close<P: Prompter>(session: &mut Session<P>) -> Result<()> {
    session.heading("✅ CLOSING TICKET")?;

    if session.desk.is_empty() {
        return session.error("No tickets exist to close.");
    }
    let Some(id) = session.ask_ticket_id()? else {
        return Ok(());
    };

    match session.desk.close(id) {
        Ok(outcome) => {
            session.success(&format!("Ticket {id} closed successfully!"))?;
            if let Some(missing) = outcome.dangling_parent {
                session.warning(&format!(
                    "Parent ticket {missing} no longer exists and was not checked"
                ))?;
            }
            Ok(())
        },
        Err(HelpdeskError::ParentNotClosed {
            blocker, status, ..
        }) => {
            session.error("Cannot close ticket until parent is resolved.")?;
            session.info(&format!("   Parent ticket {blocker} status: {status}"))
        },
        Err(e) => Err(e),
    }
}
