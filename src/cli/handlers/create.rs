//! Handler for the create menu entry

use crate::cli::prompt::Prompter;
use crate::cli::session::Session;
use crate::core::{Priority, TicketId};
use crate::desk::NewTicket;
use crate::error::{HelpdeskError, Result};

/// Handler for the create menu entry
///
/// Prompts for title, description, priority and an optional parent, then
/// files the ticket into its queue. Malformed priority or parent input is
/// re-prompted; an empty title or an unknown parent aborts the command.
///
/// # Errors
///
/// Returns an error if:
/// - The title is empty
/// - The parent id does not exist
/// - Reading input fails
pub fn handle_create<P: Prompter>(session: &mut Session<P>) -> Result<()> {
    session.heading("📝 CREATING NEW TICKET")?;

    let Some(title) = session.prompter.input("Enter ticket title")? else {
        return Ok(());
    };
    if title.is_empty() {
        return Err(HelpdeskError::EmptyTitle);
    }

    let Some(description) = session.prompter.input("Enter ticket description")? else {
        return Ok(());
    };
    let Some(priority) = ask_priority(session)? else {
        return Ok(());
    };
    let Some(parent) = ask_parent(session)? else {
        return Ok(());
    };

    let new = NewTicket {
        title,
        description,
        priority,
        parent,
        agent: None,
    };
    let id = session.desk.create(new)?;

    match priority {
        Priority::High => session.info("🔴 High priority ticket added to priority queue")?,
        Priority::Normal => session.info("🟡 Normal priority ticket added to standard queue")?,
    }
    session.success(&format!("Ticket {id} created successfully!"))?;

    if let Some(ticket) = session.desk.get(id).cloned() {
        session.info(&format!("   Title: {}", ticket.title))?;
        session.info(&format!("   Priority: {}", ticket.priority))?;
        session.info(&format!(
            "   Parent: {}",
            ticket
                .parent
                .map_or_else(|| "None".to_string(), |p| p.to_string())
        ))?;
    }
    Ok(())
}

fn ask_priority<P: Prompter>(session: &mut Session<P>) -> Result<Option<Priority>> {
    let names = Priority::ALL.map(Priority::as_str);
    let choice = session.prompter.select("Priority", &names)?;
    Ok(choice.map(|index| Priority::ALL[index]))
}

/// `Some(None)` means the user skipped the parent
fn ask_parent<P: Prompter>(session: &mut Session<P>) -> Result<Option<Option<TicketId>>> {
    loop {
        let Some(answer) = session
            .prompter
            .input("Parent ticket ID (optional, press Enter to skip)")?
        else {
            return Ok(None);
        };
        if answer.is_empty() {
            return Ok(Some(None));
        }
        match answer.parse::<TicketId>() {
            Ok(id) => return Ok(Some(Some(id))),
            Err(_) => session.error("Invalid ticket ID. Please enter a number or press Enter to skip.")?,
        }
    }
}
