use crate::cli::prompt::Prompter;
use crate::cli::session::Session;
use crate::error::Result;

/// Shows the last action and reverses it after confirmation
///
/// Confirmation can be turned off with `confirm_undo = false`.
pub fn handle_undo<P: Prompter>(session: &mut Session<P>) -> Result<()> {
    session.heading("🔄 UNDO LAST ACTION")?;

    let Some(action) = session.desk.peek_undo().cloned() else {
        return session.error("Nothing to undo.");
    };
    session.info(&format!("Last action: {action}"))?;

    if session.config.confirm_undo {
        match session.prompter.confirm("Undo this action?")? {
            None => return Ok(()),
            Some(false) => return session.info("Undo cancelled."),
            Some(true) => {},
        }
    }

    let undone = session.desk.undo()?;
    session.info(&format!("🔄 Undo: {undone}"))
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::core::{TicketId, UNASSIGNED};
    use crate::test_utils::ScriptedSession;

    #[test]
    fn test_undo_create_after_confirmation() {
        let mut run = ScriptedSession::new(&[
            "1", "Typo", "", "high", "", "4", "n", "4", "y", "4", "0",
        ]);
        run.run();

        assert!(run.desk().is_empty());
        assert_eq!(run.desk().queue_status().priority_queue, 0);
        let out = run.output();
        assert!(out.contains("Last action: create ticket 1"));
        assert!(out.contains("Undo cancelled."));
        assert!(out.contains("🔄 Undo: Removed Ticket 1"));
        assert!(out.contains("❌ Nothing to undo."));
    }

    #[test]
    fn test_undo_close_and_assign() {
        let mut run = ScriptedSession::new(&[
            "1", "Laptop", "", "normal", "", "7", "1", "alice", "4", "y", "3", "1", "4", "y", "0",
        ]);
        run.run();

        let ticket = run.desk().get(TicketId::new(1)).unwrap();
        assert!(ticket.is_open());
        assert_eq!(ticket.assigned_agent, UNASSIGNED);
        let out = run.output();
        assert!(out.contains("🔄 Undo: Ticket 1 assigned back to 'Unassigned'"));
        assert!(out.contains("🔄 Undo: Reopened Ticket 1"));
    }

    #[test]
    fn test_undo_without_confirmation() {
        let config = Config {
            confirm_undo: false,
            ..Config::default()
        };
        let mut run = ScriptedSession::with_config(&["1", "Quick", "", "normal", "", "4", "0"], config);
        run.run();
        assert!(run.desk().is_empty());
    }
}
