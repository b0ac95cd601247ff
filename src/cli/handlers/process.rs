use crate::cli::prompt::Prompter;
use crate::cli::session::Session;
use crate::desk::Lane;
use crate::error::Result;

/// Takes the next ticket off the queues and shows it
///
/// The priority queue is drained before the normal queue. Processing only
/// displays the ticket; its status is left alone.
pub fn handle_process_next<P: Prompter>(session: &mut Session<P>) -> Result<()> {
    session.heading("⚡ PROCESSING NEXT TICKET")?;

    let Some(processed) = session.desk.process_next() else {
        return session.error("No tickets to process.");
    };

    match processed.lane {
        Lane::Priority => session.info("🔴 Processing HIGH PRIORITY ticket:")?,
        Lane::Normal => session.info("🟡 Processing NORMAL PRIORITY ticket:")?,
    }

    let ticket = &processed.ticket;
    session.lines(&[
        format!("   ID: {}", ticket.id),
        format!("   Title: {}", ticket.title),
        format!("   Description: {}", ticket.description),
        format!("   Assigned to: {}", ticket.assigned_agent),
        format!("   Status: {}", ticket.status),
    ])?;

    if let Some(parent) = processed.open_parent {
        session.warning(&format!("Warning: Parent ticket {parent} is still open"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::test_utils::ScriptedSession;

    #[test]
    fn test_fifo_order_for_normal_tickets() {
        let mut steps = Vec::new();
        for title in ["A", "B", "C"] {
            steps.extend(["1", title, "", "normal", ""]);
        }
        steps.extend(["2", "2", "2", "2", "0"]);

        let mut run = ScriptedSession::new(&steps);
        run.run();

        let out = run.output();
        let a = out.find("   Title: A\n   Description").unwrap();
        let b = out.find("   Title: B\n   Description").unwrap();
        let c = out.find("   Title: C\n   Description").unwrap();
        assert!(a < b && b < c);
        assert!(out.contains("❌ No tickets to process."));
    }

    #[test]
    fn test_warns_about_open_parent() {
        let mut run = ScriptedSession::new(&[
            "1", "Parent", "", "normal", "", "1", "Child", "", "high", "1", "2", "0",
        ]);
        run.run();

        let out = run.output();
        assert!(out.contains("🔴 Processing HIGH PRIORITY ticket:"));
        assert!(out.contains("⚠️  Warning: Parent ticket 1 is still open"));
    }
}
