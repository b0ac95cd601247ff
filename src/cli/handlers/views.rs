//! Read-only views: dashboard, history and queue status
//!
//! Each view prints text by default and JSON when `--json` is set.

use crate::cli::prompt::Prompter;
use crate::cli::session::Session;
use crate::error::Result;

pub fn handle_dashboard<P: Prompter>(session: &mut Session<P>) -> Result<()> {
    let dashboard = session.desk.dashboard(session.config.recent_activity);
    if session.formatter.is_json() {
        return session.json(&dashboard);
    }
    session.lines(&dashboard.render_lines())
}

/// Lists every ticket ever created, including ones removed by undo
pub fn handle_history<P: Prompter>(session: &mut Session<P>) -> Result<()> {
    if session.formatter.is_json() {
        let entries = serde_json::to_value(session.desk.history().collect::<Vec<_>>())?;
        return session.json(&entries);
    }

    let lines: Vec<String> = session
        .desk
        .history()
        .map(|entry| match entry.ticket {
            Some(ticket) => ticket.to_string(),
            None => format!("[{}] (removed by undo)", entry.id),
        })
        .collect();

    session.heading("📜 TICKET HISTORY (Linked List)")?;
    if lines.is_empty() {
        return session.info("No tickets in history.");
    }
    session.lines(&lines)
}

pub fn handle_queue_status<P: Prompter>(session: &mut Session<P>) -> Result<()> {
    let status = session.desk.queue_status();
    if session.formatter.is_json() {
        return session.json(&status);
    }
    session.heading("📋 QUEUE STATUS")?;
    session.lines(&status.render_lines())
}

#[cfg(test)]
mod tests {
    use crate::cli::OutputFormatter;
    use crate::config::Config;
    use crate::test_utils::ScriptedSession;

    #[test]
    fn test_dashboard_text() {
        let mut run = ScriptedSession::new(&[
            "1", "A", "", "high", "", "1", "B", "", "normal", "", "3", "2", "5", "0",
        ]);
        run.run();

        let out = run.output();
        assert!(out.contains("   Total Tickets: 2"));
        assert!(out.contains("   Closed Tickets: 1"));
        assert!(out.contains("   Resolution Rate: 50.0%"));
        assert!(out.contains("   Unassigned: 1 open, 1 closed (Total: 2)"));
    }

    #[test]
    fn test_history_marks_undone_tickets() {
        let mut run = ScriptedSession::new(&[
            "6", "1", "A", "", "normal", "", "1", "B", "", "normal", "", "4", "y", "6", "0",
        ]);
        run.run();

        let out = run.output();
        assert!(out.contains("No tickets in history."));
        assert!(out.contains("[1] A (normal) - open - Unassigned"));
        assert!(out.contains("[2] (removed by undo)"));
    }

    #[test]
    fn test_queue_status_text() {
        let mut run = ScriptedSession::new(&[
            "1", "A", "", "high", "", "1", "B", "", "normal", "", "8", "0",
        ]);
        run.run();

        let out = run.output();
        assert!(out.contains("🔴 Priority Queue: 1 tickets"));
        assert!(out.contains("🟡 Normal Queue: 1 tickets"));
        assert!(out.contains("📚 Undo Stack: 2 actions"));
        assert!(out.contains("Next high priority: [1] A (high) - open - Unassigned"));
        assert!(out.contains("Next normal priority: [2] B (normal) - open - Unassigned"));
    }

    #[test]
    fn test_json_views() {
        let mut run = ScriptedSession::with_formatter(
            &["1", "A", "", "high", "", "5", "8", "0"],
            OutputFormatter::new(true, true),
            Config::default(),
        );
        run.run();

        let out = run.output();
        assert!(out.contains("\"high_priority\": 1"));
        assert!(out.contains("\"priority_queue\": 1"));
    }

    #[test]
    fn test_json_history_marks_undone_ticket_null() {
        let config = Config {
            confirm_undo: false,
            ..Config::default()
        };
        let mut run = ScriptedSession::with_formatter(
            &["1", "A", "", "normal", "", "1", "B", "", "normal", "", "4", "6", "0"],
            OutputFormatter::new(true, true),
            config,
        );
        run.run();

        let out = run.output();
        assert!(out.contains("\"title\": \"A\""));
        assert!(out.contains("\"id\": 2,\n    \"ticket\": null"));
    }
}
