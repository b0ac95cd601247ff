//! Read-only views over the desk: dashboard and queue status

mod dashboard;

pub use dashboard::{AgentWorkload, Dashboard, RecentTicket};

use serde::Serialize;

use crate::core::Ticket;

/// Sizes of the work queues and undo log, plus the ticket at each queue front
#[derive(Debug, Clone, Serialize)]
pub struct QueueStatus {
    pub priority_queue: usize,
    pub normal_queue: usize,
    pub undo_stack: usize,
    pub next_priority: Option<Ticket>,
    pub next_normal: Option<Ticket>,
}

impl QueueStatus {
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("🔴 Priority Queue: {} tickets", self.priority_queue),
            format!("🟡 Normal Queue: {} tickets", self.normal_queue),
            format!("📚 Undo Stack: {} actions", self.undo_stack),
        ];
        if let Some(ticket) = &self.next_priority {
            lines.push(String::new());
            lines.push(format!("Next high priority: {ticket}"));
        }
        if let Some(ticket) = &self.next_normal {
            lines.push(format!("Next normal priority: {ticket}"));
        }
        lines
    }
}
