//! Aggregate statistics over the active ticket set

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::{Priority, Status, Ticket, TicketId};

/// Open/closed counts for one agent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AgentWorkload {
    pub agent: String,
    pub open: usize,
    pub closed: usize,
}

impl AgentWorkload {
    pub const fn total(&self) -> usize {
        self.open + self.closed
    }
}

/// Summary line for the recent activity list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentTicket {
    pub id: TicketId,
    pub title: String,
    pub status: Status,
    pub priority: Priority,
    pub updated_at: DateTime<Utc>,
}

/// Dashboard aggregates
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dashboard {
    pub total: usize,
    pub open: usize,
    pub closed: usize,
    /// Closed tickets as a percentage of all tickets, 0 when there are none
    pub resolution_rate: f64,
    pub high_priority: usize,
    pub normal_priority: usize,
    /// Sorted by agent name
    pub agents: Vec<AgentWorkload>,
    /// Most recently updated first
    pub recent: Vec<RecentTicket>,
}

impl Dashboard {
    pub fn from_tickets<'a, I>(tickets: I, recent_limit: usize) -> Self
    where
        I: IntoIterator<Item = &'a Ticket>,
    {
        let mut dashboard = Self::default();
        let mut agents: BTreeMap<&str, AgentWorkload> = BTreeMap::new();
        let mut recent: Vec<&Ticket> = Vec::new();

        for ticket in tickets {
            dashboard.total += 1;
            match ticket.priority {
                Priority::High => dashboard.high_priority += 1,
                Priority::Normal => dashboard.normal_priority += 1,
            }

            let workload = agents
                .entry(ticket.assigned_agent.as_str())
                .or_insert_with(|| AgentWorkload {
                    agent: ticket.assigned_agent.clone(),
                    ..AgentWorkload::default()
                });
            match ticket.status {
                Status::Open => {
                    dashboard.open += 1;
                    workload.open += 1;
                },
                Status::Closed => {
                    dashboard.closed += 1;
                    workload.closed += 1;
                },
            }
            recent.push(ticket);
        }

        if dashboard.total > 0 {
            #[allow(clippy::cast_precision_loss)]
            let rate = dashboard.closed as f64 / dashboard.total as f64 * 100.0;
            dashboard.resolution_rate = rate;
        }

        recent.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        dashboard.recent = recent
            .into_iter()
            .take(recent_limit)
            .map(|t| RecentTicket {
                id: t.id,
                title: t.title.clone(),
                status: t.status,
                priority: t.priority,
                updated_at: t.updated_at,
            })
            .collect();
        dashboard.agents = agents.into_values().collect();

        dashboard
    }

    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Text rendering, one line per entry
    pub fn render_lines(&self) -> Vec<String> {
        let rule = "=".repeat(50);
        let mut lines = vec![String::new(), rule.clone(), "📊 TICKET DASHBOARD".to_string(), rule.clone()];

        if self.is_empty() {
            lines.push("No tickets found.".to_string());
            lines.push(rule);
            return lines;
        }

        lines.push(String::new());
        lines.push("📈 OVERALL STATISTICS:".to_string());
        lines.push(format!("   Total Tickets: {}", self.total));
        lines.push(format!("   Open Tickets: {}", self.open));
        lines.push(format!("   Closed Tickets: {}", self.closed));
        lines.push(format!("   Resolution Rate: {:.1}%", self.resolution_rate));

        lines.push(String::new());
        lines.push("🎯 PRIORITY BREAKDOWN:".to_string());
        lines.push(format!("   High Priority: {}", self.high_priority));
        lines.push(format!("   Normal Priority: {}", self.normal_priority));

        lines.push(String::new());
        lines.push("👥 AGENT WORKLOAD:".to_string());
        for workload in &self.agents {
            lines.push(format!(
                "   {}: {} open, {} closed (Total: {})",
                workload.agent,
                workload.open,
                workload.closed,
                workload.total()
            ));
        }

        lines.push(String::new());
        lines.push("🕒 RECENT ACTIVITY:".to_string());
        for ticket in &self.recent {
            let status_icon = match ticket.status {
                Status::Open => "🟢",
                Status::Closed => "🔴",
            };
            let priority_icon = match ticket.priority {
                Priority::High => "🔴",
                Priority::Normal => "🟡",
            };
            lines.push(format!(
                "   {status_icon} {priority_icon} [{}] {}",
                ticket.id, ticket.title
            ));
        }

        lines.push(rule);
        lines
    }
}
