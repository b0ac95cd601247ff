//! The help desk session state
//!
//! [`HelpDesk`] owns every ticket in an id-keyed arena. The history list,
//! undo log and the two work queues only hold ids, and every mutation
//! below keeps them consistent with the arena in a single call.

mod action;

pub use action::{Action, Undone};

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::containers::{History, PriorityQueue, TicketQueue, UndoStack};
use crate::core::{Closability, Priority, Status, Ticket, TicketId, UNASSIGNED, check_closable};
use crate::error::{HelpdeskError, Result};
use crate::report::{Dashboard, QueueStatus};

/// Input for [`HelpDesk::create`]
#[derive(Debug, Clone, Default)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub parent: Option<TicketId>,
    /// Falls back to the desk's default agent
    pub agent: Option<String>,
}

impl NewTicket {
    pub fn new(title: impl Into<String>, priority: Priority) -> Self {
        Self {
            title: title.into(),
            priority,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub const fn parent(mut self, parent: TicketId) -> Self {
        self.parent = Some(parent);
        self
    }

    #[must_use]
    pub fn agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = Some(agent.into());
        self
    }
}

/// Which queue a processed ticket came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    Priority,
    Normal,
}

/// A ticket taken off one of the work queues
#[derive(Debug, Clone)]
pub struct Processed {
    pub ticket: Ticket,
    pub lane: Lane,
    /// Direct parent, when it is still in the active set and not closed
    pub open_parent: Option<TicketId>,
}

/// Result of a successful close
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseOutcome {
    pub id: TicketId,
    /// Set when the parent chain ended at a ticket that no longer exists
    pub dangling_parent: Option<TicketId>,
}

/// One entry of the creation history
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HistoryEntry<'a> {
    pub id: TicketId,
    /// `None` once the ticket has been removed by undo
    pub ticket: Option<&'a Ticket>,
}

/// In-memory help desk: ticket arena plus its four containers
#[derive(Debug)]
pub struct HelpDesk {
    tickets: BTreeMap<TicketId, Ticket>,
    history: History<TicketId>,
    undo_log: UndoStack<Action>,
    normal_queue: TicketQueue<TicketId>,
    priority_queue: PriorityQueue<TicketId>,
    next_id: u64,
    default_agent: String,
}

impl Default for HelpDesk {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpDesk {
    pub fn new() -> Self {
        Self::with_default_agent(UNASSIGNED)
    }

    /// Desk whose new tickets start out assigned to `agent`
    pub fn with_default_agent(agent: impl Into<String>) -> Self {
        Self {
            tickets: BTreeMap::new(),
            history: History::new(),
            undo_log: UndoStack::new(),
            normal_queue: TicketQueue::new(),
            priority_queue: PriorityQueue::new(),
            next_id: 1,
            default_agent: agent.into(),
        }
    }

    /// Creates a ticket and files it into history, its queue and the undo log
    pub fn create(&mut self, new: NewTicket) -> Result<TicketId> {
        let title = new.title.trim();
        if title.is_empty() {
            return Err(HelpdeskError::EmptyTitle);
        }
        if let Some(parent) = new.parent {
            if !self.tickets.contains_key(&parent) {
                return Err(HelpdeskError::UnknownParent { parent });
            }
        }

        let id = TicketId::new(self.next_id);
        self.next_id += 1;

        let agent = new
            .agent
            .filter(|agent| !agent.trim().is_empty())
            .unwrap_or_else(|| self.default_agent.clone());
        let ticket = Ticket::new(
            id,
            title,
            new.description.trim(),
            new.priority,
            new.parent,
            agent,
        );

        match ticket.priority {
            Priority::High => self.priority_queue.enqueue(id, ticket.priority),
            Priority::Normal => self.normal_queue.enqueue(id),
        }
        self.tickets.insert(id, ticket);
        self.history.append(id);
        self.undo_log.push(Action::Create { ticket: id });

        debug!(%id, priority = %new.priority, parent = ?new.parent, "ticket created");
        Ok(id)
    }

    /// Takes the next ticket, priority queue first. Does not change status.
    pub fn process_next(&mut self) -> Option<Processed> {
        loop {
            let (id, lane) = if let Some(id) = self.priority_queue.dequeue() {
                (id, Lane::Priority)
            } else {
                (self.normal_queue.dequeue()?, Lane::Normal)
            };

            // Queues are purged on undo, so a miss here means nothing to show
            let Some(ticket) = self.tickets.get(&id) else {
                warn!(%id, "queued ticket missing from the active set");
                continue;
            };

            let open_parent = ticket
                .parent
                .and_then(|parent| self.tickets.get(&parent))
                .filter(|parent| !parent.is_closed())
                .map(|parent| parent.id);

            debug!(%id, ?lane, "ticket processed");
            return Some(Processed {
                ticket: ticket.clone(),
                lane,
                open_parent,
            });
        }
    }

    /// Closes a ticket once every ancestor is closed
    pub fn close(&mut self, id: TicketId) -> Result<CloseOutcome> {
        let ticket = self
            .tickets
            .get(&id)
            .ok_or(HelpdeskError::TicketNotFound { id })?;
        if ticket.is_closed() {
            return Err(HelpdeskError::AlreadyClosed { id });
        }

        let dangling_parent = match check_closable(ticket, |id| self.tickets.get(&id))? {
            Closability::Clear => None,
            Closability::DanglingParent { missing } => {
                warn!(%id, parent = %missing, "closing ticket whose parent no longer exists");
                Some(missing)
            },
            Closability::Blocked { ancestor, status } => {
                return Err(HelpdeskError::ParentNotClosed {
                    id,
                    blocker: ancestor,
                    status,
                });
            },
        };

        if let Some(ticket) = self.tickets.get_mut(&id) {
            ticket.set_status(Status::Closed);
        }
        self.undo_log.push(Action::Close { ticket: id });

        debug!(%id, "ticket closed");
        Ok(CloseOutcome {
            id,
            dangling_parent,
        })
    }

    /// Hands an open ticket to `agent`
    pub fn assign(&mut self, id: TicketId, agent: &str) -> Result<()> {
        let agent = agent.trim();
        let ticket = self
            .tickets
            .get_mut(&id)
            .ok_or(HelpdeskError::TicketNotFound { id })?;
        if ticket.is_closed() {
            return Err(HelpdeskError::TicketClosed { id });
        }
        if agent.is_empty() {
            return Err(HelpdeskError::EmptyAgent);
        }

        let previous = ticket.assigned_agent.clone();
        ticket.assign(agent);
        self.undo_log.push(Action::AssignAgent {
            ticket: id,
            previous: previous.clone(),
            assigned: agent.to_string(),
        });

        debug!(%id, from = %previous, to = %agent, "agent assigned");
        Ok(())
    }

    /// The action [`undo`](Self::undo) would reverse
    pub fn peek_undo(&self) -> Option<&Action> {
        self.undo_log.peek()
    }

    /// Pops the latest action and reverses it
    pub fn undo(&mut self) -> Result<Undone> {
        let action = self.undo_log.pop().ok_or(HelpdeskError::NothingToUndo)?;
        debug!(%action, "undoing");

        match action {
            Action::Create { ticket: id } => {
                let ticket = self
                    .tickets
                    .remove(&id)
                    .ok_or(HelpdeskError::TicketNotFound { id })?;
                // Already dequeued for processing is fine
                let removed = match ticket.priority {
                    Priority::High => self.priority_queue.remove(&id),
                    Priority::Normal => self.normal_queue.remove(&id),
                };
                debug!(%id, still_queued = removed, "ticket removed");
                Ok(Undone::Removed(id))
            },
            Action::Close { ticket: id } => {
                let ticket = self
                    .tickets
                    .get_mut(&id)
                    .ok_or(HelpdeskError::TicketNotFound { id })?;
                ticket.set_status(Status::Open);
                Ok(Undone::Reopened(id))
            },
            Action::AssignAgent {
                ticket: id,
                previous,
                ..
            } => {
                let ticket = self
                    .tickets
                    .get_mut(&id)
                    .ok_or(HelpdeskError::TicketNotFound { id })?;
                ticket.assign(previous.clone());
                Ok(Undone::Reassigned {
                    ticket: id,
                    agent: previous,
                })
            },
        }
    }

    pub fn get(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.get(&id)
    }

    pub fn contains(&self, id: TicketId) -> bool {
        self.tickets.contains_key(&id)
    }

    /// Active tickets in creation order
    pub fn tickets(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.values()
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Every ticket ever created, oldest first, including undone ones
    pub fn history(&self) -> impl Iterator<Item = HistoryEntry<'_>> {
        self.history.iter().map(|&id| HistoryEntry {
            id,
            ticket: self.tickets.get(&id),
        })
    }

    /// Looks a ticket up through the history list.
    ///
    /// Returns `None` both for ids never created and for tickets removed by
    /// undo; history never hands out stale data.
    pub fn history_lookup(&self, id: TicketId) -> Option<&Ticket> {
        self.history
            .find(|&entry| entry == id)
            .and_then(|id| self.tickets.get(id))
    }

    pub fn queue_status(&self) -> QueueStatus {
        QueueStatus {
            priority_queue: self.priority_queue.len(),
            normal_queue: self.normal_queue.len(),
            undo_stack: self.undo_log.len(),
            next_priority: self
                .priority_queue
                .peek()
                .and_then(|id| self.tickets.get(id))
                .cloned(),
            next_normal: self
                .normal_queue
                .peek()
                .and_then(|id| self.tickets.get(id))
                .cloned(),
        }
    }

    pub fn dashboard(&self, recent_limit: usize) -> Dashboard {
        Dashboard::from_tickets(self.tickets.values(), recent_limit)
    }

    /// Puts a ticket straight into the arena, bypassing validation
    #[cfg(test)]
    pub(crate) fn insert_unchecked(&mut self, ticket: Ticket) {
        self.next_id = self.next_id.max(ticket.id.value() + 1);
        self.tickets.insert(ticket.id, ticket);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TicketBuilder;

    fn normal(title: &str) -> NewTicket {
        NewTicket::new(title, Priority::Normal)
    }

    fn high(title: &str) -> NewTicket {
        NewTicket::new(title, Priority::High)
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut desk = HelpDesk::new();
        let ids: Vec<_> = (0..4)
            .map(|i| desk.create(normal(&format!("t{i}"))).unwrap())
            .collect();
        assert_eq!(
            ids,
            (1..=4).map(TicketId::new).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_create_rejects_empty_title_and_unknown_parent() {
        let mut desk = HelpDesk::new();
        assert!(matches!(
            desk.create(normal("   ")),
            Err(HelpdeskError::EmptyTitle)
        ));
        assert!(matches!(
            desk.create(normal("child").parent(TicketId::new(42))),
            Err(HelpdeskError::UnknownParent { parent }) if parent == TicketId::new(42)
        ));
        // Rejections neither consume ids nor log actions
        assert!(desk.is_empty());
        assert!(desk.peek_undo().is_none());
        assert_eq!(desk.create(normal("ok")).unwrap(), TicketId::new(1));
    }

    #[test]
    fn test_create_uses_default_agent() {
        let mut desk = HelpDesk::with_default_agent("triage");
        let id = desk.create(normal("a")).unwrap();
        assert_eq!(desk.get(id).unwrap().assigned_agent, "triage");

        let id = desk.create(normal("b").agent("carol")).unwrap();
        assert_eq!(desk.get(id).unwrap().assigned_agent, "carol");
    }

    #[test]
    fn test_close_requires_closed_parent() {
        let mut desk = HelpDesk::new();
        let parent = desk.create(normal("parent")).unwrap();
        let child = desk.create(high("child").parent(parent)).unwrap();

        let err = desk.close(child).unwrap_err();
        assert!(matches!(
            err,
            HelpdeskError::ParentNotClosed { blocker, status: Status::Open, .. } if blocker == parent
        ));
        assert_eq!(desk.get(child).unwrap().status, Status::Open);

        desk.close(parent).unwrap();
        let outcome = desk.close(child).unwrap();
        assert_eq!(outcome.dangling_parent, None);
        assert!(desk.get(child).unwrap().is_closed());
    }

    #[test]
    fn test_close_twice_is_rejected() {
        let mut desk = HelpDesk::new();
        let id = desk.create(normal("once")).unwrap();
        desk.close(id).unwrap();
        assert!(matches!(
            desk.close(id),
            Err(HelpdeskError::AlreadyClosed { .. })
        ));
        assert!(matches!(
            desk.close(TicketId::new(99)),
            Err(HelpdeskError::TicketNotFound { .. })
        ));
    }

    #[test]
    fn test_close_with_dangling_parent_is_surfaced() {
        let mut desk = HelpDesk::new();
        desk.insert_unchecked(TicketBuilder::new().id(5).title("orphan").parent(4).build());

        let outcome = desk.close(TicketId::new(5)).unwrap();
        assert_eq!(outcome.dangling_parent, Some(TicketId::new(4)));
        assert!(desk.get(TicketId::new(5)).unwrap().is_closed());
    }

    #[test]
    fn test_close_reports_cycle() {
        let mut desk = HelpDesk::new();
        desk.insert_unchecked(TicketBuilder::new().id(1).title("a").parent(2).build());
        desk.insert_unchecked(TicketBuilder::new().id(2).title("b").parent(1).build());

        assert!(matches!(
            desk.close(TicketId::new(1)),
            Err(HelpdeskError::CycleDetected { .. })
        ));
        assert_eq!(desk.get(TicketId::new(1)).unwrap().status, Status::Open);
    }

    #[test]
    fn test_process_next_prefers_priority_queue() {
        let mut desk = HelpDesk::new();
        let n1 = desk.create(normal("n1")).unwrap();
        let h1 = desk.create(high("h1")).unwrap();
        let h2 = desk.create(high("h2")).unwrap();
        let n2 = desk.create(normal("n2")).unwrap();

        let order: Vec<_> = std::iter::from_fn(|| desk.process_next())
            .map(|p| (p.ticket.id, p.lane))
            .collect();
        assert_eq!(
            order,
            vec![
                (h2, Lane::Priority),
                (h1, Lane::Priority),
                (n1, Lane::Normal),
                (n2, Lane::Normal),
            ]
        );
        // Processing does not change status
        assert!(desk.tickets().all(Ticket::is_open));
    }

    #[test]
    fn test_process_next_flags_open_parent() {
        let mut desk = HelpDesk::new();
        let parent = desk.create(normal("parent")).unwrap();
        desk.create(high("child").parent(parent)).unwrap();

        let processed = desk.process_next().unwrap();
        assert_eq!(processed.open_parent, Some(parent));
    }

    #[test]
    fn test_undo_create_removes_from_arena_and_queue() {
        let mut desk = HelpDesk::new();
        let kept = desk.create(high("kept")).unwrap();
        let undone = desk.create(high("undone")).unwrap();

        assert_eq!(desk.undo().unwrap(), Undone::Removed(undone));
        assert!(desk.get(undone).is_none());
        assert!(desk.history_lookup(undone).is_none());
        assert_eq!(desk.queue_status().priority_queue, 1);
        assert_eq!(desk.process_next().unwrap().ticket.id, kept);
        assert!(desk.process_next().is_none());
    }

    #[test]
    fn test_undo_create_leaves_other_queue_alone() {
        let mut desk = HelpDesk::new();
        let urgent = desk.create(high("urgent")).unwrap();
        let routine = desk.create(normal("routine")).unwrap();

        assert_eq!(desk.undo().unwrap(), Undone::Removed(routine));
        let status = desk.queue_status();
        assert_eq!(status.normal_queue, 0);
        assert_eq!(status.priority_queue, 1);
        assert!(desk.get(routine).is_none());

        let processed = desk.process_next().unwrap();
        assert_eq!(processed.ticket.id, urgent);
        assert_eq!(processed.lane, Lane::Priority);
        assert!(desk.process_next().is_none());
    }

    #[test]
    fn test_undo_create_after_processing() {
        let mut desk = HelpDesk::new();
        let id = desk.create(normal("done already")).unwrap();
        desk.process_next().unwrap();

        assert_eq!(desk.undo().unwrap(), Undone::Removed(id));
        assert!(desk.is_empty());
    }

    #[test]
    fn test_history_keeps_undone_entries() {
        let mut desk = HelpDesk::new();
        let a = desk.create(normal("a")).unwrap();
        let b = desk.create(normal("b")).unwrap();
        desk.undo().unwrap();

        let entries: Vec<_> = desk.history().map(|e| (e.id, e.ticket.is_some())).collect();
        assert_eq!(entries, vec![(a, true), (b, false)]);
        assert_eq!(desk.history_lookup(a).unwrap().title, "a");
    }

    #[test]
    fn test_undo_close_reopens_once() {
        let mut desk = HelpDesk::new();
        let id = desk.create(normal("a")).unwrap();
        desk.close(id).unwrap();

        assert_eq!(desk.undo().unwrap(), Undone::Reopened(id));
        assert!(desk.get(id).unwrap().is_open());
        // Next pop is the create, not the close again
        assert_eq!(desk.peek_undo(), Some(&Action::Create { ticket: id }));
    }

    #[test]
    fn test_assign_and_undo_restores_previous_agent() {
        let mut desk = HelpDesk::new();
        let id = desk.create(normal("a")).unwrap();

        desk.assign(id, "alice").unwrap();
        desk.assign(id, "bob").unwrap();
        assert_eq!(desk.get(id).unwrap().assigned_agent, "bob");

        assert_eq!(
            desk.undo().unwrap(),
            Undone::Reassigned {
                ticket: id,
                agent: "alice".into()
            }
        );
        desk.undo().unwrap();
        assert_eq!(desk.get(id).unwrap().assigned_agent, UNASSIGNED);
    }

    #[test]
    fn test_assign_rejections() {
        let mut desk = HelpDesk::new();
        let id = desk.create(normal("a")).unwrap();

        assert!(matches!(desk.assign(id, "  "), Err(HelpdeskError::EmptyAgent)));
        desk.close(id).unwrap();
        assert!(matches!(
            desk.assign(id, "alice"),
            Err(HelpdeskError::TicketClosed { .. })
        ));
        assert_eq!(desk.get(id).unwrap().assigned_agent, UNASSIGNED);
        assert_eq!(desk.peek_undo(), Some(&Action::Close { ticket: id }));
    }

    #[test]
    fn test_undo_on_empty_log() {
        let mut desk = HelpDesk::new();
        assert!(matches!(desk.undo(), Err(HelpdeskError::NothingToUndo)));
    }

    #[test]
    fn test_ids_not_reused_after_undo() {
        let mut desk = HelpDesk::new();
        desk.create(normal("a")).unwrap();
        desk.undo().unwrap();
        assert_eq!(desk.create(normal("b")).unwrap(), TicketId::new(2));
    }
}
