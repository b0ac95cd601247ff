//! Parent-chain closure check
//!
//! A ticket may only be closed once every ancestor in its parent chain is
//! closed. The walk is iterative and keeps a visited set, so a chain that
//! loops back on itself is reported as [`HelpdeskError::CycleDetected`]
//! instead of running forever.

use std::collections::HashSet;

use super::{Status, Ticket, TicketId};
use crate::error::{HelpdeskError, Result};

/// Outcome of checking whether a ticket may be closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closability {
    /// Every ancestor is closed, or there are none
    Clear,
    /// The nearest ancestor that is not closed
    Blocked { ancestor: TicketId, status: Status },
    /// The chain ends at a parent id that is no longer in the ticket set.
    /// Not a blocker, but callers should surface it.
    DanglingParent { missing: TicketId },
}

impl Closability {
    pub const fn is_closable(self) -> bool {
        matches!(self, Self::Clear | Self::DanglingParent { .. })
    }
}

/// Walks the parent chain of `ticket` and reports whether it may be closed.
///
/// `lookup` resolves ids against the active ticket set. The whole chain is
/// walked before any status is inspected, so a cycle is reported even when
/// one of its members is still open.
pub fn check_closable<'a, F>(ticket: &'a Ticket, lookup: F) -> Result<Closability>
where
    F: Fn(TicketId) -> Option<&'a Ticket>,
{
    let mut visited = HashSet::from([ticket.id]);
    let mut chain = vec![ticket.id];
    let mut ancestors: Vec<&Ticket> = Vec::new();
    let mut dangling = None;
    let mut current = ticket;

    while let Some(parent_id) = current.parent {
        chain.push(parent_id);
        if !visited.insert(parent_id) {
            return Err(HelpdeskError::CycleDetected {
                id: ticket.id,
                chain,
            });
        }
        let Some(parent) = lookup(parent_id) else {
            dangling = Some(parent_id);
            break;
        };
        ancestors.push(parent);
        current = parent;
    }

    if let Some(blocker) = ancestors.iter().find(|t| t.status != Status::Closed) {
        return Ok(Closability::Blocked {
            ancestor: blocker.id,
            status: blocker.status,
        });
    }

    Ok(dangling.map_or(Closability::Clear, |missing| Closability::DanglingParent {
        missing,
    }))
}

/// Boolean form of [`check_closable`]
pub fn is_closable<'a, F>(ticket: &'a Ticket, lookup: F) -> Result<bool>
where
    F: Fn(TicketId) -> Option<&'a Ticket>,
{
    check_closable(ticket, lookup).map(Closability::is_closable)
}
