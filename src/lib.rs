//! helpdesk - An interactive help desk ticket tracker
//!
//! Tickets are filed into a priority lane or a normal lane, processed in
//! order, closed once their parent chain is resolved, and assigned to agents.
//! Every change can be undone, and the creation history is kept as an audit
//! log.
//!
//! - [`core`] holds the ticket model and the parent dependency check
//! - [`containers`] provides the queues, the undo stack and the history list
//! - [`desk`] ties them together behind [`desk::HelpDesk`]
//! - [`report`] computes the dashboard and queue views
//! - [`cli`] runs the interactive menu
//!
//! # Example
//!
//! ```rust
//! use helpdesk::core::Priority;
//! use helpdesk::desk::{HelpDesk, NewTicket};
//!
//! let mut desk = HelpDesk::new();
//! let parent = desk.create(NewTicket::new("Network outage", Priority::High))?;
//! let child = desk.create(NewTicket::new("Reconnect printers", Priority::Normal).parent(parent))?;
//!
//! assert!(desk.close(child).is_err());
//! desk.close(parent)?;
//! desk.close(child)?;
//! # Ok::<(), helpdesk::HelpdeskError>(())
//! ```

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod containers;
pub mod core;
pub mod desk;
pub mod error;
pub mod report;

#[cfg(test)]
pub mod test_utils;

pub use error::{HelpdeskError, Result};
