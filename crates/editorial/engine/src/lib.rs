//! Editorial Workflow Resolution Engine
//!
//! The engine answers the two questions at the heart of editorial
//! workflow: *what may this user do with this item here*, and *who is
//! told when the item moves*. It combines per-state role assignment
//! data with per-transition notification policy; everything else around
//! it is plumbing.
//!
//! # Architecture
//!
//! The [`WorkflowResolver`] composes specialized components:
//!
//! - [`StateRoleDirectory`] — per-state snapshot of role assignments,
//!   with adhoc partitions and case-insensitive name lookups
//! - [`resolve_assignment`] — the most-privileged-wins assignment policy
//! - [`route_notifications`] — per-transition recipient computation
//! - [`ContentHistoryCursor`] — forward-only walk of an item's history
//! - [`CheckoutStatus::classify`] — pure checkout classification
//!   (re-exported from `editorial-types`)
//!
//! Snapshots load eagerly through the `editorial-store` source traits,
//! are immutable afterwards, and are intended for single-request use.
//! Absent backing data is an ordinary outcome (empty snapshots, least
//! privilege), never an error.
//!
//! # Example
//!
//! ```rust
//! use editorial_engine::WorkflowResolver;
//! use editorial_store::{MemoryStore, RoleAssignmentRow};
//! use editorial_types::{AssignmentType, ContentId, StateId, WorkflowId};
//! use std::sync::Arc;
//!
//! let mut store = MemoryStore::new();
//! store.add_role_assignment(RoleAssignmentRow {
//!     workflow_id: 4,
//!     state_id: 1,
//!     role_id: 10,
//!     role_name: "Author".into(),
//!     assignment_type: 2,
//!     adhoc_type: 0,
//!     notify_enabled: true,
//! });
//! store.set_memberships("alice", vec!["Author".into()]);
//!
//! let resolver = WorkflowResolver::with_store(Arc::new(store));
//! let assignment = resolver
//!     .assignment_for("alice", ContentId::new(301), WorkflowId::new(4), StateId::new(1))
//!     .unwrap();
//! assert_eq!(assignment, AssignmentType::Assignee);
//! ```

#![deny(unsafe_code)]

pub mod assignment;
pub mod directory;
pub mod history;
pub mod notify;
pub mod resolver;

// Re-export main types
pub use assignment::{resolve_assignment, AssignmentContext};
pub use directory::StateRoleDirectory;
pub use history::ContentHistoryCursor;
pub use notify::{route_notifications, RoutedNotification};
pub use resolver::WorkflowResolver;

pub use editorial_types::CheckoutStatus;
