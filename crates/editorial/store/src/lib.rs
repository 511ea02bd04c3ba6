//! Row-Source Seam for Editorial Workflow Resolution
//!
//! The resolution engine never talks to a database. It consumes four
//! narrow, synchronous source traits defined here:
//!
//! - [`RoleAssignmentSource`] — role assignment rows for a workflow state
//! - [`TransitionNotificationSource`] — notification records for a transition
//! - [`ContentHistorySource`] — a content item's status history, oldest first
//! - [`IdentityProvider`] — a user's role memberships and per-item adhoc grants
//!
//! Raw rows mirror the legacy columns exactly (untrimmed strings, numeric
//! flag encodings). Hydration into the typed records happens here, once,
//! at the boundary: values are trimmed and clamped to the legacy column
//! widths, never rejected, and never re-validated downstream.
//!
//! [`MemoryStore`] implements every trait over plain collections and is
//! the backbone of the test suites; embedding hosts that already hold the
//! rows can use it directly.

#![deny(unsafe_code)]

mod memory;
mod rows;
mod sources;

pub use memory::*;
pub use rows::*;
pub use sources::*;
