//! Editorial Workflow Domain Types
//!
//! This crate defines the domain types for editorial workflow resolution—
//! the data that answers "what may this user do in this state" and
//! "who is told when content moves".
//!
//! # Key Concepts
//!
//! - **Assignment type**: a user's privilege level in a workflow state:
//!   `None < Reader < Assignee < Admin`. Aggregation is always
//!   most-privileged-wins, never additive.
//! - **Adhoc role**: a role grant scoped to one content item rather than
//!   to the workflow state generally; `Normal` grants are explicit,
//!   `Anonymous` grants apply to any authenticated user.
//! - **Transition notification**: a per-transition record naming which
//!   state roles and extra addresses are told when the transition fires.
//! - **Content history entry**: one row of the append-only audit trail a
//!   content item accumulates as it moves through its workflow.
//!
//! # Architecture
//!
//! This is a pure types crate with no runtime dependencies. All types
//! implement `Clone`, `Debug`, `Serialize`, `Deserialize`. IDs use the
//! newtype pattern over the legacy numeric keys and implement `Display`
//! and `new()`.

#![deny(unsafe_code)]

mod assignment;
mod checkout;
mod errors;
mod history;
mod ids;
mod notification;

pub use assignment::*;
pub use checkout::*;
pub use errors::*;
pub use history::*;
pub use ids::*;
pub use notification::*;
