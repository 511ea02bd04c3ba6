//! Source trait definitions
//!
//! The seams between the resolution engine and whatever actually holds
//! the rows. Every load is a single bounded query: implementations
//! return the full hydrated result set in result order, or a
//! [`EditorialError::Backing`] if the underlying source fails. Zero rows
//! is an ordinary empty `Vec`, never an error.
//!
//! All traits are synchronous; snapshots are immutable after load, so
//! implementations need no interior locking on the read path.
//!
//! [`EditorialError::Backing`]: editorial_types::EditorialError::Backing

use editorial_types::{
    ContentHistoryEntry, ContentId, EditorialResult, RoleAssignment, StateId, TransitionId,
    TransitionNotification, WorkflowId,
};

/// Yields the role assignment rows of one workflow state.
pub trait RoleAssignmentSource {
    /// All role assignments for `(workflow_id, state_id)`, in result
    /// order.
    fn role_assignments(
        &self,
        workflow_id: WorkflowId,
        state_id: StateId,
    ) -> EditorialResult<Vec<RoleAssignment>>;
}

/// Yields the notification records of one workflow transition.
pub trait TransitionNotificationSource {
    /// All notification records for `(workflow_id, transition_id)`, in
    /// definition order.
    fn transition_notifications(
        &self,
        workflow_id: WorkflowId,
        transition_id: TransitionId,
    ) -> EditorialResult<Vec<TransitionNotification>>;
}

/// Yields a content item's status history.
pub trait ContentHistorySource {
    /// All history entries for `content_id`, oldest first.
    fn content_history(&self, content_id: ContentId) -> EditorialResult<Vec<ContentHistoryEntry>>;
}

/// Supplies user identity data: role memberships and per-item adhoc
/// grants. Membership itself is maintained elsewhere; this layer only
/// reads it.
pub trait IdentityProvider {
    /// The role names the user is a member of.
    fn role_memberships(&self, user_name: &str) -> EditorialResult<Vec<String>>;

    /// The adhoc role names explicitly granted to the user for one
    /// content item.
    fn adhoc_grants(
        &self,
        user_name: &str,
        content_id: ContentId,
    ) -> EditorialResult<Vec<String>>;
}
