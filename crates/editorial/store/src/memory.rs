//! In-memory source implementation
//!
//! Holds raw rows in plain collections and hydrates them at query time,
//! mirroring a result-set read. Insertion order is result order.

use crate::{
    ContentHistorySource, HistoryRow, IdentityProvider, NotificationRow, RoleAssignmentRow,
    RoleAssignmentSource, TransitionNotificationSource,
};
use editorial_types::{
    normalize_name, ContentHistoryEntry, ContentId, EditorialResult, RoleAssignment, StateId,
    TransitionId, TransitionNotification, WorkflowId,
};
use std::collections::HashMap;

/// An in-memory implementation of every source trait.
///
/// Populated through the `add_*`/`set_*` helpers, then handed to the
/// engine wherever a source is expected. Used by the test suites and by
/// embedding hosts that already hold the rows.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    role_rows: Vec<RoleAssignmentRow>,
    notification_rows: Vec<NotificationRow>,
    history_rows: Vec<HistoryRow>,
    memberships: HashMap<String, Vec<String>>,
    adhoc_grants: HashMap<(String, ContentId), Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one state role assignment row.
    pub fn add_role_assignment(&mut self, row: RoleAssignmentRow) {
        self.role_rows.push(row);
    }

    /// Add one transition notification row.
    pub fn add_notification(&mut self, row: NotificationRow) {
        self.notification_rows.push(row);
    }

    /// Append one history row. Callers append in chronological order.
    pub fn add_history(&mut self, row: HistoryRow) {
        self.history_rows.push(row);
    }

    /// Set the role memberships of a user, replacing any previous set.
    pub fn set_memberships(&mut self, user_name: &str, role_names: Vec<String>) {
        self.memberships.insert(normalize_name(user_name), role_names);
    }

    /// Grant a user an adhoc role on one content item.
    pub fn add_adhoc_grant(
        &mut self,
        user_name: &str,
        content_id: ContentId,
        role_name: impl Into<String>,
    ) {
        self.adhoc_grants
            .entry((normalize_name(user_name), content_id))
            .or_default()
            .push(role_name.into());
    }
}

impl RoleAssignmentSource for MemoryStore {
    fn role_assignments(
        &self,
        workflow_id: WorkflowId,
        state_id: StateId,
    ) -> EditorialResult<Vec<RoleAssignment>> {
        Ok(self
            .role_rows
            .iter()
            .filter(|row| row.key() == (workflow_id, state_id))
            .map(RoleAssignmentRow::hydrate)
            .collect())
    }
}

impl TransitionNotificationSource for MemoryStore {
    fn transition_notifications(
        &self,
        workflow_id: WorkflowId,
        transition_id: TransitionId,
    ) -> EditorialResult<Vec<TransitionNotification>> {
        Ok(self
            .notification_rows
            .iter()
            .filter(|row| row.key() == (workflow_id, transition_id))
            .map(NotificationRow::hydrate)
            .collect())
    }
}

impl ContentHistorySource for MemoryStore {
    fn content_history(&self, content_id: ContentId) -> EditorialResult<Vec<ContentHistoryEntry>> {
        Ok(self
            .history_rows
            .iter()
            .filter(|row| row.content_id == content_id.0)
            .map(HistoryRow::hydrate)
            .collect())
    }
}

impl IdentityProvider for MemoryStore {
    fn role_memberships(&self, user_name: &str) -> EditorialResult<Vec<String>> {
        Ok(self
            .memberships
            .get(&normalize_name(user_name))
            .cloned()
            .unwrap_or_default())
    }

    fn adhoc_grants(
        &self,
        user_name: &str,
        content_id: ContentId,
    ) -> EditorialResult<Vec<String>> {
        Ok(self
            .adhoc_grants
            .get(&(normalize_name(user_name), content_id))
            .cloned()
            .unwrap_or_default())
    }
}
