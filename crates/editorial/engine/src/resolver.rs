//! Workflow resolver: the composing entry point
//!
//! Presentation-layer callers rarely want a directory; they want the
//! answers. The resolver holds the row sources and the identity
//! provider, performs the scoped load-use-release around each question,
//! and hands back the result.

use crate::{
    resolve_assignment, route_notifications, AssignmentContext, ContentHistoryCursor,
    RoutedNotification, StateRoleDirectory,
};
use editorial_store::{
    ContentHistorySource, IdentityProvider, RoleAssignmentSource, TransitionNotificationSource,
};
use editorial_types::{
    AssignmentType, ContentId, EditorialError, EditorialResult, StateId, TransitionId, WorkflowId,
};
use std::sync::Arc;

/// Resolves assignments, notifications, and history against a set of
/// row sources.
///
/// Each call loads the snapshots it needs, answers, and releases them;
/// nothing is cached across calls. Intended for single-request use, like
/// every snapshot it hands out.
#[derive(Clone)]
pub struct WorkflowResolver {
    roles: Arc<dyn RoleAssignmentSource>,
    notifications: Arc<dyn TransitionNotificationSource>,
    history: Arc<dyn ContentHistorySource>,
    identity: Arc<dyn IdentityProvider>,
}

impl WorkflowResolver {
    pub fn new(
        roles: Arc<dyn RoleAssignmentSource>,
        notifications: Arc<dyn TransitionNotificationSource>,
        history: Arc<dyn ContentHistorySource>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            roles,
            notifications,
            history,
            identity,
        }
    }

    /// Build a resolver from one store implementing every source trait.
    pub fn with_store<S>(store: Arc<S>) -> Self
    where
        S: RoleAssignmentSource
            + TransitionNotificationSource
            + ContentHistorySource
            + IdentityProvider
            + 'static,
    {
        Self {
            roles: store.clone(),
            notifications: store.clone(),
            history: store.clone(),
            identity: store,
        }
    }

    /// The assignment type `user_name` holds for `content_id` in the
    /// given workflow state.
    ///
    /// Combines the user's role memberships and per-item adhoc grants
    /// from the identity provider with the state's role directory. A
    /// state with no role data resolves to least privilege.
    pub fn assignment_for(
        &self,
        user_name: &str,
        content_id: ContentId,
        workflow_id: WorkflowId,
        state_id: StateId,
    ) -> EditorialResult<AssignmentType> {
        if user_name.trim().is_empty() {
            return Err(EditorialError::InvalidInput(
                "assignment resolution requires a user name".into(),
            ));
        }
        let memberships = self.identity.role_memberships(user_name)?;
        let grants = self.identity.adhoc_grants(user_name, content_id)?;
        let directory = StateRoleDirectory::load(self.roles.as_ref(), workflow_id, state_id)?;

        let context = AssignmentContext::new(user_name)
            .with_memberships(memberships)
            .with_adhoc_grants(grants);
        let assignment = resolve_assignment(&context, &directory)?;
        directory.close();
        Ok(assignment)
    }

    /// The routed recipient lists for one transition, computed against
    /// the directories of the state it leaves and the state it enters.
    pub fn notifications_for(
        &self,
        workflow_id: WorkflowId,
        transition_id: TransitionId,
        from_state: StateId,
        to_state: StateId,
    ) -> EditorialResult<Vec<RoutedNotification>> {
        let records = self
            .notifications
            .transition_notifications(workflow_id, transition_id)?;
        let from_directory =
            StateRoleDirectory::load(self.roles.as_ref(), workflow_id, from_state)?;
        let to_directory = StateRoleDirectory::load(self.roles.as_ref(), workflow_id, to_state)?;

        let routed = route_notifications(&records, &from_directory, &to_directory);
        tracing::debug!(
            workflow_id = %workflow_id,
            transition_id = %transition_id,
            notifications = routed.len(),
            "transition notifications routed"
        );
        from_directory.close();
        to_directory.close();
        Ok(routed)
    }

    /// A forward-only cursor over `content_id`'s status history, oldest
    /// entry first.
    pub fn history_for(&self, content_id: ContentId) -> EditorialResult<ContentHistoryCursor> {
        ContentHistoryCursor::load(self.history.as_ref(), content_id)
    }
}
