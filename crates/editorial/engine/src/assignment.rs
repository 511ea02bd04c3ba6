//! Assignment resolution: what may this user do here
//!
//! The one piece of real business policy in the system. A user's
//! assignment in a state is the maximum privilege across every role
//! they match — membership roles, explicit adhoc grants, and the
//! anonymous-adhoc floor — under the total order
//! `None < Reader < Assignee < Admin`. Privilege is never additive.

use crate::StateRoleDirectory;
use editorial_types::{AssignmentType, EditorialError, EditorialResult};

/// The resolver's working inputs for one user in one state.
///
/// Role memberships and adhoc grants are supplied by the external
/// identity provider; this layer only consumes them.
#[derive(Clone, Debug, Default)]
pub struct AssignmentContext {
    user_name: String,
    role_memberships: Vec<String>,
    adhoc_grants: Vec<String>,
}

impl AssignmentContext {
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            role_memberships: Vec::new(),
            adhoc_grants: Vec::new(),
        }
    }

    /// Add one role the user is a member of.
    pub fn with_membership(mut self, role_name: impl Into<String>) -> Self {
        self.role_memberships.push(role_name.into());
        self
    }

    /// Set all role memberships at once.
    pub fn with_memberships(mut self, role_names: Vec<String>) -> Self {
        self.role_memberships = role_names;
        self
    }

    /// Add one adhoc role granted to the user for the item at hand.
    pub fn with_adhoc_grant(mut self, role_name: impl Into<String>) -> Self {
        self.adhoc_grants.push(role_name.into());
        self
    }

    /// Set all adhoc grants at once.
    pub fn with_adhoc_grants(mut self, role_names: Vec<String>) -> Self {
        self.adhoc_grants = role_names;
        self
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn role_memberships(&self) -> &[String] {
        &self.role_memberships
    }

    pub fn adhoc_grants(&self) -> &[String] {
        &self.adhoc_grants
    }
}

/// Resolve the single highest-precedence assignment type for a user in
/// a state.
///
/// An empty directory means the state has no workflow control over the
/// item, so the result is `None` regardless of memberships. A blank
/// user name is rejected before any computation.
pub fn resolve_assignment(
    context: &AssignmentContext,
    directory: &StateRoleDirectory,
) -> EditorialResult<AssignmentType> {
    if context.user_name().trim().is_empty() {
        return Err(EditorialError::InvalidInput(
            "assignment resolution requires a user name".into(),
        ));
    }
    if directory.is_empty() {
        return Ok(AssignmentType::None);
    }

    let mut resolved = AssignmentType::None;

    // Membership roles match against the state's non-adhoc roles.
    for role_name in context.role_memberships() {
        if let Some(role_id) = directory.non_adhoc_role_by_name(role_name) {
            if let Some(assignment) = directory.assignment_type(role_id) {
                resolved = resolved.max(assignment);
            }
        }
    }

    // Explicit adhoc grants match against the state's adhoc-normal roles.
    for role_name in context.adhoc_grants() {
        if let Some(role_id) = directory.adhoc_normal_role_by_name(role_name) {
            if let Some(assignment) = directory.assignment_type(role_id) {
                resolved = resolved.max(assignment);
            }
        }
    }

    // An adhoc-anonymous role grants Reader to any authenticated user;
    // it raises None, never demotes a stronger assignment.
    if directory.has_adhoc_anonymous() {
        resolved = resolved.max(AssignmentType::Reader);
    }

    tracing::debug!(
        user = context.user_name(),
        workflow_id = %directory.workflow_id(),
        state_id = %directory.state_id(),
        assignment = %resolved,
        "assignment resolved"
    );

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use editorial_types::{AdhocCategory, RoleAssignment, RoleId, StateId, WorkflowId};

    fn directory(assignments: Vec<RoleAssignment>) -> StateRoleDirectory {
        StateRoleDirectory::from_assignments(WorkflowId::new(4), StateId::new(2), assignments)
    }

    #[test]
    fn test_blank_user_is_rejected() {
        let dir = directory(Vec::new());
        let err = resolve_assignment(&AssignmentContext::new("  "), &dir).unwrap_err();
        assert!(matches!(err, EditorialError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_directory_resolves_none() {
        let dir = directory(Vec::new());
        let ctx = AssignmentContext::new("alice").with_membership("Editor");
        assert_eq!(resolve_assignment(&ctx, &dir).unwrap(), AssignmentType::None);
    }

    #[test]
    fn test_no_matching_roles_resolves_none() {
        let dir = directory(vec![RoleAssignment::new(
            RoleId::new(10),
            "Editor",
            AssignmentType::Assignee,
        )]);
        let ctx = AssignmentContext::new("alice").with_membership("Designer");
        assert_eq!(resolve_assignment(&ctx, &dir).unwrap(), AssignmentType::None);
    }

    #[test]
    fn test_membership_match_is_case_insensitive() {
        let dir = directory(vec![RoleAssignment::new(
            RoleId::new(10),
            "Editor",
            AssignmentType::Assignee,
        )]);
        let ctx = AssignmentContext::new("alice").with_membership("  eDiToR ");
        assert_eq!(
            resolve_assignment(&ctx, &dir).unwrap(),
            AssignmentType::Assignee
        );
    }

    #[test]
    fn test_max_wins_across_memberships() {
        let dir = directory(vec![
            RoleAssignment::new(RoleId::new(10), "Writer", AssignmentType::Reader),
            RoleAssignment::new(RoleId::new(11), "Editor", AssignmentType::Assignee),
        ]);
        let ctx = AssignmentContext::new("alice")
            .with_membership("Writer")
            .with_membership("Editor");
        assert_eq!(
            resolve_assignment(&ctx, &dir).unwrap(),
            AssignmentType::Assignee
        );
    }

    #[test]
    fn test_adhoc_grant_raises_membership_result() {
        // Reader via non-adhoc "Writer", Admin via adhoc-normal "Approver".
        let dir = directory(vec![
            RoleAssignment::new(RoleId::new(10), "Writer", AssignmentType::Reader),
            RoleAssignment::new(RoleId::new(12), "Approver", AssignmentType::Admin)
                .with_adhoc(AdhocCategory::Normal),
        ]);
        let ctx = AssignmentContext::new("alice")
            .with_membership("Writer")
            .with_adhoc_grant("Approver");
        assert_eq!(resolve_assignment(&ctx, &dir).unwrap(), AssignmentType::Admin);
    }

    #[test]
    fn test_adhoc_grant_without_directory_match_is_inert() {
        let dir = directory(vec![RoleAssignment::new(
            RoleId::new(10),
            "Writer",
            AssignmentType::Reader,
        )]);
        let ctx = AssignmentContext::new("alice").with_adhoc_grant("Approver");
        assert_eq!(resolve_assignment(&ctx, &dir).unwrap(), AssignmentType::None);
    }

    #[test]
    fn test_membership_does_not_match_adhoc_normal_roles() {
        // Adhoc-normal roles require an explicit per-item grant;
        // ordinary membership in the same-named role does not count.
        let dir = directory(vec![RoleAssignment::new(
            RoleId::new(12),
            "Approver",
            AssignmentType::Admin,
        )
        .with_adhoc(AdhocCategory::Normal)]);
        let ctx = AssignmentContext::new("alice").with_membership("Approver");
        assert_eq!(resolve_assignment(&ctx, &dir).unwrap(), AssignmentType::None);
    }

    #[test]
    fn test_anonymous_only_match_is_exactly_reader() {
        let dir = directory(vec![RoleAssignment::new(
            RoleId::new(13),
            "Anyone",
            AssignmentType::Admin,
        )
        .with_adhoc(AdhocCategory::Anonymous)]);
        let ctx = AssignmentContext::new("alice");
        assert_eq!(
            resolve_assignment(&ctx, &dir).unwrap(),
            AssignmentType::Reader
        );
    }

    #[test]
    fn test_anonymous_never_demotes_a_stronger_assignment() {
        let dir = directory(vec![
            RoleAssignment::new(RoleId::new(10), "Editor", AssignmentType::Admin),
            RoleAssignment::new(RoleId::new(13), "Anyone", AssignmentType::Reader)
                .with_adhoc(AdhocCategory::Anonymous),
        ]);
        let ctx = AssignmentContext::new("alice").with_membership("Editor");
        assert_eq!(resolve_assignment(&ctx, &dir).unwrap(), AssignmentType::Admin);
    }

    #[test]
    fn test_anonymous_raises_none_to_reader() {
        let dir = directory(vec![
            RoleAssignment::new(RoleId::new(10), "Editor", AssignmentType::Assignee),
            RoleAssignment::new(RoleId::new(13), "Anyone", AssignmentType::Reader)
                .with_adhoc(AdhocCategory::Anonymous),
        ]);
        // No membership match at all, but the anonymous role exists.
        let ctx = AssignmentContext::new("mallory").with_membership("Designer");
        assert_eq!(
            resolve_assignment(&ctx, &dir).unwrap(),
            AssignmentType::Reader
        );
    }
}
