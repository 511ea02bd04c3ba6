//! Property tests: routing determinism and assignment aggregation
//! invariants under arbitrary inputs.

use editorial_engine::{
    resolve_assignment, route_notifications, AssignmentContext, StateRoleDirectory,
};
use editorial_types::{
    AssignmentType, NotificationId, RecipientTypeFlag, RoleAssignment, RoleId, StateId,
    TransitionId, TransitionNotification, WorkflowId,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn arb_recipient_type() -> impl Strategy<Value = RecipientTypeFlag> {
    prop_oneof![
        Just(RecipientTypeFlag::None),
        Just(RecipientTypeFlag::ToStateOnly),
        Just(RecipientTypeFlag::FromStateOnly),
        Just(RecipientTypeFlag::Both),
    ]
}

fn arb_notification() -> impl Strategy<Value = TransitionNotification> {
    (
        arb_recipient_type(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        prop::collection::vec("[a-z]{2,8}@example\\.com", 0..3),
        prop::collection::vec("[a-z]{2,8}@example\\.com", 0..2),
        1..100i32,
    )
        .prop_map(
            |(recipient_type, req_from, req_to, notify_from, notify_to, extra, cc, id)| {
                let mut n = TransitionNotification::new(
                    WorkflowId::new(4),
                    TransitionId::new(12),
                    NotificationId::new(id),
                    recipient_type,
                )
                .with_require_from_state_roles(req_from)
                .with_require_to_state_roles(req_to)
                .with_notify_from_state_roles(notify_from)
                .with_notify_to_state_roles(notify_to);
                n.additional_recipients = extra;
                n.cc_list = cc;
                n
            },
        )
}

/// Distinct-named non-adhoc roles with arbitrary assignment types and
/// notify flags.
fn arb_roles() -> impl Strategy<Value = Vec<RoleAssignment>> {
    prop::collection::btree_map("[a-z]{3,8}", (0..=3i32, any::<bool>()), 0..6).prop_map(|roles| {
        roles
            .into_iter()
            .enumerate()
            .map(|(index, (name, (raw, notify)))| {
                RoleAssignment::new(
                    RoleId::new(index as i32 + 1),
                    name,
                    AssignmentType::from_raw(raw),
                )
                .with_notify(notify)
            })
            .collect()
    })
}

fn directory(state_id: i32, roles: Vec<RoleAssignment>) -> StateRoleDirectory {
    StateRoleDirectory::from_assignments(WorkflowId::new(4), StateId::new(state_id), roles)
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Routing the same records against the same directories twice
    /// yields identical ordered output.
    #[test]
    fn routing_is_deterministic(
        notifications in prop::collection::vec(arb_notification(), 0..8),
        from_roles in arb_roles(),
        to_roles in arb_roles(),
    ) {
        let from = directory(1, from_roles);
        let to = directory(2, to_roles);
        let first = route_notifications(&notifications, &from, &to);
        let second = route_notifications(&notifications, &from, &to);
        prop_assert_eq!(first, second);
    }

    /// Output order always matches record order, whatever the flags.
    #[test]
    fn routing_preserves_record_order(
        notifications in prop::collection::vec(arb_notification(), 0..8),
        from_roles in arb_roles(),
        to_roles in arb_roles(),
    ) {
        let from = directory(1, from_roles);
        let to = directory(2, to_roles);
        let routed = route_notifications(&notifications, &from, &to);
        prop_assert_eq!(routed.len(), notifications.len());
        for (record, routed) in notifications.iter().zip(&routed) {
            prop_assert_eq!(record.notification_id, routed.notification_id);
        }
    }

    /// A FromStateOnly record never picks up to-state role recipients.
    #[test]
    fn from_state_only_excludes_to_state_roles(
        from_roles in arb_roles(),
        to_roles in arb_roles(),
    ) {
        let from = directory(1, from_roles);
        let to = directory(2, to_roles);
        let record = TransitionNotification::new(
            WorkflowId::new(4),
            TransitionId::new(12),
            NotificationId::new(1),
            RecipientTypeFlag::FromStateOnly,
        );
        let routed = route_notifications(std::slice::from_ref(&record), &from, &to);
        let from_names: Vec<_> =
            from.notifying_assignments().map(|r| r.name.clone()).collect();
        prop_assert_eq!(&routed[0].recipients, &from_names);
    }

    /// Resolution does not depend on the order memberships arrive in.
    #[test]
    fn assignment_is_membership_order_invariant(
        roles in arb_roles(),
        memberships in prop::collection::vec("[a-z]{3,8}", 0..6),
    ) {
        let dir = directory(1, roles);
        let forward = AssignmentContext::new("alice")
            .with_memberships(memberships.clone());
        let mut reversed_names = memberships;
        reversed_names.reverse();
        let reversed = AssignmentContext::new("alice")
            .with_memberships(reversed_names);
        prop_assert_eq!(
            resolve_assignment(&forward, &dir).unwrap(),
            resolve_assignment(&reversed, &dir).unwrap()
        );
    }

    /// Adding a membership never lowers the resolved assignment.
    #[test]
    fn assignment_is_monotone_in_memberships(
        roles in arb_roles(),
        memberships in prop::collection::vec("[a-z]{3,8}", 0..5),
        extra in "[a-z]{3,8}",
    ) {
        let dir = directory(1, roles);
        let base = AssignmentContext::new("alice")
            .with_memberships(memberships.clone());
        let extended = AssignmentContext::new("alice")
            .with_memberships(memberships)
            .with_membership(extra);
        prop_assert!(
            resolve_assignment(&extended, &dir).unwrap()
                >= resolve_assignment(&base, &dir).unwrap()
        );
    }

    /// The resolved assignment equals the maximum over the matched
    /// roles, independently recomputed.
    #[test]
    fn assignment_equals_max_over_matches(
        named_roles in prop::collection::btree_map("[a-z]{3,8}", 0..=3i32, 0..6),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..4),
    ) {
        let roles: Vec<RoleAssignment> = named_roles
            .iter()
            .enumerate()
            .map(|(index, (name, raw))| {
                RoleAssignment::new(
                    RoleId::new(index as i32 + 1),
                    name.clone(),
                    AssignmentType::from_raw(*raw),
                )
            })
            .collect();
        let names: Vec<&String> = named_roles.keys().collect();

        let mut memberships = Vec::new();
        let mut expected = AssignmentType::None;
        if !names.is_empty() {
            for pick in &picks {
                let name = names[pick.index(names.len())];
                memberships.push(name.clone());
                expected = expected.max(AssignmentType::from_raw(named_roles[name]));
            }
        }

        let dir = directory(1, roles);
        let ctx = AssignmentContext::new("alice").with_memberships(memberships);
        prop_assert_eq!(resolve_assignment(&ctx, &dir).unwrap(), expected);
    }
}
