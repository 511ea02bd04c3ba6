//! Transition notification routing
//!
//! For each notification record a transition owns, in definition order,
//! compute the recipient list from the two state role directories and
//! the record's own inclusion flags. Output order matches input order;
//! delivery order is significant to the external mailer.

use crate::StateRoleDirectory;
use editorial_types::{NotificationId, RecipientTypeFlag, TransitionNotification};
use serde::{Deserialize, Serialize};

/// One routed notification: the final recipient list for one record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutedNotification {
    /// The notification definition this routing came from
    pub notification_id: NotificationId,
    /// Role-derived recipients (role display names) followed by the
    /// record's additional recipients, verbatim and not deduplicated
    pub recipients: Vec<String>,
    /// The record's CC addresses, verbatim
    pub cc_list: Vec<String>,
    /// The record required from-state recipients and got none
    pub missing_from_state_roles: bool,
    /// The record required to-state recipients and got none
    pub missing_to_state_roles: bool,
}

impl RoutedNotification {
    /// Whether a require-roles hint went unmet. Surfaced, not fatal:
    /// the notification still routes.
    pub fn is_under_resourced(&self) -> bool {
        self.missing_from_state_roles || self.missing_to_state_roles
    }
}

/// Route a transition's notification records against the directories of
/// the state it leaves and the state it enters.
///
/// Pure over the in-memory snapshots: routing the same records against
/// the same directories always yields identical ordered output.
pub fn route_notifications(
    notifications: &[TransitionNotification],
    from_state: &StateRoleDirectory,
    to_state: &StateRoleDirectory,
) -> Vec<RoutedNotification> {
    notifications
        .iter()
        .map(|notification| route_one(notification, from_state, to_state))
        .collect()
}

fn route_one(
    notification: &TransitionNotification,
    from_state: &StateRoleDirectory,
    to_state: &StateRoleDirectory,
) -> RoutedNotification {
    let mut recipients = Vec::new();
    let mut to_contributed = 0usize;
    let mut from_contributed = 0usize;

    if notification.recipient_type.includes_to_state() && notification.notify_to_state_roles {
        for role in to_state.notifying_assignments() {
            recipients.push(role.name.clone());
            to_contributed += 1;
        }
    }
    if notification.recipient_type.includes_from_state() && notification.notify_from_state_roles {
        for role in from_state.notifying_assignments() {
            recipients.push(role.name.clone());
            from_contributed += 1;
        }
    }
    recipients.extend(notification.additional_recipients.iter().cloned());

    let missing_from_state_roles = notification.require_from_state_roles && from_contributed == 0;
    let missing_to_state_roles = notification.require_to_state_roles && to_contributed == 0;
    if missing_from_state_roles || missing_to_state_roles {
        tracing::warn!(
            workflow_id = %notification.workflow_id,
            transition_id = %notification.transition_id,
            notification_id = %notification.notification_id,
            missing_from = missing_from_state_roles,
            missing_to = missing_to_state_roles,
            "notification routed without required state role recipients"
        );
    }

    RoutedNotification {
        notification_id: notification.notification_id,
        recipients,
        cc_list: notification.cc_list.clone(),
        missing_from_state_roles,
        missing_to_state_roles,
    }
}
