//! Raw rows and hydration
//!
//! Row structs mirror the legacy columns one to one: strings arrive
//! untrimmed and possibly over-long, enums arrive as their numeric
//! encodings, address lists arrive as one delimited string. `hydrate()`
//! turns a row into its typed record, applying the trimming and width
//! clamps the legacy schema tolerates. Out-of-range values are accepted
//! leniently, never rejected.

use chrono::{DateTime, Utc};
use editorial_types::{
    AdhocCategory, AssignmentType, ContentHistoryEntry, ContentId, HistoryId, NotificationId,
    RecipientTypeFlag, RoleAssignment, RoleId, StateId, TransitionId, TransitionNotification,
    WorkflowId,
};
use serde::{Deserialize, Serialize};

/// Maximum width of a content title column.
const TITLE_WIDTH: usize = 40;
/// Maximum width of a session id column.
const SESSION_WIDTH: usize = 40;
/// Maximum width of a state or transition name column.
const NAME_WIDTH: usize = 50;
/// Maximum width of the wide text columns (role list, modifier, comment).
const TEXT_WIDTH: usize = 255;

/// Trim a raw column value and clamp it to the legacy column width.
fn clamp(raw: &str, width: usize) -> String {
    raw.trim().chars().take(width).collect()
}

/// Split a legacy delimited address-list column into individual
/// addresses, preserving order. Commas and semicolons both delimit;
/// blank segments are dropped.
pub fn split_address_list(raw: &str) -> Vec<String> {
    raw.split([',', ';'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(String::from)
        .collect()
}

/// One row of the state role assignment table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignmentRow {
    pub workflow_id: i32,
    pub state_id: i32,
    pub role_id: i32,
    pub role_name: String,
    /// Numeric assignment type encoding (0..=3)
    pub assignment_type: i32,
    /// Numeric adhoc category encoding (0..=2)
    pub adhoc_type: i32,
    pub notify_enabled: bool,
}

impl RoleAssignmentRow {
    /// The `(workflow, state)` key this row belongs to.
    pub fn key(&self) -> (WorkflowId, StateId) {
        (WorkflowId::new(self.workflow_id), StateId::new(self.state_id))
    }

    /// Hydrate into the typed record.
    pub fn hydrate(&self) -> RoleAssignment {
        RoleAssignment::new(
            RoleId::new(self.role_id),
            self.role_name.trim(),
            AssignmentType::from_raw(self.assignment_type),
        )
        .with_adhoc(AdhocCategory::from_raw(self.adhoc_type))
        .with_notify(self.notify_enabled)
    }
}

/// One row of the transition notification table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRow {
    pub workflow_id: i32,
    pub transition_id: i32,
    pub notification_id: i32,
    /// Numeric recipient-type encoding (0..=3)
    pub recipient_type: i32,
    pub require_from_state_roles: bool,
    pub require_to_state_roles: bool,
    pub notify_from_state_roles: bool,
    pub notify_to_state_roles: bool,
    /// Delimited additional-recipient column, comma or semicolon separated
    pub additional_recipients: String,
    /// Delimited CC column, comma or semicolon separated
    pub cc_list: String,
}

impl NotificationRow {
    /// The `(workflow, transition)` key this row belongs to.
    pub fn key(&self) -> (WorkflowId, TransitionId) {
        (
            WorkflowId::new(self.workflow_id),
            TransitionId::new(self.transition_id),
        )
    }

    /// Hydrate into the typed record, splitting the address columns.
    pub fn hydrate(&self) -> TransitionNotification {
        TransitionNotification {
            workflow_id: WorkflowId::new(self.workflow_id),
            transition_id: TransitionId::new(self.transition_id),
            notification_id: NotificationId::new(self.notification_id),
            recipient_type: RecipientTypeFlag::from_raw(self.recipient_type),
            require_from_state_roles: self.require_from_state_roles,
            require_to_state_roles: self.require_to_state_roles,
            notify_from_state_roles: self.notify_from_state_roles,
            notify_to_state_roles: self.notify_to_state_roles,
            additional_recipients: split_address_list(&self.additional_recipients),
            cc_list: split_address_list(&self.cc_list),
        }
    }
}

/// One row of the content status history table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub history_id: i32,
    pub content_id: i32,
    pub revision: i32,
    pub title: String,
    pub session_id: String,
    pub actor_name: String,
    /// 0 means no transition (check-in / check-out)
    pub transition_id: i32,
    pub publishable: bool,
    pub state_id: i32,
    pub state_name: String,
    pub transition_label: String,
    pub role_names_csv: String,
    /// Blank when nobody holds the checkout
    pub checkout_user_name: String,
    pub last_modifier_name: String,
    pub last_modified_at: DateTime<Utc>,
    pub event_at: DateTime<Utc>,
    pub comment: String,
}

impl HistoryRow {
    /// Hydrate into the typed entry, trimming and clamping every text
    /// column to its legacy width.
    pub fn hydrate(&self) -> ContentHistoryEntry {
        let checkout = self.checkout_user_name.trim();
        ContentHistoryEntry {
            history_id: HistoryId::new(self.history_id),
            content_id: ContentId::new(self.content_id),
            revision: self.revision,
            title: clamp(&self.title, TITLE_WIDTH),
            session_id: clamp(&self.session_id, SESSION_WIDTH),
            actor_name: self.actor_name.trim().to_string(),
            transition_id: TransitionId::new(self.transition_id),
            publishable: self.publishable,
            state_id: StateId::new(self.state_id),
            state_name: clamp(&self.state_name, NAME_WIDTH),
            transition_label: clamp(&self.transition_label, NAME_WIDTH),
            role_names_csv: clamp(&self.role_names_csv, TEXT_WIDTH),
            checkout_user_name: if checkout.is_empty() {
                None
            } else {
                Some(checkout.to_string())
            },
            last_modifier_name: clamp(&self.last_modifier_name, TEXT_WIDTH),
            last_modified_at: self.last_modified_at,
            event_at: self.event_at,
            comment: clamp(&self.comment, TEXT_WIDTH),
        }
    }
}
