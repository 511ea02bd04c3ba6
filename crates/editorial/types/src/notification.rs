//! Transition notifications: who is told when content moves
//!
//! Each workflow transition owns an ordered list of notification records.
//! A record names which side's state roles are notified (via the
//! recipient-type flag and the per-side notify switches) and carries
//! literal additional-recipient and CC address lists.

use crate::{NotificationId, TransitionId, WorkflowId};
use serde::{Deserialize, Serialize};

/// Which side(s) of a transition contribute state-role recipients.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecipientTypeFlag {
    /// No state roles are notified
    #[default]
    None,
    /// Only roles of the state the transition enters
    ToStateOnly,
    /// Only roles of the state the transition leaves
    FromStateOnly,
    /// Roles of both states
    Both,
}

impl RecipientTypeFlag {
    /// Decode the legacy numeric column. Unknown values collapse to
    /// `None`.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::ToStateOnly,
            2 => Self::FromStateOnly,
            3 => Self::Both,
            _ => Self::None,
        }
    }

    /// The legacy numeric encoding of this flag.
    pub fn as_raw(self) -> i32 {
        match self {
            Self::None => 0,
            Self::ToStateOnly => 1,
            Self::FromStateOnly => 2,
            Self::Both => 3,
        }
    }

    /// Whether to-state roles are in scope for this flag.
    pub fn includes_to_state(self) -> bool {
        matches!(self, Self::ToStateOnly | Self::Both)
    }

    /// Whether from-state roles are in scope for this flag.
    pub fn includes_from_state(self) -> bool {
        matches!(self, Self::FromStateOnly | Self::Both)
    }
}

/// One notification record owned by a transition.
///
/// Records are consumed in definition order; delivery order is
/// significant to the external mailer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionNotification {
    /// The workflow the transition belongs to
    pub workflow_id: WorkflowId,
    /// The transition this record fires on
    pub transition_id: TransitionId,
    /// The notification definition being sent
    pub notification_id: NotificationId,
    /// Which side(s) contribute state-role recipients
    pub recipient_type: RecipientTypeFlag,
    /// Validation hint: the from-state must contribute recipients
    pub require_from_state_roles: bool,
    /// Validation hint: the to-state must contribute recipients
    pub require_to_state_roles: bool,
    /// Switch: from-state roles are notified at all
    pub notify_from_state_roles: bool,
    /// Switch: to-state roles are notified at all
    pub notify_to_state_roles: bool,
    /// Literal extra addresses, delivered verbatim
    pub additional_recipients: Vec<String>,
    /// Literal CC addresses, delivered verbatim
    pub cc_list: Vec<String>,
}

impl TransitionNotification {
    pub fn new(
        workflow_id: WorkflowId,
        transition_id: TransitionId,
        notification_id: NotificationId,
        recipient_type: RecipientTypeFlag,
    ) -> Self {
        Self {
            workflow_id,
            transition_id,
            notification_id,
            recipient_type,
            require_from_state_roles: false,
            require_to_state_roles: false,
            notify_from_state_roles: true,
            notify_to_state_roles: true,
            additional_recipients: Vec::new(),
            cc_list: Vec::new(),
        }
    }

    pub fn with_additional_recipient(mut self, address: impl Into<String>) -> Self {
        self.additional_recipients.push(address.into());
        self
    }

    pub fn with_cc(mut self, address: impl Into<String>) -> Self {
        self.cc_list.push(address.into());
        self
    }

    pub fn with_notify_from_state_roles(mut self, notify: bool) -> Self {
        self.notify_from_state_roles = notify;
        self
    }

    pub fn with_notify_to_state_roles(mut self, notify: bool) -> Self {
        self.notify_to_state_roles = notify;
        self
    }

    pub fn with_require_from_state_roles(mut self, require: bool) -> Self {
        self.require_from_state_roles = require;
        self
    }

    pub fn with_require_to_state_roles(mut self, require: bool) -> Self {
        self.require_to_state_roles = require;
        self
    }
}
