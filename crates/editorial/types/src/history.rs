//! Content status history: the audit trail of a content item
//!
//! Every workflow action on a content item appends one history entry.
//! Entries are chronological and never rewritten; check-in and check-out
//! appear as pseudo-transitions carrying a literal label instead of a
//! transition id.

use crate::{ContentId, HistoryId, StateId, TransitionId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Literal transition label recorded for a check-in pseudo-transition.
pub const CHECKIN_LABEL: &str = "CheckIn";
/// Literal transition label recorded for a check-out pseudo-transition.
pub const CHECKOUT_LABEL: &str = "CheckOut";

/// One row of a content item's status history.
///
/// Field values arrive trimmed and clamped to the legacy column widths
/// at load time and are not re-validated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentHistoryEntry {
    /// Unique entry identifier
    pub history_id: HistoryId,
    /// The content item this entry belongs to
    pub content_id: ContentId,
    /// Content revision the event applied to, always positive
    pub revision: i32,
    /// Content title at event time, at most 40 characters
    pub title: String,
    /// Session the event ran under, at most 40 characters
    pub session_id: String,
    /// The user who performed the action
    pub actor_name: String,
    /// The transition that fired, 0 for pseudo-transitions
    pub transition_id: TransitionId,
    /// Whether the item was publishable after the event
    pub publishable: bool,
    /// The state the item was in after the event
    pub state_id: StateId,
    /// The state's display name, at most 50 characters
    pub state_name: String,
    /// The transition's label, at most 50 characters;
    /// [`CHECKIN_LABEL`]/[`CHECKOUT_LABEL`] for the pseudo-transitions
    pub transition_label: String,
    /// Comma-separated role names of the actor, at most 255 characters
    pub role_names_csv: String,
    /// Who had the item checked out, if anyone
    pub checkout_user_name: Option<String>,
    /// Who last modified the item, at most 255 characters
    pub last_modifier_name: String,
    /// When the item was last modified
    pub last_modified_at: DateTime<Utc>,
    /// When the event occurred
    pub event_at: DateTime<Utc>,
    /// Transition comment, at most 255 characters
    pub comment: String,
}

impl ContentHistoryEntry {
    /// The transition that fired, or `None` for the check-in/check-out
    /// pseudo-transitions.
    pub fn transition(&self) -> Option<TransitionId> {
        if self.transition_id.0 == 0 {
            None
        } else {
            Some(self.transition_id)
        }
    }

    /// Whether this entry records a check-in or check-out rather than a
    /// real transition.
    pub fn is_pseudo_transition(&self) -> bool {
        self.transition_id.0 == 0
    }
}
