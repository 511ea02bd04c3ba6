//! Role assignments: who holds what privilege in a workflow state
//!
//! A state grants each of its roles an assignment type. Assignment types
//! form a total order and aggregation is always most-privileged-wins:
//! holding two roles never adds up to more than the stronger of the two.

use crate::RoleId;
use serde::{Deserialize, Serialize};

/// A user's privilege level in a workflow state.
///
/// The ordering `None < Reader < Assignee < Admin` is load-bearing:
/// resolution takes the maximum across every role a user matches.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AssignmentType {
    /// No privilege in this state
    #[default]
    None,
    /// May view the item
    Reader,
    /// May act on the item (the working level)
    Assignee,
    /// Full control, including other users' items
    Admin,
}

impl AssignmentType {
    /// Decode the legacy numeric column. Unknown values collapse to
    /// `None` rather than failing; the schema never promised a range.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Reader,
            2 => Self::Assignee,
            3 => Self::Admin,
            _ => Self::None,
        }
    }

    /// The legacy numeric encoding of this assignment type.
    pub fn as_raw(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Reader => 1,
            Self::Assignee => 2,
            Self::Admin => 3,
        }
    }
}

impl std::fmt::Display for AssignmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::None => "None",
            Self::Reader => "Reader",
            Self::Assignee => "Assignee",
            Self::Admin => "Admin",
        };
        write!(f, "{}", label)
    }
}

/// How a role is granted within a state.
///
/// A role belongs to exactly one category; the category comes from the
/// backing row's adhoc flag and is never inferred.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdhocCategory {
    /// Granted to the role's whole membership for every item in the state
    #[default]
    NonAdhoc,
    /// Granted per content item to explicitly named users
    Normal,
    /// Granted per content item to any authenticated user
    Anonymous,
}

impl AdhocCategory {
    /// Decode the legacy adhoc flag column. Unknown values collapse to
    /// `NonAdhoc`.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Normal,
            2 => Self::Anonymous,
            _ => Self::NonAdhoc,
        }
    }

    /// The legacy numeric encoding of this category.
    pub fn as_raw(self) -> i32 {
        match self {
            Self::NonAdhoc => 0,
            Self::Normal => 1,
            Self::Anonymous => 2,
        }
    }
}

/// One role's assignment within a workflow state.
///
/// Immutable once loaded for a given state snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    /// The role being granted
    pub role_id: RoleId,
    /// The role's display name, as stored
    pub name: String,
    /// The privilege the role carries in this state
    pub assignment_type: AssignmentType,
    /// How the role is granted
    pub adhoc: AdhocCategory,
    /// Whether this role receives transition notifications
    pub notify_enabled: bool,
}

impl RoleAssignment {
    pub fn new(
        role_id: RoleId,
        name: impl Into<String>,
        assignment_type: AssignmentType,
    ) -> Self {
        Self {
            role_id,
            name: name.into(),
            assignment_type,
            adhoc: AdhocCategory::NonAdhoc,
            notify_enabled: false,
        }
    }

    pub fn with_adhoc(mut self, adhoc: AdhocCategory) -> Self {
        self.adhoc = adhoc;
        self
    }

    pub fn with_notify(mut self, enabled: bool) -> Self {
        self.notify_enabled = enabled;
        self
    }

    /// The name key used by every case-insensitive lookup: trimmed and
    /// lowercased.
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Normalize a role or user name for case-insensitive matching.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_type_ordering() {
        assert!(AssignmentType::None < AssignmentType::Reader);
        assert!(AssignmentType::Reader < AssignmentType::Assignee);
        assert!(AssignmentType::Assignee < AssignmentType::Admin);
        assert_eq!(
            AssignmentType::Reader.max(AssignmentType::Admin),
            AssignmentType::Admin
        );
    }

    #[test]
    fn test_assignment_type_raw_round_trip() {
        for raw in 0..=3 {
            assert_eq!(AssignmentType::from_raw(raw).as_raw(), raw);
        }
        // Out-of-range values collapse to None.
        assert_eq!(AssignmentType::from_raw(99), AssignmentType::None);
        assert_eq!(AssignmentType::from_raw(-1), AssignmentType::None);
    }

    #[test]
    fn test_adhoc_category_raw() {
        assert_eq!(AdhocCategory::from_raw(0), AdhocCategory::NonAdhoc);
        assert_eq!(AdhocCategory::from_raw(1), AdhocCategory::Normal);
        assert_eq!(AdhocCategory::from_raw(2), AdhocCategory::Anonymous);
        assert_eq!(AdhocCategory::from_raw(7), AdhocCategory::NonAdhoc);
    }

    #[test]
    fn test_role_assignment_builder() {
        let role = RoleAssignment::new(RoleId::new(10), "Editor", AssignmentType::Assignee)
            .with_adhoc(AdhocCategory::Normal)
            .with_notify(true);

        assert_eq!(role.role_id, RoleId::new(10));
        assert_eq!(role.adhoc, AdhocCategory::Normal);
        assert!(role.notify_enabled);
    }

    #[test]
    fn test_normalized_name() {
        let role = RoleAssignment::new(RoleId::new(1), "  Quality Assurance ", AssignmentType::Reader);
        assert_eq!(role.normalized_name(), "quality assurance");
    }

    #[test]
    fn test_serde_round_trip() {
        let role = RoleAssignment::new(RoleId::new(3), "Author", AssignmentType::Admin)
            .with_notify(true);
        let json = serde_json::to_string(&role).unwrap();
        let back: RoleAssignment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, role);
    }
}
