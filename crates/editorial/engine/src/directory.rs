//! State role directories: the per-state role snapshot
//!
//! A directory is built once from the backing rows of one
//! `(workflow, state)` pair and is read-only afterwards. All derived
//! views — the three adhoc partitions, the per-role lookup maps, the
//! normalized-name maps — are computed at construction so lookups never
//! touch the source again.

use editorial_store::RoleAssignmentSource;
use editorial_types::{
    normalize_name, AdhocCategory, AssignmentType, EditorialResult, RoleAssignment, RoleId,
    StateId, WorkflowId,
};
use std::collections::HashMap;

/// An immutable snapshot of all role assignment data for one workflow
/// state.
///
/// Empty iff the backing query returned zero rows; callers must check
/// [`is_empty`](Self::is_empty) before treating lookups as
/// authoritative. Within each name map, two roles sharing a normalized
/// name resolve to the later record in result order — the backing
/// schema does not guarantee name uniqueness, so the ambiguity is
/// documented rather than defended against.
#[derive(Clone, Debug)]
pub struct StateRoleDirectory {
    workflow_id: WorkflowId,
    state_id: StateId,
    assignments: Vec<RoleAssignment>,
    non_adhoc: Vec<RoleId>,
    adhoc_normal: Vec<RoleId>,
    adhoc_anonymous: Vec<RoleId>,
    assignment_by_role: HashMap<RoleId, AssignmentType>,
    name_by_role: HashMap<RoleId, String>,
    notify_by_role: HashMap<RoleId, bool>,
    non_adhoc_by_name: HashMap<String, RoleId>,
    adhoc_normal_by_name: HashMap<String, RoleId>,
    all_by_name: HashMap<String, RoleId>,
}

impl StateRoleDirectory {
    // ── Construction ─────────────────────────────────────────────────

    /// Load the snapshot for `(workflow_id, state_id)`.
    ///
    /// Zero backing rows produce an empty-but-valid directory, never an
    /// error; a backing failure propagates unchanged with nothing
    /// retained.
    pub fn load(
        source: &dyn RoleAssignmentSource,
        workflow_id: WorkflowId,
        state_id: StateId,
    ) -> EditorialResult<Self> {
        let assignments = source.role_assignments(workflow_id, state_id)?;
        let directory = Self::from_assignments(workflow_id, state_id, assignments);
        tracing::debug!(
            workflow_id = %workflow_id,
            state_id = %state_id,
            roles = directory.role_count(),
            "state role directory loaded"
        );
        Ok(directory)
    }

    /// Build the snapshot from already-hydrated records, in result order.
    pub fn from_assignments(
        workflow_id: WorkflowId,
        state_id: StateId,
        assignments: Vec<RoleAssignment>,
    ) -> Self {
        let mut non_adhoc = Vec::new();
        let mut adhoc_normal = Vec::new();
        let mut adhoc_anonymous = Vec::new();
        let mut assignment_by_role = HashMap::new();
        let mut name_by_role = HashMap::new();
        let mut notify_by_role = HashMap::new();
        let mut non_adhoc_by_name = HashMap::new();
        let mut adhoc_normal_by_name = HashMap::new();
        let mut all_by_name = HashMap::new();

        for role in &assignments {
            let key = role.normalized_name();
            match role.adhoc {
                AdhocCategory::NonAdhoc => {
                    non_adhoc.push(role.role_id);
                    non_adhoc_by_name.insert(key.clone(), role.role_id);
                }
                AdhocCategory::Normal => {
                    adhoc_normal.push(role.role_id);
                    adhoc_normal_by_name.insert(key.clone(), role.role_id);
                }
                AdhocCategory::Anonymous => {
                    adhoc_anonymous.push(role.role_id);
                }
            }
            assignment_by_role.insert(role.role_id, role.assignment_type);
            name_by_role.insert(role.role_id, role.name.clone());
            notify_by_role.insert(role.role_id, role.notify_enabled);
            all_by_name.insert(key, role.role_id);
        }

        Self {
            workflow_id,
            state_id,
            assignments,
            non_adhoc,
            adhoc_normal,
            adhoc_anonymous,
            assignment_by_role,
            name_by_role,
            notify_by_role,
            non_adhoc_by_name,
            adhoc_normal_by_name,
            all_by_name,
        }
    }

    // ── Lookups ──────────────────────────────────────────────────────

    pub fn workflow_id(&self) -> WorkflowId {
        self.workflow_id
    }

    pub fn state_id(&self) -> StateId {
        self.state_id
    }

    /// True iff the backing query returned zero rows. An empty directory
    /// means the state has no workflow control over items, so every
    /// lookup answers "nothing".
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Number of role assignments in the snapshot.
    pub fn role_count(&self) -> usize {
        self.assignments.len()
    }

    /// The full record set, in result order.
    pub fn assignments(&self) -> &[RoleAssignment] {
        &self.assignments
    }

    /// Roles granted to their whole membership for every item.
    pub fn non_adhoc_roles(&self) -> &[RoleId] {
        &self.non_adhoc
    }

    /// Roles granted per item to explicitly named users.
    pub fn adhoc_normal_roles(&self) -> &[RoleId] {
        &self.adhoc_normal
    }

    /// Roles granted per item to any authenticated user.
    pub fn adhoc_anonymous_roles(&self) -> &[RoleId] {
        &self.adhoc_anonymous
    }

    /// Whether the state carries any adhoc-anonymous role.
    pub fn has_adhoc_anonymous(&self) -> bool {
        !self.adhoc_anonymous.is_empty()
    }

    /// The assignment type a role carries in this state.
    pub fn assignment_type(&self, role_id: RoleId) -> Option<AssignmentType> {
        self.assignment_by_role.get(&role_id).copied()
    }

    /// A role's display name.
    pub fn role_name(&self, role_id: RoleId) -> Option<&str> {
        self.name_by_role.get(&role_id).map(String::as_str)
    }

    /// Whether a role receives transition notifications. Unknown roles
    /// do not.
    pub fn notify_enabled(&self, role_id: RoleId) -> bool {
        self.notify_by_role.get(&role_id).copied().unwrap_or(false)
    }

    /// Case-insensitive name lookup over all roles.
    pub fn role_id_by_name(&self, name: &str) -> Option<RoleId> {
        self.all_by_name.get(&normalize_name(name)).copied()
    }

    /// Case-insensitive name lookup over non-adhoc roles only.
    pub fn non_adhoc_role_by_name(&self, name: &str) -> Option<RoleId> {
        self.non_adhoc_by_name.get(&normalize_name(name)).copied()
    }

    /// Case-insensitive name lookup over adhoc-normal roles only.
    pub fn adhoc_normal_role_by_name(&self, name: &str) -> Option<RoleId> {
        self.adhoc_normal_by_name.get(&normalize_name(name)).copied()
    }

    /// The records whose notification flag is set, in result order.
    pub fn notifying_assignments(&self) -> impl Iterator<Item = &RoleAssignment> {
        self.assignments.iter().filter(|role| role.notify_enabled)
    }

    /// Release the snapshot. Loading is eager, so no live handle is held
    /// across calls; dropping releases the same way, this just keeps the
    /// release point visible at call sites.
    pub fn close(self) {}
}
