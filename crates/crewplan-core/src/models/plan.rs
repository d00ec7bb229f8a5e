//! Plan model definition: roles, tasks and milestones.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::TaskStatus;

/// A role on the project, either to fill (SOLO) or mapped to a member (TEAM).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub title: String,

    pub description: String,

    /// Ready-to-post hiring pitch (SOLO mode)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruitment_blurb: Option<String>,

    /// Id of the member holding the role (TEAM mode), or the
    /// [`UNASSIGNED`](crate::fallback::UNASSIGNED) sentinel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_member_id: Option<String>,

    /// Short justification for the assignment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_reason: Option<String>,

    /// Managed by the caller after generation; generated roles start unfilled
    #[serde(default)]
    pub is_filled: bool,
}

/// A unit of work in the plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Assigned locally after generation
    pub id: String,

    pub title: String,

    pub description: String,

    /// Member name or role title
    pub assigned_to: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_reason: Option<String>,

    #[serde(default)]
    pub status: TaskStatus,
}

/// A checkpoint in the plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub title: String,

    pub description: String,

    /// Free text, not a structured date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// The generated bundle of roles, tasks, milestones and summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ProjectPlan {
    pub summary: String,

    #[serde(default)]
    pub roles: Vec<Role>,

    #[serde(default)]
    pub tasks: Vec<Task>,

    #[serde(default)]
    pub milestones: Vec<Milestone>,
}
