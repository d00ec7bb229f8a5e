//! Enumerations for project modes and task statuses.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Workflow a project runs under. Fixed when the project is created.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum ProjectMode {
    /// Match an existing team's members to roles and tasks
    Team,

    /// Recommend a team to hire for a solo founder
    Solo,
}

impl FromStr for ProjectMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "team" => Ok(ProjectMode::Team),
            "solo" => Ok(ProjectMode::Solo),
            _ => Err(format!("Invalid project mode: {s}")),
        }
    }
}

impl ProjectMode {
    /// Wire representation, as used in prompts and project files
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectMode::Team => "TEAM",
            ProjectMode::Solo => "SOLO",
        }
    }
}

/// Type-safe enumeration of task statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum TaskStatus {
    /// Task is pending
    #[default]
    #[serde(rename = "todo")]
    Todo,

    /// Task is being worked on
    #[serde(rename = "in-progress")]
    InProgress,

    /// Task has been completed
    #[serde(rename = "done")]
    Done,
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "todo" | "to-do" | "to do" => Ok(TaskStatus::Todo),
            "in-progress" | "in_progress" | "inprogress" | "in progress" => {
                Ok(TaskStatus::InProgress)
            }
            "done" => Ok(TaskStatus::Done),
            _ => Err(format!("Invalid task status: {s}")),
        }
    }
}

impl TaskStatus {
    /// Wire representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use crewplan_core::models::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Done.with_icon(), "✓ Done");
    /// assert_eq!(TaskStatus::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(TaskStatus::Todo.with_icon(), "○ Todo");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskStatus::Done => "✓ Done",
            TaskStatus::InProgress => "➤ In Progress",
            TaskStatus::Todo => "○ Todo",
        }
    }
}
