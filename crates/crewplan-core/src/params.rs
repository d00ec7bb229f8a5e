//! Parameter structures shared by the CLI and the MCP server.
//!
//! Interface layers wrap these in their own framework-specific types (clap
//! args, transparent MCP request wrappers) and convert into them, so the core
//! stays free of interface dependencies.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{GeneratorError, Result},
    models::{Project, ProjectMode, TeamMember},
};

/// Parameters for generating assessment questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GenerateQuestions {
    /// Project name
    pub name: String,
    /// Free-text description of the project idea
    #[serde(default)]
    pub description: String,
    /// Workflow mode: TEAM or SOLO
    pub mode: ProjectMode,
}

/// Describes a project to create and plan.
///
/// Carries only caller-supplied fields; the id and creation time are
/// assigned by [`ProjectDraft::into_project`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    /// Project name
    pub name: String,
    /// Free-text description of the project idea
    #[serde(default)]
    pub description: String,
    /// Workflow mode: TEAM or SOLO
    pub mode: ProjectMode,
    /// Optional target deadline, free text
    #[serde(default)]
    pub deadline: Option<String>,
    /// Optional preferred tech stack, free text
    #[serde(default)]
    pub tech_stack: Option<String>,
    /// Members who have joined (TEAM mode)
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

impl ProjectDraft {
    /// Validates the draft and turns it into a fresh [`Project`].
    ///
    /// The name must be non-blank. Blank deadline and tech stack values are
    /// treated as absent.
    pub fn into_project(self) -> Result<Project> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(GeneratorError::invalid_input("name")
                .with_reason("project name must not be empty"));
        }

        let mut project = Project::new(name, self.description, self.mode);
        project.deadline = non_blank(self.deadline);
        project.tech_stack = non_blank(self.tech_stack);
        project.members = self.members;
        Ok(project)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
