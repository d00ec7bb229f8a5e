//! Degradation ladder for generation results.
//!
//! Every generation call ends on exactly one rung, reported as an [`Outcome`]:
//!
//! ```text
//! no credential ──────────────▶ Offline      built-in mock data
//! model answer, used as is ───▶ Success
//! model answer, gaps filled ──▶ Degraded     synthesize_roles / synthesize_tasks
//! transport or parse failure ─▶ Unavailable  generic_template_plan / no questions
//! ```
//!
//! Each rung is a plain function so it can be tested on its own.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    id::generate_id,
    models::{AssessmentQuestion, Project, ProjectMode, ProjectPlan, Role, Task, TaskStatus},
};

/// Sentinel assignee used when a TEAM project has no members.
pub const UNASSIGNED: &str = "Unassigned";

/// Summary used when the model returns none.
pub const DEFAULT_SUMMARY: &str = "Plan generated based on project requirements.";

/// Summary of the generic template plan.
pub const UNAVAILABLE_SUMMARY: &str =
    "AI Service temporarily unavailable. Here is a template plan.";

/// Summary of the offline mock plan.
pub const OFFLINE_SUMMARY: &str = "Mock plan generated (No API Key).";

/// Which rung of the ladder produced a result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// No credential configured; deterministic built-in data
    Offline,
    /// Model output used without synthesis
    Success,
    /// Model output used, with synthesized sections
    Degraded,
    /// Model unreachable or its output unusable
    Unavailable,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Offline => "offline",
            Outcome::Success => "success",
            Outcome::Degraded => "degraded",
            Outcome::Unavailable => "unavailable",
        }
    }
}

/// A generated value tagged with the rung that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Generation<T> {
    pub value: T,
    pub outcome: Outcome,
}

impl<T> Generation<T> {
    pub fn new(value: T, outcome: Outcome) -> Self {
        Self { value, outcome }
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// Built-in plan returned when no credential is configured.
pub fn offline_plan() -> ProjectPlan {
    ProjectPlan {
        summary: OFFLINE_SUMMARY.to_string(),
        roles: vec![Role {
            title: "Lead Developer".to_string(),
            description: "Lead the tech team".to_string(),
            recruitment_blurb: Some("We are looking for a rockstar dev! 🚀 #hiring".to_string()),
            ..Role::default()
        }],
        tasks: vec![task(
            "Setup Repo",
            "Init git",
            "Lead Developer",
            Some("Best fit"),
        )],
        milestones: Vec::new(),
    }
}

/// Built-in assessment questions returned when no credential is configured.
pub fn offline_questions() -> Vec<AssessmentQuestion> {
    vec![
        question(
            "mock1",
            "What is your experience with similar projects?",
            &["Beginner (0-1 yrs)", "Intermediate (2-4 yrs)", "Expert (5+ yrs)", "None"],
        ),
        question(
            "mock2",
            "How much time can you commit weekly?",
            &["< 5 hours", "5-15 hours", "15-30 hours", "Full time"],
        ),
        question(
            "mock3",
            "What is your preferred working style?",
            &["Independent/Async", "Collaborative/Pairing", "Mixed", "Managerial"],
        ),
    ]
}

/// Roles used when the model proposes none, personalized to the project.
pub fn synthesize_roles(project: &Project) -> Vec<Role> {
    match project.mode {
        ProjectMode::Solo => vec![
            Role {
                title: "Full Stack Developer".to_string(),
                description: "Responsible for building the core MVP.".to_string(),
                recruitment_blurb: Some(format!(
                    "Looking for a co-founder/dev to build {}! 🚀 #startup #hiring",
                    project.name
                )),
                ..Role::default()
            },
            Role {
                title: "Growth Marketer".to_string(),
                description: "To handle the go-to-market strategy.".to_string(),
                recruitment_blurb: Some(format!("Join {} as our growth lead! 📈", project.name)),
                ..Role::default()
            },
        ],
        ProjectMode::Team => vec![Role {
            title: "Project Lead".to_string(),
            description: "Coordinate the team.".to_string(),
            assigned_member_id: Some(
                project
                    .members
                    .first()
                    .map(|m| m.id.clone())
                    .unwrap_or_else(|| UNASSIGNED.to_string()),
            ),
            ..Role::default()
        }],
    }
}

/// Tasks used when the plan would otherwise have none.
pub fn synthesize_tasks(project: &Project) -> Vec<Task> {
    match project.mode {
        ProjectMode::Solo => vec![
            task("Define MVP Scope", "List must-have features.", "Founder", None),
            task("Setup Landing Page", "Collect emails.", "Founder", None),
        ],
        ProjectMode::Team => {
            let assignee = project
                .members
                .first()
                .map(|m| m.name.as_str())
                .unwrap_or(UNASSIGNED);
            vec![task(
                "Kick-off Meeting",
                "Align the team on scope, roles and first deliverables.",
                assignee,
                None,
            )]
        }
    }
}

/// Generic plan returned when the model cannot be used at all.
///
/// Carries nothing from the project, so it is identical for
/// every input apart from task ids.
pub fn generic_template_plan() -> ProjectPlan {
    ProjectPlan {
        summary: UNAVAILABLE_SUMMARY.to_string(),
        roles: vec![
            Role {
                title: "Technical Lead".to_string(),
                description: "Lead the development.".to_string(),
                recruitment_blurb: Some("Hiring Tech Lead!".to_string()),
                ..Role::default()
            },
            Role {
                title: "Product Designer".to_string(),
                description: "Design the UI/UX.".to_string(),
                recruitment_blurb: Some("Hiring Designer!".to_string()),
                ..Role::default()
            },
        ],
        tasks: vec![task(
            "Review Project Scope",
            "Manual review required.",
            "Founder",
            None,
        )],
        milestones: Vec::new(),
    }
}

fn task(title: &str, description: &str, assigned_to: &str, reason: Option<&str>) -> Task {
    Task {
        id: generate_id(),
        title: title.to_string(),
        description: description.to_string(),
        assigned_to: assigned_to.to_string(),
        assignment_reason: reason.map(str::to_string),
        status: TaskStatus::Todo,
    }
}

fn question(id: &str, text: &str, options: &[&str]) -> AssessmentQuestion {
    AssessmentQuestion {
        id: id.to_string(),
        text: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
    }
}
