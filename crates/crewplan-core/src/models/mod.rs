//! Data models for projects and generated plans.
//!
//! Models serialize to the camelCase JSON shape used by project files and by
//! the model's structured-output contract. Display implementations live in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use crewplan_core::models::{Project, ProjectMode};
//!
//! let project = Project::new("Acme", "A dog-walking app", ProjectMode::Solo);
//! assert!(project.plan.is_none());
//! assert_eq!(project.mode.as_str(), "SOLO");
//! ```

pub mod plan;
pub mod project;
pub mod status;


pub use plan::{Milestone, ProjectPlan, Role, Task};
pub use project::{AssessmentQuestion, MemberAnswer, Project, TeamMember};
pub use status::{ProjectMode, TaskStatus};
