//! Core library for the Crewplan staffing plan generator.
//!
//! Given a project idea, this crate asks a hosted language model for
//! screening questions and for a staffing plan (roles, tasks, milestones),
//! then coerces whatever comes back into well-formed data. Generation never
//! fails from the caller's point of view: missing credentials, network
//! errors and malformed answers all resolve to a usable result through the
//! [`fallback`] ladder.
//!
//! # Modes
//!
//! - **TEAM**: members have already joined; the plan assigns roles and tasks
//!   to them.
//! - **SOLO**: a founder recruits; roles stay vacant and carry recruitment
//!   blurbs.
//!
//! # Quick Start
//!
//! ```rust
//! use crewplan_core::{
//!     GeneratorBuilder,
//!     models::{Project, ProjectMode},
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = GeneratorBuilder::new()
//!     .with_api_key(std::env::var("GEMINI_API_KEY").ok())
//!     .build()?;
//!
//! let project = Project::new("Acme", "A dog-walking app", ProjectMode::Solo);
//! let questions = generator
//!     .generate_assessment_questions(&project.description, &project.name, project.mode)
//!     .await;
//! println!("{} questions", questions.len());
//!
//! let plan = generator.generate_project_plan(&project).await;
//! println!("{plan}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod display;
pub mod error;
pub mod fallback;
pub mod generator;
pub mod id;
pub mod models;
pub mod params;
pub mod prompt;
pub mod sanitize;
pub mod schema;

// Re-export commonly used types
pub use client::{GeminiClient, ModelClient, Transport};
pub use display::{GenerationResult, LocalDateTime, OperationStatus, Questions, StaffedPlan};
pub use error::{GeneratorError, Result};
pub use fallback::{Generation, Outcome};
pub use generator::{Generator, GeneratorBuilder};
pub use models::{
    AssessmentQuestion, MemberAnswer, Milestone, Project, ProjectMode, ProjectPlan, Role, Task,
    TaskStatus, TeamMember,
};
pub use params::{GenerateQuestions, ProjectDraft};
