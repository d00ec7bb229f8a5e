//! Markdown formatting for generated plans and assessments.
//!
//! Domain models implement [`std::fmt::Display`] directly; the wrappers in
//! this module add context such as the fallback outcome or a numbered list.
//! All output is markdown, rendered by the CLI's terminal renderer or
//! returned verbatim over MCP.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │   Formatted     │
//! │ (Plan, Role...) │───▶│ (Generation...) │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```rust
//! use crewplan_core::{display::OperationStatus, fallback};
//!
//! let plan = fallback::offline_plan();
//! assert!(plan.to_string().contains("### Lead Developer"));
//!
//! let status = OperationStatus::success("Plan saved");
//! assert!(status.to_string().starts_with("Success:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Questions;
pub use datetime::LocalDateTime;
pub use models::StaffedPlan;
pub use results::GenerationResult;
pub use status::OperationStatus;
