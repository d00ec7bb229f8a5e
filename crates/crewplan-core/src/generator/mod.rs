//! High-level generator API for assessment questions and project plans.
//!
//! The [`Generator`] is the single entry point callers use. It builds the
//! mode-specific prompt, calls the model through its [`Transport`], parses the
//! answer under the schema contract and walks the fallback ladder so callers
//! always get something usable back.
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Prompt    │    │  Transport  │    │   Schema    │    │  Fallback   │
//! │ (per mode)  │───▶│ (Live/Off)  │───▶│ (sanitize + │───▶│  (ladder)   │
//! │             │    │             │    │   coerce)   │    │             │
//! └─────────────┘    └─────────────┘    └─────────────┘    └─────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Generator`] instances with configuration
//! - [`plan_handlers`]: Plan generation and normalization
//! - [`question_handlers`]: Assessment question generation
//!
//! The generator holds no mutable state. It is `Send + Sync` and can be
//! shared behind an `Arc`; concurrent calls for the same project simply
//! produce independent results.
//!
//! # Usage Examples
//!
//! ```rust
//! use crewplan_core::{GeneratorBuilder, Outcome, models::{Project, ProjectMode}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // No API key: the generator runs offline on built-in data
//! let generator = GeneratorBuilder::new().build()?;
//!
//! let project = Project::new("Acme", "A dog-walking app", ProjectMode::Solo);
//! let result = generator.generate_project_plan_with_outcome(&project).await;
//! assert_eq!(result.outcome, Outcome::Offline);
//!
//! let project = project.with_plan(result.value);
//! assert!(project.plan.is_some());
//! # Ok(())
//! # }
//! ```

use crate::client::Transport;

pub mod builder;
pub mod plan_handlers;
pub mod question_handlers;


pub use builder::GeneratorBuilder;

/// Main generator interface for questions and plans.
#[derive(Debug, Clone)]
pub struct Generator {
    pub(crate) transport: Transport,
}

impl Generator {
    /// Creates a generator over the given transport.
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Whether the generator answers from built-in data only.
    pub fn is_offline(&self) -> bool {
        self.transport.is_offline()
    }
}
