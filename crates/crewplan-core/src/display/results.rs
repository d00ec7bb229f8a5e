//! Result wrapper types for displaying generation outcomes.

use std::fmt;

use super::{Questions, models::StaffedPlan};
use crate::{
    fallback::{Generation, Outcome},
    models::{AssessmentQuestion, ProjectPlan, TeamMember},
};

/// Wrapper displaying a generated value under a heading that states which
/// rung of the fallback ladder produced it.
///
/// # Examples
///
/// ```rust
/// use crewplan_core::{
///     display::GenerationResult,
///     fallback::{self, Generation, Outcome},
/// };
///
/// let generation = Generation::new(fallback::generic_template_plan(), Outcome::Unavailable);
/// let output = GenerationResult::new(&generation, "Acme").to_string();
/// assert!(output.starts_with("# Plan for Acme"));
/// assert!(output.contains("template plan"));
/// ```
pub struct GenerationResult<'a, T> {
    pub generation: &'a Generation<T>,
    pub subject: &'a str,
    /// Members that plan assignments are resolved against
    pub members: &'a [TeamMember],
}

impl<'a, T> GenerationResult<'a, T> {
    pub fn new(generation: &'a Generation<T>, subject: &'a str) -> Self {
        Self {
            generation,
            subject,
            members: &[],
        }
    }

    pub fn with_members(mut self, members: &'a [TeamMember]) -> Self {
        self.members = members;
        self
    }
}

fn notice(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::Success => None,
        Outcome::Offline => Some("No API key configured; showing built-in sample data."),
        Outcome::Degraded => Some("Parts of this result were filled in from templates."),
        Outcome::Unavailable => Some("The model service was unavailable; showing a template plan."),
    }
}

impl fmt::Display for GenerationResult<'_, ProjectPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Plan for {}", self.subject)?;
        writeln!(f)?;
        if let Some(notice) = notice(self.generation.outcome) {
            writeln!(f, "_{notice}_")?;
            writeln!(f)?;
        }
        let staffed = StaffedPlan {
            plan: &self.generation.value,
            members: self.members,
        };
        write!(f, "{staffed}")
    }
}

impl fmt::Display for GenerationResult<'_, Vec<AssessmentQuestion>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Assessment for {}", self.subject)?;
        writeln!(f)?;
        match self.generation.outcome {
            Outcome::Offline => {
                writeln!(f, "_No API key configured; showing generic questions._")?;
                writeln!(f)?;
            }
            Outcome::Unavailable => {
                writeln!(f, "_No usable assessment could be generated._")?;
                writeln!(f)?;
            }
            Outcome::Success | Outcome::Degraded => {}
        }
        write!(f, "{}", Questions(&self.generation.value))
    }
}
