//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::AssessmentQuestion;

/// Newtype wrapper for displaying a numbered list of assessment questions.
///
/// # Examples
///
/// ```rust
/// use crewplan_core::{display::Questions, fallback};
///
/// let questions = fallback::offline_questions();
/// let output = Questions(&questions).to_string();
/// assert!(output.contains("1. What is your experience with similar projects?"));
///
/// assert!(Questions(&[]).to_string().contains("No questions available."));
/// ```
pub struct Questions<'a>(pub &'a [AssessmentQuestion]);

impl fmt::Display for Questions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No questions available.");
        }

        for (position, question) in self.0.iter().enumerate() {
            writeln!(f, "### {}. {}", position + 1, question.text)?;
            writeln!(f)?;
            for option in &question.options {
                writeln!(f, "- {option}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
