//! Assessment question generation for the Generator.

use log::{debug, error, warn};

use super::Generator;
use crate::{
    client::{CompletionRequest, ModelClient, Transport},
    error::{GeneratorError, Result},
    fallback::{self, Generation, Outcome},
    models::{AssessmentQuestion, ProjectMode},
    prompt::build_questions_prompt,
    schema::{self, RawQuestion},
};

/// Maximum number of questions kept from a model answer.
pub const MAX_QUESTIONS: usize = 5;

impl Generator {
    /// Generates screening questions for members joining a project.
    ///
    /// Returns an empty list when the model cannot be used; callers must treat
    /// that as "no assessment available". Offline generators return a fixed set
    /// of three generic questions.
    pub async fn generate_assessment_questions(
        &self,
        description: &str,
        name: &str,
        mode: ProjectMode,
    ) -> Vec<AssessmentQuestion> {
        self.generate_assessment_questions_with_outcome(description, name, mode)
            .await
            .into_value()
    }

    /// Generates screening questions and reports how they were produced.
    pub async fn generate_assessment_questions_with_outcome(
        &self,
        description: &str,
        name: &str,
        mode: ProjectMode,
    ) -> Generation<Vec<AssessmentQuestion>> {
        let client = match &self.transport {
            Transport::Offline => {
                return Generation::new(fallback::offline_questions(), Outcome::Offline);
            }
            Transport::Live(client) => client,
        };

        match request_questions(client.as_ref(), description, name, mode).await {
            Ok(questions) if questions.is_empty() => {
                warn!("Model returned no usable questions for '{name}'");
                Generation::new(questions, Outcome::Unavailable)
            }
            Ok(questions) => {
                debug!("Generated {} questions for '{name}'", questions.len());
                Generation::new(questions, Outcome::Success)
            }
            Err(e) => {
                error!("Question generation via {} failed for '{name}': {e}", client.name());
                Generation::new(Vec::new(), Outcome::Unavailable)
            }
        }
    }
}

async fn request_questions(
    client: &dyn ModelClient,
    description: &str,
    name: &str,
    mode: ProjectMode,
) -> Result<Vec<AssessmentQuestion>> {
    let request = CompletionRequest::new(
        build_questions_prompt(description, name, mode),
        schema::questions_response_schema(),
    );
    let text = client.complete(&request).await?;
    if text.trim().is_empty() {
        return Err(GeneratorError::EmptyResponse);
    }

    let raw = schema::parse_questions(&text)?;
    Ok(raw
        .questions
        .into_iter()
        .filter_map(RawQuestion::into_question)
        .take(MAX_QUESTIONS)
        .collect())
}
