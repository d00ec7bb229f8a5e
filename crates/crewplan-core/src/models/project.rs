//! Project, member and assessment question models.

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ProjectMode, ProjectPlan};
use crate::{
    error::{GeneratorError, Result},
    id::generate_id,
};

/// A multiple-choice screening question asked to members when they join.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AssessmentQuestion {
    /// Identifier, unique within the project
    pub id: String,

    /// The question prompt
    pub text: String,

    /// Answer options, in display order
    #[serde(default)]
    pub options: Vec<String>,
}

impl AssessmentQuestion {
    /// Whether the question can be asked: it has text and at least one option.
    pub fn is_usable(&self) -> bool {
        !self.text.trim().is_empty() && !self.options.is_empty()
    }

    /// Returns the option matching `answer`, ignoring surrounding whitespace.
    pub fn option(&self, answer: &str) -> Option<&str> {
        let answer = answer.trim();
        self.options
            .iter()
            .map(String::as_str)
            .find(|option| *option == answer)
    }
}

/// One answer a member gave during the assessment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct MemberAnswer {
    /// Text of the question that was asked
    pub question: String,

    /// Literal copy of the chosen option
    pub answer: String,
}

/// A team member who completed the project assessment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,

    /// Display name
    pub name: String,

    /// Free-text skills, comma-separated by convention
    #[serde(default)]
    pub skills: String,

    /// One answer per project question, captured at join time
    #[serde(default)]
    pub answers: Vec<MemberAnswer>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f64>,
}

/// A project whose plan is generated from its description and members.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier for the project
    pub id: String,

    pub name: String,

    /// Free-text idea description; the main generation input
    #[serde(default)]
    pub description: String,

    /// Workflow selector, fixed at creation
    pub mode: ProjectMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<String>,

    #[serde(default)]
    pub questions: Vec<AssessmentQuestion>,

    #[serde(default)]
    pub members: Vec<TeamMember>,

    /// Generated plan, unset until generation has run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<ProjectPlan>,

    /// Timestamp when the project was created (UTC)
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub created_at: Timestamp,
}

impl Project {
    /// Creates an empty project with a fresh id and the current timestamp.
    pub fn new(name: impl Into<String>, description: impl Into<String>, mode: ProjectMode) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            description: description.into(),
            mode,
            deadline: None,
            tech_stack: None,
            questions: Vec::new(),
            members: Vec::new(),
            plan: None,
            created_at: Timestamp::now(),
        }
    }

    /// Parses a project from its JSON file representation.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the project to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Replaces the plan wholesale. Nothing from a previous plan survives.
    pub fn with_plan(mut self, plan: ProjectPlan) -> Self {
        self.plan = Some(plan);
        self
    }

    /// Adds a member who answered the project's assessment.
    ///
    /// `answers` holds one entry per project question, in question order, and
    /// each entry must be one of that question's options. The stored answer is
    /// the literal option text.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::InvalidInput` if the name or skills are blank,
    /// the number of answers differs from the number of questions, or an
    /// answer is not one of its question's options.
    pub fn add_member<S: AsRef<str>>(
        &mut self,
        name: &str,
        skills: &str,
        answers: &[S],
    ) -> Result<TeamMember> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GeneratorError::invalid_input("name").with_reason("must not be empty"));
        }
        let skills = skills.trim();
        if skills.is_empty() {
            return Err(GeneratorError::invalid_input("skills").with_reason("must not be empty"));
        }
        if answers.len() != self.questions.len() {
            return Err(GeneratorError::invalid_input("answers").with_reason(format!(
                "expected {} answers, got {}",
                self.questions.len(),
                answers.len()
            )));
        }

        let answers = self
            .questions
            .iter()
            .zip(answers)
            .enumerate()
            .map(|(position, (question, answer))| {
                let answer = answer.as_ref();
                let option = question.option(answer).ok_or_else(|| {
                    GeneratorError::invalid_input("answers").with_reason(format!(
                        "'{answer}' is not an option for question {} (choose from: {})",
                        position + 1,
                        question.options.join(", ")
                    ))
                })?;
                Ok(MemberAnswer {
                    question: question.text.clone(),
                    answer: option.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let member = TeamMember {
            id: generate_id(),
            name: name.to_string(),
            skills: skills.to_string(),
            answers,
            match_score: None,
        };
        self.members.push(member.clone());
        Ok(member)
    }

    /// Flips the filled state of the plan role at `index` and returns the new
    /// state.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::InvalidInput` if the project has no plan or
    /// the index is out of range.
    pub fn toggle_role(&mut self, index: usize) -> Result<bool> {
        let plan = self.plan.as_mut().ok_or_else(|| {
            GeneratorError::invalid_input("plan").with_reason("no plan has been generated yet")
        })?;
        let count = plan.roles.len();
        let role = plan.roles.get_mut(index).ok_or_else(|| {
            GeneratorError::invalid_input("role")
                .with_reason(format!("index {index} is out of range for {count} roles"))
        })?;
        role.is_filled = !role.is_filled;
        Ok(role.is_filled)
    }

    /// Looks up a member by id, falling back to a case-insensitive name match.
    pub fn find_member(&self, key: &str) -> Option<&TeamMember> {
        let key = key.trim();
        self.members
            .iter()
            .find(|m| m.id == key)
            .or_else(|| {
                self.members
                    .iter()
                    .find(|m| m.name.trim().eq_ignore_ascii_case(key))
            })
    }
}
