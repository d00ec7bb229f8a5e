//! Structured-output contract with the model.
//!
//! Two halves: the declarative `responseSchema` objects sent with each request,
//! and the lenient parse applied to whatever comes back. The declared types are
//! hints to the model only, so nothing here trusts them: every field goes
//! through a coercing deserializer that supplies a default when the value is
//! missing or has the wrong shape.
//!
//! Coercion rules:
//!
//! - list fields that are not arrays become empty lists; array items that are
//!   not objects are dropped
//! - string fields accept strings, numbers and booleans; anything else, and
//!   whitespace-only strings, count as absent
//! - unknown task statuses become `todo`
//! - ids and `isFilled` proposed by the model are ignored

use serde::{
    Deserialize, Deserializer,
    de::{DeserializeOwned, Error as _},
};
use serde_json::{Value, json};

use crate::{
    error::{GeneratorError, Result},
    id::generate_id,
    models::{AssessmentQuestion, Milestone, Role, Task, TaskStatus},
    sanitize::extract_json_object,
};

pub const DEFAULT_ROLE_TITLE: &str = "Untitled Role";
pub const DEFAULT_TASK_TITLE: &str = "Untitled Task";
pub const DEFAULT_MILESTONE_TITLE: &str = "Milestone";
pub const DEFAULT_ASSIGNEE: &str = "Unassigned";

/// Response schema for plan generation, in the model's schema dialect.
pub fn plan_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "roles": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "recruitmentBlurb": { "type": "STRING", "description": "Solo founder mode only" },
                        "assignedMemberId": { "type": "STRING", "description": "Team mode only (member ID)" },
                        "assignmentReason": { "type": "STRING", "description": "Short reason" },
                        "isFilled": { "type": "BOOLEAN", "description": "Always false initially" }
                    }
                }
            },
            "tasks": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "assignedTo": { "type": "STRING" },
                        "assignmentReason": { "type": "STRING", "description": "Short reason" },
                        "status": { "type": "STRING", "enum": ["todo", "in-progress", "done"] }
                    }
                }
            },
            "milestones": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "dueDate": { "type": "STRING" }
                    }
                }
            },
            "summary": { "type": "STRING" }
        }
    })
}

/// Response schema for assessment question generation.
pub fn questions_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "questions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "text": { "type": "STRING" },
                        "options": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" }
                        }
                    },
                    "required": ["text", "options"]
                }
            }
        }
    })
}

/// Plan as proposed by the model, after coercion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlan {
    #[serde(default, deserialize_with = "lenient_list")]
    pub roles: Vec<RawRole>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub tasks: Vec<RawTask>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub milestones: Vec<RawMilestone>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRole {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub recruitment_blurb: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub assigned_member_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub assignment_reason: Option<String>,
}

impl RawRole {
    /// Applies field defaults. The role always starts unfilled.
    pub fn into_role(self) -> Role {
        Role {
            title: self.title.unwrap_or_else(|| DEFAULT_ROLE_TITLE.to_string()),
            description: self.description.unwrap_or_default(),
            recruitment_blurb: self.recruitment_blurb,
            assigned_member_id: self.assigned_member_id,
            assignment_reason: self.assignment_reason,
            is_filled: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTask {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub assigned_to: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub assignment_reason: Option<String>,
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: TaskStatus,
}

impl RawTask {
    /// Applies field defaults and assigns a fresh local id.
    pub fn into_task(self) -> Task {
        Task {
            id: generate_id(),
            title: self.title.unwrap_or_else(|| DEFAULT_TASK_TITLE.to_string()),
            description: self.description.unwrap_or_default(),
            assigned_to: self
                .assigned_to
                .unwrap_or_else(|| DEFAULT_ASSIGNEE.to_string()),
            assignment_reason: self.assignment_reason,
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMilestone {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub due_date: Option<String>,
}

impl RawMilestone {
    pub fn into_milestone(self) -> Milestone {
        Milestone {
            title: self
                .title
                .unwrap_or_else(|| DEFAULT_MILESTONE_TITLE.to_string()),
            description: self.description.unwrap_or_default(),
            due_date: self.due_date,
        }
    }
}

/// Question set as proposed by the model, after coercion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawQuestionSet {
    #[serde(default, deserialize_with = "lenient_list")]
    pub questions: Vec<RawQuestion>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawQuestion {
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub options: Vec<String>,
}

impl RawQuestion {
    /// Converts to a question with a fresh id, or `None` when the question has
    /// no text or no options to choose from.
    pub fn into_question(self) -> Option<AssessmentQuestion> {
        let question = AssessmentQuestion {
            id: generate_id(),
            text: self.text?,
            options: self.options,
        };
        question.is_usable().then_some(question)
    }
}

/// Sanitizes and parses model text into a [`RawPlan`].
///
/// # Errors
///
/// Returns `GeneratorError::MalformedResponse` if the text is not JSON or the
/// top-level value is not an object.
pub fn parse_plan(text: &str) -> Result<RawPlan> {
    parse_object(text)
}

/// Sanitizes and parses model text into a [`RawQuestionSet`].
///
/// # Errors
///
/// Returns `GeneratorError::MalformedResponse` if the text is not JSON or the
/// top-level value is not an object.
pub fn parse_questions(text: &str) -> Result<RawQuestionSet> {
    parse_object(text)
}

fn parse_object<T: DeserializeOwned>(text: &str) -> Result<T> {
    let cleaned = extract_json_object(text);
    let value: Value = serde_json::from_str(&cleaned).map_err(GeneratorError::malformed)?;
    if !value.is_object() {
        return Err(GeneratorError::malformed(serde_json::Error::custom(
            "expected a JSON object at the top level",
        )));
    }
    serde_json::from_value(value).map_err(GeneratorError::malformed)
}

fn lenient_list<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(coerce_string(Value::deserialize(deserializer)?))
}

fn lenient_strings<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items.into_iter().filter_map(coerce_string).collect())
}

fn lenient_status<'de, D>(deserializer: D) -> std::result::Result<TaskStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(coerce_string(Value::deserialize(deserializer)?)
        .and_then(|s| s.parse().ok())
        .unwrap_or_default())
}

fn coerce_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
