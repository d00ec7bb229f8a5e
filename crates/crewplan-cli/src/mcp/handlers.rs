//! MCP tool handlers implementation

use std::sync::Arc;

use crewplan_core::{Generator, display::GenerationResult, params as core};
use log::debug;
use rmcp::{
    ErrorData,
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types
///
/// Passes deserialization and schema generation straight through to the
/// wrapped core type, which only derives `JsonSchema` behind its `schema`
/// feature.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> McpParams<T>
where
    T: JsonSchema,
{
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type GenerateQuestions = McpParams<core::GenerateQuestions>;
pub type ProjectDraft = McpParams<core::ProjectDraft>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    generator: Arc<Generator>,
}

impl McpHandlers {
    pub fn new(generator: Arc<Generator>) -> Self {
        Self { generator }
    }

    pub async fn generate_questions(
        &self,
        Parameters(params): Parameters<GenerateQuestions>,
    ) -> McpResult {
        debug!("generate_questions: {params:?}");
        let params = params.as_ref();

        let generation = self
            .generator
            .generate_assessment_questions_with_outcome(
                &params.description,
                &params.name,
                params.mode,
            )
            .await;

        let result = GenerationResult::new(&generation, &params.name);
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn generate_plan(&self, Parameters(params): Parameters<ProjectDraft>) -> McpResult {
        debug!("generate_plan: {params:?}");

        let project = params
            .into_inner()
            .into_project()
            .map_err(|e| to_mcp_error("Invalid project", &e))?;

        let generation = self
            .generator
            .generate_project_plan_with_outcome(&project)
            .await;

        let result =
            GenerationResult::new(&generation, &project.name).with_members(&project.members);
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }
}

#[cfg(test)]
mod tests {
    use crewplan_core::{GeneratorBuilder, models::ProjectMode};

    use super::*;

    fn offline_handlers() -> McpHandlers {
        McpHandlers::new(Arc::new(GeneratorBuilder::new().build().unwrap()))
    }

    fn text_of(result: &CallToolResult) -> String {
        let value = serde_json::to_value(result).unwrap();
        value["content"][0]["text"].as_str().unwrap().to_string()
    }

    fn draft(name: &str) -> core::ProjectDraft {
        core::ProjectDraft {
            name: name.to_string(),
            description: "A dog-walking app".to_string(),
            mode: ProjectMode::Solo,
            deadline: None,
            tech_stack: None,
            members: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_generate_plan_offline() {
        let result = offline_handlers()
            .generate_plan(Parameters(McpParams(draft("Acme"))))
            .await
            .unwrap();

        let text = text_of(&result);
        assert!(text.starts_with("# Plan for Acme"));
        assert!(text.contains("### Lead Developer"));
    }

    #[tokio::test]
    async fn test_generate_plan_rejects_blank_name() {
        let err = offline_handlers()
            .generate_plan(Parameters(McpParams(draft(" "))))
            .await
            .unwrap_err();
        assert!(err.message.contains("Invalid project"));
    }

    #[tokio::test]
    async fn test_generate_questions_offline() {
        let params = core::GenerateQuestions {
            name: "Acme".to_string(),
            description: String::new(),
            mode: ProjectMode::Team,
        };
        let result = offline_handlers()
            .generate_questions(Parameters(McpParams(params)))
            .await
            .unwrap();

        let text = text_of(&result);
        assert!(text.contains("# Assessment for Acme"));
        assert!(text.contains("### 3. What is your preferred working style?"));
    }

    #[test]
    fn test_params_deserialize_transparently() {
        let params: ProjectDraft =
            serde_json::from_str(r#"{"name": "Acme", "mode": "TEAM"}"#).unwrap();
        assert_eq!(params.as_ref().mode, ProjectMode::Team);
    }
}
