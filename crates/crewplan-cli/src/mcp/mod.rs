//! MCP server implementation for Crewplan
//!
//! Exposes question and plan generation as tools over the Model Context
//! Protocol, so an assistant can draft staffing plans on a user's behalf.

use std::sync::Arc;

use anyhow::Result;
use crewplan_core::Generator;
use log::{debug, error, info};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use tokio::signal::unix::{SignalKind, signal};

pub mod errors;
pub mod handlers;

pub use handlers::{GenerateQuestions, McpResult, ProjectDraft};

/// MCP server for Crewplan
#[derive(Clone)]
pub struct CrewplanMcpServer {
    generator: Arc<Generator>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CrewplanMcpServer {
    pub fn new(generator: Generator) -> Self {
        Self {
            generator: Arc::new(generator),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "generate_questions",
        description = "Generate up to five multiple-choice screening questions for people joining a project. Provide the project name, a description of the idea, and the mode (TEAM when members are joining an existing team, SOLO when a founder is recruiting). Returns the questions as markdown; an empty list means no assessment is available."
    )]
    async fn generate_questions(&self, params: Parameters<GenerateQuestions>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.generator.clone());
        handlers.generate_questions(params).await
    }

    #[tool(
        name = "generate_plan",
        description = "Generate a staffing plan (summary, roles, tasks, milestones) for a project. Provide name, description, mode (TEAM or SOLO) and optionally deadline, techStack and the members who joined (id, name, skills, answers). In TEAM mode roles are assigned to members by id; in SOLO mode roles stay vacant and carry recruitment blurbs. Always returns a usable plan, falling back to templates when the model is unavailable."
    )]
    async fn generate_plan(&self, params: Parameters<ProjectDraft>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.generator.clone());
        handlers.generate_plan(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for CrewplanMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "crewplan".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Crewplan turns a project idea into a staffing plan.

## Modes
- **TEAM**: members have already joined. Roles and tasks are assigned to them; role assignments use member ids.
- **SOLO**: a founder is recruiting. Roles stay vacant and each carries a short recruitment blurb.

## Workflow
1. Call `generate_questions` to get screening questions for people joining the project.
2. Collect members with their skills and answers.
3. Call `generate_plan` with the project and its members.

Results state whether they came from the model, were partly filled in from templates, or are a template because the model was unavailable."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: CrewplanMcpServer) -> Result<()> {
    use rmcp::{ServiceExt, transport::stdio};

    info!("Starting Crewplan MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
