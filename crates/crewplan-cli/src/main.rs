//! Crewplan CLI Application
//!
//! Command-line interface and MCP server for the crewplan staffing plan
//! generator.

mod args;
mod cli;
mod mcp;
mod renderer;

use Commands::*;
use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use crewplan_core::GeneratorBuilder;
use log::info;
use mcp::{CrewplanMcpServer, run_stdio_server};
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        api_key,
        model,
        base_url,
        no_color,
        command,
    } = Args::parse();

    let generator = GeneratorBuilder::new()
        .with_api_key(api_key)
        .with_model(model)
        .with_base_url(base_url)
        .build()
        .context("Failed to initialize generator")?;

    if generator.is_offline() {
        info!("No API key configured, running offline");
    }

    let renderer = TerminalRenderer::new(!no_color);

    match command {
        Questions(args) => Cli::new(generator, renderer).questions(args).await,
        Project { command } => {
            Cli::new(generator, renderer)
                .handle_project_command(command)
                .await
        }
        Plan(args) => Cli::new(generator, renderer).plan(args).await,
        Serve => {
            info!("Starting Crewplan MCP server");
            run_stdio_server(CrewplanMcpServer::new(generator))
                .await
                .context("MCP server failed")
        }
    }
}
