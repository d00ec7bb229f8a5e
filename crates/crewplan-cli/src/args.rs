//! Command-line argument definitions using clap
//!
//! Each command gets a clap-specific argument struct that converts into the
//! matching core parameter type, keeping clap out of `crewplan-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Generator
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use crewplan_core::{
    client::gemini::DEFAULT_MODEL,
    models::ProjectMode,
    params::{GenerateQuestions, ProjectDraft},
};

/// Turn a project idea into a staffing plan
///
/// Crewplan asks a hosted language model for screening questions and for a
/// plan of roles, tasks and milestones. Without an API key it runs offline
/// on built-in sample data, so every command always produces output.
#[derive(Parser)]
#[command(version, about, name = "crewplan")]
pub struct Args {
    /// API key for the model service. Offline mode when absent
    #[arg(long, global = true, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model used for generation
    #[arg(long, global = true, env = "CREWPLAN_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Override the model service base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate screening questions for people joining a project
    #[command(alias = "q")]
    Questions(QuestionsArgs),
    /// Manage project files
    #[command(alias = "p")]
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Generate a staffing plan for a project file
    Plan(PlanArgs),
    /// Start the MCP server
    Serve,
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Create a project file with its assessment questions
    #[command(alias = "n")]
    New(NewProjectArgs),
    /// Add a team member who answered the assessment
    #[command(alias = "j")]
    Join(JoinProjectArgs),
    /// Mark a planned role as filled, or vacant again
    FillRole(FillRoleArgs),
}

/// Workflow mode as accepted on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Members have joined; the plan assigns work to them
    Team,
    /// A founder recruits; roles stay vacant
    Solo,
}

impl From<ModeArg> for ProjectMode {
    fn from(val: ModeArg) -> Self {
        match val {
            ModeArg::Team => ProjectMode::Team,
            ModeArg::Solo => ProjectMode::Solo,
        }
    }
}

/// Generate assessment questions
#[derive(ClapArgs)]
pub struct QuestionsArgs {
    /// Project name
    #[arg(long)]
    pub name: String,
    /// Free-text description of the project idea
    #[arg(short, long, default_value = "")]
    pub description: String,
    /// Workflow mode
    #[arg(short, long, value_enum)]
    pub mode: ModeArg,
    /// Print JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

impl From<QuestionsArgs> for GenerateQuestions {
    fn from(val: QuestionsArgs) -> Self {
        GenerateQuestions {
            name: val.name,
            description: val.description,
            mode: val.mode.into(),
        }
    }
}

/// Create a new project
#[derive(ClapArgs)]
pub struct NewProjectArgs {
    /// Project name
    #[arg(long)]
    pub name: String,
    /// Free-text description of the project idea
    #[arg(short, long, default_value = "")]
    pub description: String,
    /// Workflow mode
    #[arg(short, long, value_enum)]
    pub mode: ModeArg,
    /// Target deadline, free text
    #[arg(long)]
    pub deadline: Option<String>,
    /// Preferred tech stack, free text
    #[arg(long)]
    pub tech_stack: Option<String>,
    /// Write the project JSON to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl From<NewProjectArgs> for ProjectDraft {
    fn from(val: NewProjectArgs) -> Self {
        ProjectDraft {
            name: val.name,
            description: val.description,
            mode: val.mode.into(),
            deadline: val.deadline,
            tech_stack: val.tech_stack,
            members: Vec::new(),
        }
    }
}

/// Join a project as a team member
#[derive(ClapArgs)]
pub struct JoinProjectArgs {
    /// Path to a project JSON file, updated in place
    pub project_file: PathBuf,
    /// Member name
    #[arg(long)]
    pub name: String,
    /// Comma-separated skills, free text
    #[arg(long)]
    pub skills: String,
    /// Chosen option for each assessment question, in order
    #[arg(short, long = "answer")]
    pub answers: Vec<String>,
}

/// Toggle whether a planned role is filled
#[derive(ClapArgs)]
pub struct FillRoleArgs {
    /// Path to a project JSON file, updated in place
    pub project_file: PathBuf,
    /// Role position as listed in the plan, starting at 1
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub role: u32,
}

/// Generate a plan for an existing project file
#[derive(ClapArgs)]
pub struct PlanArgs {
    /// Path to a project JSON file
    pub project_file: PathBuf,
    /// Print JSON instead of markdown
    #[arg(long)]
    pub json: bool,
    /// Store the project back with the plan attached
    #[arg(short, long)]
    pub write: bool,
}
