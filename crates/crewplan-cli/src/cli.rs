//! Command handlers for the CLI

use std::{fs, path::Path};

use anyhow::{Context, Result};
use crewplan_core::{
    Generator,
    display::{GenerationResult, OperationStatus},
    models::Project,
    params::{GenerateQuestions, ProjectDraft},
};
use log::{debug, warn};

use crate::{
    args::{
        FillRoleArgs, JoinProjectArgs, NewProjectArgs, PlanArgs, ProjectCommands, QuestionsArgs,
    },
    renderer::TerminalRenderer,
};

pub struct Cli {
    generator: Generator,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(generator: Generator, renderer: TerminalRenderer) -> Self {
        Self {
            generator,
            renderer,
        }
    }

    pub async fn handle_project_command(&self, command: ProjectCommands) -> Result<()> {
        match command {
            ProjectCommands::New(args) => self.new_project(args).await,
            ProjectCommands::Join(args) => self.join_project(args),
            ProjectCommands::FillRole(args) => self.fill_role(args),
        }
    }

    pub async fn questions(&self, args: QuestionsArgs) -> Result<()> {
        let json = args.json;
        let params: GenerateQuestions = args.into();

        let generation = self
            .generator
            .generate_assessment_questions_with_outcome(
                &params.description,
                &params.name,
                params.mode,
            )
            .await;
        debug!("questions outcome: {}", generation.outcome);

        if json {
            let output = serde_json::to_string_pretty(&generation.value)
                .context("Failed to serialize questions")?;
            println!("{output}");
            return Ok(());
        }

        self.renderer
            .render(&GenerationResult::new(&generation, &params.name).to_string())
    }

    pub async fn new_project(&self, args: NewProjectArgs) -> Result<()> {
        let output = args.output.clone();
        let draft: ProjectDraft = args.into();
        let mut project = draft.into_project().context("Invalid project")?;

        let generation = self
            .generator
            .generate_assessment_questions_with_outcome(
                &project.description,
                &project.name,
                project.mode,
            )
            .await;
        if generation.value.is_empty() {
            warn!(
                "No assessment questions for project '{}' ({})",
                project.name, generation.outcome
            );
            eprintln!("Warning: no assessment questions could be generated.");
        }
        project.questions = generation.into_value();

        let json = project.to_json().context("Failed to serialize project")?;
        match output {
            Some(path) => {
                write_file(&path, &json)?;
                let status = OperationStatus::success(format!(
                    "Created project '{}' in {}",
                    project.name,
                    path.display()
                ));
                self.renderer.render(&status.to_string())
            }
            None => {
                println!("{json}");
                Ok(())
            }
        }
    }

    pub fn join_project(&self, args: JoinProjectArgs) -> Result<()> {
        let mut project = read_project(&args.project_file)?;
        let member = project
            .add_member(&args.name, &args.skills, &args.answers)
            .context("Invalid member")?;
        debug!("member {} joined project '{}'", member.id, project.name);

        let json = project.to_json().context("Failed to serialize project")?;
        write_file(&args.project_file, &json)?;

        let status = OperationStatus::success(format!(
            "Added member '{}' (id {}) to project '{}'",
            member.name, member.id, project.name
        ));
        self.renderer.render(&status.to_string())
    }

    pub fn fill_role(&self, args: FillRoleArgs) -> Result<()> {
        let mut project = read_project(&args.project_file)?;
        let index = args.role as usize - 1;
        let filled = project.toggle_role(index).context("Cannot update role")?;

        let title = project
            .plan
            .as_ref()
            .and_then(|plan| plan.roles.get(index))
            .map(|role| role.title.clone())
            .unwrap_or_default();
        let json = project.to_json().context("Failed to serialize project")?;
        write_file(&args.project_file, &json)?;

        let state = if filled { "filled" } else { "vacant" };
        let status = OperationStatus::success(format!("Role '{title}' is now {state}"));
        self.renderer.render(&status.to_string())
    }

    pub async fn plan(&self, args: PlanArgs) -> Result<()> {
        let project = read_project(&args.project_file)?;

        let generation = self
            .generator
            .generate_project_plan_with_outcome(&project)
            .await;
        debug!("plan outcome: {}", generation.outcome);

        if args.json {
            let output = serde_json::to_string_pretty(&generation.value)
                .context("Failed to serialize plan")?;
            println!("{output}");
        } else {
            let result = GenerationResult::new(&generation, &project.name)
                .with_members(&project.members);
            self.renderer.render(&result.to_string())?;
        }

        if args.write {
            let project = project.with_plan(generation.into_value());
            let json = project.to_json().context("Failed to serialize project")?;
            write_file(&args.project_file, &json)?;

            let status = OperationStatus::success(format!(
                "Saved plan to {}",
                args.project_file.display()
            ));
            if args.json {
                eprint!("{status}");
            } else {
                self.renderer.render(&status.to_string())?;
            }
        }

        Ok(())
    }
}

fn read_project(path: &Path) -> Result<Project> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read project file {}", path.display()))?;
    Project::from_json(&text)
        .with_context(|| format!("Failed to parse project file {}", path.display()))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}
