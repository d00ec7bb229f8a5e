//! Plan generation for the Generator.

use log::{debug, error, warn};

use super::Generator;
use crate::{
    client::{CompletionRequest, ModelClient, Transport},
    error::{GeneratorError, Result},
    fallback::{self, DEFAULT_SUMMARY, Generation, Outcome},
    models::{Project, ProjectMode, ProjectPlan, Role},
    prompt::build_plan_prompt,
    schema::{self, RawMilestone, RawPlan, RawRole, RawTask},
};

impl Generator {
    /// Generates a complete plan for the project.
    ///
    /// Never fails: transport errors, empty answers and unparseable output all
    /// end in a usable fallback plan. Use
    /// [`generate_project_plan_with_outcome`](Self::generate_project_plan_with_outcome)
    /// to learn which rung of the ladder produced it.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use crewplan_core::{GeneratorBuilder, models::{Project, ProjectMode}};
    /// # async {
    /// let generator = GeneratorBuilder::new()
    ///     .with_api_key(Some("my-key"))
    ///     .build()?;
    /// let project = Project::new("Acme", "A dog-walking app", ProjectMode::Solo);
    /// let plan = generator.generate_project_plan(&project).await;
    /// assert!(!plan.roles.is_empty());
    /// # Result::<(), crewplan_core::GeneratorError>::Ok(())
    /// # };
    /// ```
    pub async fn generate_project_plan(&self, project: &Project) -> ProjectPlan {
        self.generate_project_plan_with_outcome(project)
            .await
            .into_value()
    }

    /// Generates a plan and reports how it was produced.
    pub async fn generate_project_plan_with_outcome(
        &self,
        project: &Project,
    ) -> Generation<ProjectPlan> {
        let client = match &self.transport {
            Transport::Offline => {
                debug!("Offline: returning mock plan for project '{}'", project.id);
                return Generation::new(fallback::offline_plan(), Outcome::Offline);
            }
            Transport::Live(client) => client,
        };

        match request_plan(client.as_ref(), project).await {
            Ok(raw) => {
                let generation = normalize_plan(project, raw);
                debug!(
                    "Plan for project '{}' generated ({})",
                    project.id,
                    generation.outcome.as_str()
                );
                generation
            }
            Err(e) => {
                error!(
                    "Plan generation via {} failed for project '{}': {e}",
                    client.name(),
                    project.id
                );
                Generation::new(fallback::generic_template_plan(), Outcome::Unavailable)
            }
        }
    }
}

async fn request_plan(client: &dyn ModelClient, project: &Project) -> Result<RawPlan> {
    let request = CompletionRequest::new(build_plan_prompt(project), schema::plan_response_schema());
    let text = client.complete(&request).await?;
    if text.trim().is_empty() {
        return Err(GeneratorError::EmptyResponse);
    }
    schema::parse_plan(&text)
}

/// Turns a parsed model answer into a complete plan.
///
/// Fills empty role and task sections from the synthesis rungs, assigns fresh
/// task ids, resets fill state and enforces the per-mode assignment rules.
pub(crate) fn normalize_plan(project: &Project, raw: RawPlan) -> Generation<ProjectPlan> {
    let RawPlan {
        roles,
        tasks,
        milestones,
        summary,
    } = raw;

    let mut synthesized = false;

    let mut roles: Vec<Role> = roles.into_iter().map(RawRole::into_role).collect();
    let mut tasks: Vec<_> = tasks.into_iter().map(RawTask::into_task).collect();

    if roles.is_empty() {
        warn!("Model proposed no roles for project '{}', synthesizing", project.id);
        roles = fallback::synthesize_roles(project);
        if project.mode == ProjectMode::Solo {
            tasks = fallback::synthesize_tasks(project);
        }
        synthesized = true;
    }

    if tasks.is_empty() {
        warn!("Model proposed no tasks for project '{}', synthesizing", project.id);
        tasks = fallback::synthesize_tasks(project);
        synthesized = true;
    }

    for role in &mut roles {
        role.is_filled = false;
        match project.mode {
            ProjectMode::Solo => role.assigned_member_id = None,
            ProjectMode::Team => {
                role.recruitment_blurb = None;
                role.assigned_member_id = resolve_assignee(project, role.assigned_member_id.take());
            }
        }
    }

    let plan = ProjectPlan {
        summary: summary.unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
        roles,
        tasks,
        milestones: milestones
            .into_iter()
            .map(RawMilestone::into_milestone)
            .collect(),
    };

    let outcome = if synthesized {
        Outcome::Degraded
    } else {
        Outcome::Success
    };
    Generation::new(plan, outcome)
}

/// Maps a model-proposed assignee (member id or display name) to a member id.
fn resolve_assignee(project: &Project, proposed: Option<String>) -> Option<String> {
    let proposed = proposed?;
    if proposed == fallback::UNASSIGNED {
        return Some(proposed);
    }
    match project.find_member(&proposed) {
        Some(member) => Some(member.id.clone()),
        None => {
            debug!("Dropping unknown assignee '{proposed}' for project '{}'", project.id);
            None
        }
    }
}
