//! Display implementations for domain models.
//!
//! Everything renders as markdown so the CLI can pass it to the terminal
//! renderer and the MCP server can return it verbatim.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    fallback::Outcome,
    models::{
        AssessmentQuestion, Milestone, Project, ProjectMode, ProjectPlan, Role, Task, TaskStatus,
        TeamMember,
    },
};

/// A plan rendered against the members it was generated for.
///
/// Role assignments show the member's name; ids with no matching member,
/// such as the unassigned sentinel, are shown as stored.
pub struct StaffedPlan<'a> {
    pub plan: &'a ProjectPlan,
    pub members: &'a [TeamMember],
}

fn write_role(f: &mut fmt::Formatter<'_>, role: &Role, members: &[TeamMember]) -> fmt::Result {
    let filled = if role.is_filled { " ✓ Filled" } else { "" };
    writeln!(f, "### {}{filled}", role.title)?;
    writeln!(f)?;

    if !role.description.is_empty() {
        writeln!(f, "{}", role.description)?;
        writeln!(f)?;
    }

    if let Some(id) = &role.assigned_member_id {
        let member = members
            .iter()
            .find(|m| &m.id == id)
            .map_or(id.as_str(), |m| m.name.as_str());
        write!(f, "- **Assigned**: {member}")?;
        if let Some(reason) = &role.assignment_reason {
            write!(f, " ({reason})")?;
        }
        writeln!(f)?;
        writeln!(f)?;
    }

    if let Some(blurb) = &role.recruitment_blurb {
        writeln!(f, "#### Recruitment Post")?;
        writeln!(f)?;
        writeln!(f, "> {}", blurb.replace('\n', "\n> "))?;
        writeln!(f)?;
    }

    Ok(())
}

impl fmt::Display for ProjectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_role(f, self, &[])
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.title, self.status.with_icon())?;
        writeln!(f)?;
        writeln!(f, "- **Assigned to**: {}", self.assigned_to)?;
        if let Some(reason) = &self.assignment_reason {
            writeln!(f, "- **Why**: {reason}")?;
        }
        writeln!(f, "- **ID**: {}", self.id)?;
        writeln!(f)?;

        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}**", self.title)?;
        if let Some(due) = &self.due_date {
            write!(f, " (due {due})")?;
        }
        if !self.description.is_empty() {
            write!(f, ": {}", self.description)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for StaffedPlan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.plan;
        writeln!(f, "## Summary")?;
        writeln!(f)?;
        writeln!(f, "{}", plan.summary)?;
        writeln!(f)?;

        writeln!(f, "## Roles")?;
        writeln!(f)?;
        for role in &plan.roles {
            write_role(f, role, self.members)?;
        }

        writeln!(f, "## Tasks")?;
        writeln!(f)?;
        for task in &plan.tasks {
            write!(f, "{task}")?;
        }

        if !plan.milestones.is_empty() {
            writeln!(f, "## Milestones")?;
            writeln!(f)?;
            for milestone in &plan.milestones {
                write!(f, "{milestone}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for ProjectPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let staffed = StaffedPlan {
            plan: self,
            members: &[],
        };
        write!(f, "{staffed}")
    }
}

impl fmt::Display for AssessmentQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.text)?;
        writeln!(f)?;
        for option in &self.options {
            writeln!(f, "- {option}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- Mode: {}", self.mode)?;
        if let Some(stack) = &self.tech_stack {
            writeln!(f, "- Tech Stack: {stack}")?;
        }
        if let Some(deadline) = &self.deadline {
            writeln!(f, "- Deadline: {deadline}")?;
        }
        writeln!(f, "- Members: {}", self.members.len())?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        if !self.questions.is_empty() {
            writeln!(f, "\n## Assessment")?;
            writeln!(f)?;
            for question in &self.questions {
                write!(f, "{question}")?;
            }
        }

        match &self.plan {
            Some(plan) => {
                writeln!(f)?;
                let staffed = StaffedPlan {
                    plan,
                    members: &self.members,
                };
                write!(f, "{staffed}")
            }
            None => writeln!(f, "\nNo plan generated yet."),
        }
    }
}
