//! Display implementations for domain models.
//!
//! All output is markdown. A goal renders as a card: heading, metadata list,
//! description, then its steps as a checklist.

use std::fmt;

use super::datetime::{LocalDateTime, TargetDate};
use crate::models::{Dashboard, Goal, GoalWithSteps, Step};

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.name)?;
        writeln!(f)?;
        self.fmt_metadata(f)?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        Ok(())
    }
}

impl Goal {
    fn fmt_metadata(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **ID**: {}", self.id)?;
        writeln!(f, "- **Intensity**: {}", self.intensity.label())?;
        if let Some(target) = &self.target_date {
            writeln!(f, "- **Target**: {}", TargetDate(target))?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}. {} {} (ID: {})",
            self.order + 1,
            self.check_mark(),
            self.title,
            self.id
        )?;

        if let Some(notes) = &self.notes {
            writeln!(f, "   {notes}")?;
        }

        Ok(())
    }
}

impl fmt::Display for GoalWithSteps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let goal = &self.goal;
        writeln!(f, "## {}", goal.name)?;
        writeln!(f)?;
        goal.fmt_metadata(f)?;
        writeln!(
            f,
            "- **Progress**: {}% ({}/{} steps)",
            self.progress_percent(),
            self.completed_steps(),
            self.steps.len()
        )?;

        if let Some(desc) = &goal.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        writeln!(f)?;
        if self.steps.is_empty() {
            writeln!(
                f,
                "No steps yet. Start by adding your first milestone below."
            )?;
        } else {
            for step in &self.steps {
                write!(f, "{step}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Momentum")?;
        writeln!(f)?;
        writeln!(f, "- **Active goals**: {}", self.total_goals)?;
        writeln!(f, "- **Steps remaining**: {}", self.remaining_steps)?;
        writeln!(
            f,
            "- **Completed**: {}/{}",
            self.completed_steps, self.total_steps
        )?;

        if let Some(next) = &self.next_target_date {
            writeln!(f)?;
            writeln!(f, "Your next target is {}.", TargetDate(next))?;
        }

        Ok(())
    }
}
