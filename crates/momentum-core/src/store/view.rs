//! Derived read views for the GoalStore.

use super::GoalStore;
use crate::models::{Dashboard, Goal, GoalWithSteps, Step};

impl GoalStore {
    /// Every goal with its steps, most recently created goal first.
    ///
    /// Goals created at the same instant keep their insertion order. The
    /// result is recomputed from the tables on every call.
    pub fn list_goals_with_steps(&self) -> Vec<GoalWithSteps> {
        let mut goals: Vec<GoalWithSteps> = self
            .goals
            .iter()
            .map(|goal| self.enrich(goal))
            .collect();
        goals.sort_by(|a, b| b.goal.created_at.cmp(&a.goal.created_at));
        goals
    }

    /// A single goal with its steps.
    pub fn goal_with_steps(&self, id: &str) -> Option<GoalWithSteps> {
        self.goals
            .iter()
            .find(|goal| goal.id == id)
            .map(|goal| self.enrich(goal))
    }

    /// Steps of one goal, sorted by order.
    pub fn steps_for_goal(&self, goal_id: &str) -> Vec<Step> {
        let mut steps: Vec<Step> = self
            .steps
            .iter()
            .filter(|step| step.goal_id == goal_id)
            .cloned()
            .collect();
        steps.sort_by_key(|step| step.order);
        steps
    }

    /// Headline statistics across all goals.
    pub fn dashboard(&self) -> Dashboard {
        Dashboard::from_goals(&self.list_goals_with_steps())
    }

    fn enrich(&self, goal: &Goal) -> GoalWithSteps {
        GoalWithSteps::new(goal.clone(), self.steps_for_goal(&goal.id))
    }
}
