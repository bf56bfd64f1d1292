use jiff::civil::Date;
use serde::Serialize;

use super::{Goal, Step};

/// A goal together with its steps, sorted ascending by `order`.
///
/// Derived from store state on demand; never persisted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GoalWithSteps {
    #[serde(flatten)]
    pub goal: Goal,
    pub steps: Vec<Step>,
}

impl GoalWithSteps {
    /// Pairs a goal with its steps, sorting them by `order`.
    pub fn new(goal: Goal, mut steps: Vec<Step>) -> Self {
        steps.sort_by_key(|step| step.order);
        Self { goal, steps }
    }

    /// Number of completed steps.
    pub fn completed_steps(&self) -> usize {
        self.steps.iter().filter(|step| step.completed).count()
    }

    /// Completion as a whole percentage, rounded half up. A goal without
    /// steps is at 0%.
    ///
    /// ```rust
    /// # use momentum_core::models::{Goal, GoalWithSteps, Intensity, Step};
    /// # use jiff::Timestamp;
    /// # let goal = Goal {
    /// #     id: "g".into(), name: "Swim".into(), description: None,
    /// #     intensity: Intensity::Light, target_date: None, created_at: Timestamp::now(),
    /// # };
    /// # let step = |order, completed| Step {
    /// #     id: format!("s{order}"), goal_id: "g".into(), title: "Lap".into(),
    /// #     notes: None, completed, order,
    /// # };
    /// let view = GoalWithSteps::new(goal, vec![step(0, true), step(1, false), step(2, false)]);
    /// assert_eq!(view.progress_percent(), 33);
    /// ```
    pub fn progress_percent(&self) -> u8 {
        let total = self.steps.len();
        if total == 0 {
            return 0;
        }
        let ratio = self.completed_steps() as f64 / total as f64;
        (ratio * 100.0).round() as u8
    }
}

/// Headline numbers across every goal.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Dashboard {
    pub total_goals: usize,
    pub total_steps: usize,
    pub completed_steps: usize,
    pub remaining_steps: usize,
    /// Earliest target date set on any goal
    pub next_target_date: Option<Date>,
}

impl Dashboard {
    /// Aggregates the derived goal views.
    pub fn from_goals(goals: &[GoalWithSteps]) -> Self {
        let total_steps: usize = goals.iter().map(|goal| goal.steps.len()).sum();
        let completed_steps: usize = goals.iter().map(GoalWithSteps::completed_steps).sum();

        Self {
            total_goals: goals.len(),
            total_steps,
            completed_steps,
            remaining_steps: total_steps.saturating_sub(completed_steps),
            next_target_date: goals.iter().filter_map(|goal| goal.goal.target_date).min(),
        }
    }
}
