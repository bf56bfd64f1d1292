//! Goal operations for the GoalStore.

use jiff::Timestamp;
use log::debug;

use super::{new_id, GoalStore};
use crate::{
    error::Result,
    models::{Goal, Step},
    params::{CreateGoal, GoalUpdate},
};

impl GoalStore {
    /// Creates a goal, along with any initial steps in the order given.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidInput` if the name or any initial step
    /// title is blank. Nothing is stored in that case.
    pub fn create_goal(&mut self, params: &CreateGoal) -> Result<Goal> {
        let params = params.normalized()?;

        let goal = Goal {
            id: new_id(),
            name: params.name,
            description: params.description,
            intensity: params.intensity,
            target_date: params.target_date,
            created_at: Timestamp::now(),
        };

        let initial_steps = params
            .initial_steps
            .into_iter()
            .zip(0u32..)
            .map(|(step, order)| Step {
                id: new_id(),
                goal_id: goal.id.clone(),
                title: step.title,
                notes: step.notes,
                completed: false,
                order,
            });

        self.steps.extend(initial_steps);
        self.goals.push(goal.clone());
        debug!("created goal {} ({})", goal.id, goal.name);

        self.persist();
        Ok(goal)
    }

    /// Applies a partial update to a goal.
    ///
    /// Returns `Ok(None)` without touching anything when no goal has `id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidInput` if the update sets a blank name.
    pub fn update_goal(&mut self, id: &str, update: &GoalUpdate) -> Result<Option<Goal>> {
        let update = update.normalized()?;

        let Some(goal) = self.goals.iter_mut().find(|goal| goal.id == id) else {
            debug!("update_goal: no goal {id}");
            return Ok(None);
        };

        if let Some(name) = update.name {
            goal.name = name;
        }
        if let Some(description) = update.description {
            goal.description = description;
        }
        if let Some(intensity) = update.intensity {
            goal.intensity = intensity;
        }
        if let Some(target_date) = update.target_date {
            goal.target_date = target_date;
        }
        let updated = goal.clone();

        self.persist();
        Ok(Some(updated))
    }

    /// Deletes a goal and every step belonging to it.
    ///
    /// Returns the removed goal, or `None` if no goal has `id`.
    pub fn delete_goal(&mut self, id: &str) -> Option<Goal> {
        let index = self.goals.iter().position(|goal| goal.id == id)?;
        let goal = self.goals.remove(index);

        let before = self.steps.len();
        self.steps.retain(|step| step.goal_id != id);
        debug!(
            "deleted goal {id} and {} of its steps",
            before - self.steps.len()
        );

        self.persist();
        Some(goal)
    }
}
