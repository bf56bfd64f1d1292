//! Step operations for the GoalStore.

use log::debug;

use super::{new_id, GoalStore};
use crate::{
    error::{Result, StoreError},
    models::Step,
    params::StepCreate,
};

impl GoalStore {
    /// Appends a step to the end of a goal's step list.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidInput` if the title is blank and
    /// `StoreError::GoalNotFound` if no goal has `goal_id`.
    pub fn add_step(&mut self, goal_id: &str, params: &StepCreate) -> Result<Step> {
        let params = params.normalized()?;
        if !self.goal_exists(goal_id) {
            return Err(StoreError::goal_not_found(goal_id));
        }

        let order = self.step_count(goal_id);
        let step = Step {
            id: new_id(),
            goal_id: goal_id.to_string(),
            title: params.title,
            notes: params.notes,
            completed: false,
            order,
        };

        self.steps.push(step.clone());
        debug!("added step {} to goal {goal_id} at {order}", step.id);

        self.persist();
        Ok(step)
    }

    /// Flips a step's completion flag.
    ///
    /// Returns the updated step, or `None` if no step has `id`.
    pub fn toggle_step(&mut self, id: &str) -> Option<Step> {
        let step = self.steps.iter_mut().find(|step| step.id == id)?;
        step.completed = !step.completed;
        let updated = step.clone();

        self.persist();
        Some(updated)
    }

    /// Removes a step and closes the gap it leaves in its goal's order.
    ///
    /// Returns the removed step, or `None` if no step has `id`.
    pub fn remove_step(&mut self, id: &str) -> Option<Step> {
        let index = self.steps.iter().position(|step| step.id == id)?;
        let removed = self.steps.remove(index);

        for step in self
            .steps
            .iter_mut()
            .filter(|step| step.goal_id == removed.goal_id && step.order > removed.order)
        {
            step.order -= 1;
        }
        debug!("removed step {id} from goal {}", removed.goal_id);

        self.persist();
        Some(removed)
    }

    /// Moves the step at position `from_index` of a goal's list to
    /// `to_index`, shifting the steps in between, and renumbers the list.
    ///
    /// Returns the goal's steps in their new order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::GoalNotFound` if no goal has `goal_id` and
    /// `StoreError::InvalidInput` if either index is not a position in the
    /// goal's list. State is unchanged on error.
    pub fn reorder_step(
        &mut self,
        goal_id: &str,
        from_index: usize,
        to_index: usize,
    ) -> Result<Vec<Step>> {
        if !self.goal_exists(goal_id) {
            return Err(StoreError::goal_not_found(goal_id));
        }

        let mut ordered_ids: Vec<String> = self
            .steps_for_goal(goal_id)
            .into_iter()
            .map(|step| step.id)
            .collect();
        let len = ordered_ids.len();

        for (field, index) in [("from_index", from_index), ("to_index", to_index)] {
            if index >= len {
                return Err(StoreError::invalid_input(field).with_reason(format!(
                    "position {index} is out of range; goal has {len} steps"
                )));
            }
        }

        if from_index != to_index {
            let moved = ordered_ids.remove(from_index);
            ordered_ids.insert(to_index, moved);

            for step in self.steps.iter_mut().filter(|step| step.goal_id == goal_id) {
                if let Some(position) = ordered_ids.iter().position(|id| *id == step.id) {
                    step.order = position as u32;
                }
            }
            debug!("moved step in goal {goal_id} from {from_index} to {to_index}");

            self.persist();
        }

        Ok(self.steps_for_goal(goal_id))
    }

    fn step_count(&self, goal_id: &str) -> u32 {
        self.steps
            .iter()
            .filter(|step| step.goal_id == goal_id)
            .count() as u32
    }
}
