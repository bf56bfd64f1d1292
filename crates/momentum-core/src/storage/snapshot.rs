use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, StoreError},
    models::{Goal, Step},
};

/// The persisted document: both tables and nothing derived.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snapshot {
    pub goals: Vec<Goal>,
    pub steps: Vec<Step>,
}

impl Snapshot {
    /// Parses and validates a persisted snapshot.
    ///
    /// Fails with [`StoreError::Serialization`] when the JSON is malformed or
    /// does not have the expected shape, and with
    /// [`StoreError::CorruptSnapshot`] when it parses but breaks integrity.
    pub fn from_json(raw: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(raw)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Serializes the snapshot for storage.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Checks that ids are present and unique, every step points at an
    /// existing goal, and each goal's step orders are exactly `0..n`.
    pub fn validate(&self) -> Result<()> {
        let mut goal_ids = HashSet::with_capacity(self.goals.len());
        for goal in &self.goals {
            if goal.id.is_empty() {
                return Err(StoreError::corrupt("goal with empty id"));
            }
            if !goal_ids.insert(goal.id.as_str()) {
                return Err(StoreError::corrupt(format!("duplicate goal id {}", goal.id)));
            }
        }

        let mut step_ids = HashSet::with_capacity(self.steps.len());
        let mut orders: BTreeMap<&str, Vec<u32>> = BTreeMap::new();
        for step in &self.steps {
            if step.id.is_empty() {
                return Err(StoreError::corrupt("step with empty id"));
            }
            if !step_ids.insert(step.id.as_str()) {
                return Err(StoreError::corrupt(format!("duplicate step id {}", step.id)));
            }
            if !goal_ids.contains(step.goal_id.as_str()) {
                return Err(StoreError::corrupt(format!(
                    "step {} references missing goal {}",
                    step.id, step.goal_id
                )));
            }
            orders.entry(step.goal_id.as_str()).or_default().push(step.order);
        }

        for (goal_id, mut goal_orders) in orders {
            goal_orders.sort_unstable();
            let dense = goal_orders
                .iter()
                .enumerate()
                .all(|(index, order)| *order as usize == index);
            if !dense {
                return Err(StoreError::corrupt(format!(
                    "step orders for goal {goal_id} are not contiguous from 0"
                )));
            }
        }

        Ok(())
    }
}
