//! The goal store: owner of the goal and step tables.
//!
//! [`GoalStore`] holds both tables in memory, applies every mutation by
//! validating everything first and only then editing the tables, and writes
//! the new
//! [`Snapshot`] to its [`Storage`] slot after each commit. Reads are pure
//! projections over the current tables.
//!
//! # Usage
//!
//! ```rust
//! use momentum_core::{
//!     models::Intensity,
//!     params::{CreateGoal, StepCreate},
//!     GoalStoreBuilder,
//! };
//!
//! # fn example() -> momentum_core::Result<()> {
//! let mut store = GoalStoreBuilder::new().in_memory().build()?;
//!
//! let goal = store.create_goal(&CreateGoal::new("Run a 5k", Intensity::Moderate))?;
//! let walk = store.add_step(&goal.id, &StepCreate::titled("Walk 1km"))?;
//! store.add_step(&goal.id, &StepCreate::titled("Walk 2km"))?;
//! store.toggle_step(&walk.id);
//!
//! let goals = store.list_goals_with_steps();
//! assert_eq!(goals[0].steps.len(), 2);
//! assert_eq!(goals[0].progress_percent(), 50);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Persistence
//!
//! A failed write never fails the mutation that triggered it. The failure is
//! logged, the store is marked dirty, and the next write (from the next
//! mutation or an explicit [`GoalStore::flush`]) carries the newest state.

use log::{debug, warn};

use crate::{
    error::Result,
    models::{Goal, Step},
    storage::{Snapshot, Storage},
};

pub mod builder;
mod goal_ops;
mod step_ops;
mod view;


pub use builder::{GoalStoreBuilder, StorageBackend};

/// In-memory goal and step tables bound to a durable storage slot.
pub struct GoalStore {
    goals: Vec<Goal>,
    steps: Vec<Step>,
    storage: Box<dyn Storage + Send>,
    key: String,
    dirty: bool,
}

impl GoalStore {
    /// Loads the store from `key` in `storage`.
    ///
    /// An absent slot starts empty. An unreadable, malformed or inconsistent
    /// slot is logged and also starts empty; initialization never fails.
    pub fn init(storage: Box<dyn Storage + Send>, key: impl Into<String>) -> Self {
        let key = key.into();
        let Snapshot { goals, steps } = load_snapshot(storage.as_ref(), &key);
        debug!(
            "loaded {} goals and {} steps from slot '{key}'",
            goals.len(),
            steps.len()
        );

        Self {
            goals,
            steps,
            storage,
            key,
            dirty: false,
        }
    }

    /// All goals, in insertion order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// All steps, in insertion order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Copy of the persisted tables.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            goals: self.goals.clone(),
            steps: self.steps.clone(),
        }
    }

    /// Slot key the store persists under.
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Whether the latest state has failed to reach storage.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Writes the current state now, returning any storage error.
    pub fn flush(&mut self) -> Result<()> {
        let json = self.snapshot().to_json()?;
        match self.storage.write(&self.key, &json) {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(e) => {
                self.dirty = true;
                Err(e)
            }
        }
    }

    /// Persists after a committed mutation. Failures are logged, not
    /// returned.
    pub(crate) fn persist(&mut self) {
        if let Err(e) = self.flush() {
            warn!("failed to persist slot '{}': {e}; continuing in memory", self.key);
        }
    }

    pub(crate) fn goal_exists(&self, id: &str) -> bool {
        self.goals.iter().any(|goal| goal.id == id)
    }
}

fn load_snapshot(storage: &(dyn Storage + Send), key: &str) -> Snapshot {
    match storage.read(key) {
        Ok(None) => {
            debug!("slot '{key}' is empty; starting fresh");
            Snapshot::default()
        }
        Ok(Some(raw)) => Snapshot::from_json(&raw).unwrap_or_else(|e| {
            warn!("ignoring unusable slot '{key}': {e}");
            Snapshot::default()
        }),
        Err(e) => {
            warn!("failed to read slot '{key}': {e}; starting fresh");
            Snapshot::default()
        }
    }
}

/// Opaque identifier for a new goal or step.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
