//! Core library for the Momentum fitness goal tracker.
//!
//! This crate owns the goal and step tables, the operations that change
//! them, the views derived from them, and their persistence to a durable
//! key-value slot.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Collections and operation results
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use momentum_core::{models::Intensity, params::CreateGoal, GoalStoreBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let mut store = GoalStoreBuilder::new()
//!     .with_data_dir(Some(dir.path()))
//!     .build()?;
//!
//! let goal = store.create_goal(&CreateGoal::new("Run a 5k", Intensity::Moderate))?;
//! println!("{goal}");
//!
//! for goal in store.list_goals_with_steps() {
//!     println!("{}: {}%", goal.goal.name, goal.progress_percent());
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use display::{CreateResult, DeleteResult, GoalList, OperationStatus, UpdateResult};
pub use error::{Result, StoreError};
pub use models::{Dashboard, Goal, GoalWithSteps, Intensity, Step};
pub use params::{CreateGoal, GoalUpdate, ReorderStep, StepCreate};
pub use storage::{
    JsonFileStorage, MemoryStorage, Snapshot, SqliteStorage, Storage, DEFAULT_STORAGE_KEY,
};
pub use store::{GoalStore, GoalStoreBuilder, StorageBackend};
