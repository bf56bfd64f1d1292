//! Data models for goals and steps.
//!
//! [`Goal`] and [`Step`] are the two persisted tables. [`GoalWithSteps`] and
//! [`Dashboard`] are derived views computed from them on demand and never
//! written to storage.
//!
//! Field names serialize in camelCase (`goalId`, `targetDate`, `createdAt`)
//! and absent optional fields are omitted, so a persisted snapshot looks
//! like:
//!
//! ```json
//! {
//!   "goals": [{"id": "…", "name": "Run a 5k", "intensity": "moderate",
//!              "createdAt": "2026-03-01T08:00:00Z"}],
//!   "steps": [{"id": "…", "goalId": "…", "title": "Walk 1km",
//!              "completed": false, "order": 0}]
//! }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use momentum_core::models::{Goal, GoalWithSteps, Intensity};
//! use jiff::Timestamp;
//!
//! let goal = Goal {
//!     id: "g1".to_string(),
//!     name: "Run a 5k".to_string(),
//!     description: None,
//!     intensity: Intensity::Moderate,
//!     target_date: None,
//!     created_at: Timestamp::now(),
//! };
//!
//! let view = GoalWithSteps::new(goal, vec![]);
//! assert_eq!(view.progress_percent(), 0);
//! ```

mod goal;
mod intensity;
mod step;
mod view;

#[cfg(test)]
mod tests;

pub use goal::Goal;
pub use intensity::Intensity;
pub use step::Step;
pub use view::{Dashboard, GoalWithSteps};
