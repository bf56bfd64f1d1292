//! Display formatting for goals, steps and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! while newtype wrappers cover collections and the outcome of store
//! operations. Everything renders as markdown so the CLI can hand it to its
//! terminal renderer unchanged.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │   Wrappers &    │    │    Markdown     │
//! │ (Goal, Step, …) │───▶│  Result Types   │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers (GoalList)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use momentum_core::{
//!     display::{CreateResult, OperationStatus, UpdateResult},
//!     models::{Goal, Intensity},
//! };
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
//! let output = CreateResult::new(goal.clone()).to_string();
//! assert!(output.contains("Created goal with ID: g1"));
//!
//! let changes = vec!["Set intensity to Intense".to_string()];
//! let output = UpdateResult::with_changes(goal, changes).to_string();
//! assert!(output.contains("Changes made:"));
//!
//! let status = OperationStatus::failure("Goal not found".to_string());
//! assert!(status.to_string().starts_with("Error:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::GoalList;
pub use datetime::{LocalDateTime, TargetDate};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
