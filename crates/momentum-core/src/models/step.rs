use serde::{Deserialize, Serialize};

/// An ordered, completable milestone belonging to exactly one goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Unique identifier, generated at creation
    pub id: String,

    /// ID of the parent goal
    pub goal_id: String,

    /// Brief title of the step
    pub title: String,

    /// Optional free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Whether the step has been completed
    pub completed: bool,

    /// Position of the step within its goal (0-indexed, dense)
    pub order: u32,
}

impl Step {
    /// Check mark used when listing steps.
    pub fn check_mark(&self) -> &'static str {
        if self.completed {
            "✓"
        } else {
            "○"
        }
    }
}
