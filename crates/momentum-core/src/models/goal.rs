use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::Intensity;

/// A user-defined fitness objective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Unique identifier, generated at creation
    pub id: String,

    /// Display name of the goal
    pub name: String,

    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Effort level
    pub intensity: Intensity,

    /// Optional calendar date the goal should be reached by
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<Date>,

    /// Timestamp when the goal was created (UTC), used for ordering only
    pub created_at: Timestamp,
}
