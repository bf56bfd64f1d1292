//! Parameter structures for store operations.
//!
//! These structures are shared by every interface that drives the store
//! (the CLI today) and stay free of framework-specific derives. Interface
//! layers define their own argument types and convert into these with
//! `From`.
//!
//! ```text
//! CLI Args (clap) ──▶ Core Params ──▶ GoalStore
//! ```
//!
//! Each parameter type knows how to normalize itself: text fields are
//! trimmed, blank optional text becomes `None`, and blank required text is
//! rejected with [`StoreError::InvalidInput`].

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, StoreError},
    models::Intensity,
};

/// Parameters for creating a new goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoal {
    /// Name of the goal (required)
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Effort level
    #[serde(default)]
    pub intensity: Intensity,
    /// Optional target date
    #[serde(default)]
    pub target_date: Option<Date>,
    /// Steps created together with the goal, in order
    #[serde(default)]
    pub initial_steps: Vec<StepCreate>,
}

impl CreateGoal {
    /// Convenience constructor for a goal with just a name and intensity.
    pub fn new(name: impl Into<String>, intensity: Intensity) -> Self {
        Self {
            name: name.into(),
            intensity,
            ..Default::default()
        }
    }

    /// Returns a trimmed copy, rejecting a blank name or any blank step
    /// title.
    pub fn normalized(&self) -> Result<Self> {
        let initial_steps = self
            .initial_steps
            .iter()
            .enumerate()
            .map(|(index, step)| step.normalized_as(&format!("initial_steps[{index}].title")))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: required_text("name", &self.name)?,
            description: optional_text(self.description.as_deref()),
            intensity: self.intensity,
            target_date: self.target_date,
            initial_steps,
        })
    }
}

/// Parameters for creating a step, either standalone or as part of
/// [`CreateGoal::initial_steps`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepCreate {
    /// Title of the step (required)
    pub title: String,
    /// Optional notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl StepCreate {
    /// Convenience constructor for a step without notes.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            notes: None,
        }
    }

    /// Returns a trimmed copy, rejecting a blank title.
    pub fn normalized(&self) -> Result<Self> {
        self.normalized_as("title")
    }

    fn normalized_as(&self, field: &str) -> Result<Self> {
        Ok(Self {
            title: required_text(field, &self.title)?,
            notes: optional_text(self.notes.as_deref()),
        })
    }
}

/// Partial update of a goal's editable fields.
///
/// Outer `None` leaves a field untouched. For the clearable fields the inner
/// `None` removes the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalUpdate {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub intensity: Option<Intensity>,
    pub target_date: Option<Option<Date>>,
}

impl GoalUpdate {
    /// True when the update would not touch any field.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.intensity.is_none()
            && self.target_date.is_none()
    }

    /// Returns a trimmed copy, rejecting a blank replacement name.
    pub fn normalized(&self) -> Result<Self> {
        Ok(Self {
            name: self
                .name
                .as_deref()
                .map(|name| required_text("name", name))
                .transpose()?,
            description: self
                .description
                .as_ref()
                .map(|description| optional_text(description.as_deref())),
            intensity: self.intensity,
            target_date: self.target_date,
        })
    }

    /// Human-readable list of the fields this update touches.
    pub fn describe_changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(name) = &self.name {
            changes.push(format!("Renamed to \"{name}\""));
        }
        match &self.description {
            Some(Some(_)) => changes.push("Updated description".to_string()),
            Some(None) => changes.push("Cleared description".to_string()),
            None => {}
        }
        if let Some(intensity) = self.intensity {
            changes.push(format!("Set intensity to {}", intensity.label()));
        }
        match self.target_date {
            Some(Some(date)) => changes.push(format!("Set target date to {date}")),
            Some(None) => changes.push("Cleared target date".to_string()),
            None => {}
        }
        changes
    }
}

/// Parameters for moving a step within its goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderStep {
    /// Goal whose steps are reordered
    pub goal_id: String,
    /// Current 0-based position of the step
    pub from_index: usize,
    /// Desired 0-based position of the step
    pub to_index: usize,
}

fn required_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::invalid_input(field).with_reason("must not be blank"));
    }
    Ok(trimmed.to_string())
}

fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(String::from)
}
