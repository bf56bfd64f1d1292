//! Collection wrapper types for displaying groups of goals.

use std::fmt;

use crate::models::GoalWithSteps;

/// Newtype wrapper for displaying the goal list.
///
/// An empty list renders the onboarding text instead of nothing.
///
/// # Examples
///
/// ```rust
/// use momentum_core::display::GoalList;
///
/// let output = GoalList(vec![]).to_string();
/// assert!(output.contains("No goals yet"));
/// ```
pub struct GoalList(pub Vec<GoalWithSteps>);

impl GoalList {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of goals in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the goals.
    pub fn iter(&self) -> std::slice::Iter<'_, GoalWithSteps> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a GoalList {
    type Item = &'a GoalWithSteps;
    type IntoIter = std::slice::Iter<'a, GoalWithSteps>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for GoalList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No goals yet.")?;
            writeln!(f)?;
            return writeln!(
                f,
                "Create a fitness goal, break it down into actionable steps, \
                 and Momentum will help you stay focused every day."
            );
        }

        for (index, goal) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{goal}")?;
        }
        Ok(())
    }
}
