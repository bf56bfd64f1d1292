use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Training effort level of a goal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Stretching and active recovery
    Light,

    /// Balanced mix of strength and cardio
    #[default]
    Moderate,

    /// High-commitment goals
    Intense,
}

impl Intensity {
    /// Every variant, lightest first.
    pub const ALL: [Intensity; 3] = [Intensity::Light, Intensity::Moderate, Intensity::Intense];

    /// Wire representation, as stored in snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Light => "light",
            Intensity::Moderate => "moderate",
            Intensity::Intense => "intense",
        }
    }

    /// Capitalized label for display.
    ///
    /// ```rust
    /// use momentum_core::models::Intensity;
    ///
    /// assert_eq!(Intensity::Intense.label(), "Intense");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Light => "Light",
            Intensity::Moderate => "Moderate",
            Intensity::Intense => "Intense",
        }
    }

    /// One-line description of what the level is meant for.
    pub fn description(&self) -> &'static str {
        match self {
            Intensity::Light => "Perfect for stretching and active recovery goals.",
            Intensity::Moderate => "A balanced pace with a mix of strength and cardio.",
            Intensity::Intense => "High-commitment goals that demand your best energy.",
        }
    }
}

impl FromStr for Intensity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Intensity::Light),
            "moderate" => Ok(Intensity::Moderate),
            "intense" => Ok(Intensity::Intense),
            _ => Err(format!("Invalid intensity: {s}")),
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
