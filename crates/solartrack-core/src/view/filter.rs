//! Step filters for stepper views.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::ProgressError, models::EffectiveStatus};

/// Selects which steps a stepper view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepFilter {
    /// Every step, including not applicable ones
    #[default]
    All,
    /// Steps that count toward progress
    Applicable,
    /// Applicable steps that are not completed yet
    Outstanding,
    /// Completed steps only
    Completed,
}

impl StepFilter {
    pub fn matches(&self, status: EffectiveStatus) -> bool {
        match self {
            StepFilter::All => true,
            StepFilter::Applicable => status.is_applicable(),
            StepFilter::Outstanding => status.is_applicable() && !status.is_completed(),
            StepFilter::Completed => status.is_completed(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StepFilter::All => "all",
            StepFilter::Applicable => "applicable",
            StepFilter::Outstanding => "outstanding",
            StepFilter::Completed => "completed",
        }
    }
}

impl FromStr for StepFilter {
    type Err = ProgressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(StepFilter::All),
            "applicable" => Ok(StepFilter::Applicable),
            "outstanding" => Ok(StepFilter::Outstanding),
            "completed" | "done" => Ok(StepFilter::Completed),
            _ => Err(ProgressError::invalid_input("filter")
                .with_reason(format!("Invalid step filter: {s}"))),
        }
    }
}

impl fmt::Display for StepFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
