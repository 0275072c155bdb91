//! Status enumerations for tasks and derived step states.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProgressError;

/// Status recorded on a task by the operations team.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Task is created but nobody has started on it
    Pending,

    /// Task is being worked on
    #[serde(alias = "in_progress")]
    InProgress,

    /// Task has been completed
    Completed,
}

impl FromStr for TaskStatus {
    type Err = ProgressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "inprogress" | "in_progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            _ => Err(ProgressError::invalid_input("status")
                .with_reason(format!("Invalid task status: {s}"))),
        }
    }
}

impl TaskStatus {
    /// Wire representation used by the remote API.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "inprogress",
            TaskStatus::Completed => "completed",
        }
    }
}

/// Derived state of one pipeline step for one customer.
///
/// Never stored anywhere: it is recomputed from the customer's attributes and
/// task list every time a view asks for it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EffectiveStatus {
    /// A task exists and is completed
    Completed,

    /// A task exists and is being worked on
    #[serde(rename = "inprogress")]
    InProgress,

    /// A task exists but has not been started
    Pending,

    /// No task exists yet and the step is required for this customer
    NotStarted,

    /// No task exists and a conditional rule excludes the step
    NotApplicable,
}

impl From<TaskStatus> for EffectiveStatus {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Pending => EffectiveStatus::Pending,
            TaskStatus::InProgress => EffectiveStatus::InProgress,
            TaskStatus::Completed => EffectiveStatus::Completed,
        }
    }
}

impl EffectiveStatus {
    /// Wire representation, matching the serde names.
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectiveStatus::Completed => "completed",
            EffectiveStatus::InProgress => "inprogress",
            EffectiveStatus::Pending => "pending",
            EffectiveStatus::NotStarted => "not_started",
            EffectiveStatus::NotApplicable => "not_applicable",
        }
    }

    /// Human-readable badge text.
    pub fn label(&self) -> &'static str {
        match self {
            EffectiveStatus::Completed => "Completed",
            EffectiveStatus::InProgress => "In Progress",
            EffectiveStatus::Pending => "Pending",
            EffectiveStatus::NotStarted => "Not Started",
            EffectiveStatus::NotApplicable => "Not Applicable",
        }
    }

    /// Badge text prefixed with a status icon.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solartrack_core::models::EffectiveStatus;
    ///
    /// assert_eq!(EffectiveStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(EffectiveStatus::NotApplicable.with_icon(), "– Not Applicable");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            EffectiveStatus::Completed => "✓ Completed",
            EffectiveStatus::InProgress => "➤ In Progress",
            EffectiveStatus::Pending => "◔ Pending",
            EffectiveStatus::NotStarted => "○ Not Started",
            EffectiveStatus::NotApplicable => "– Not Applicable",
        }
    }

    /// Whether the step counts toward progress percentages.
    pub fn is_applicable(&self) -> bool {
        !matches!(self, EffectiveStatus::NotApplicable)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, EffectiveStatus::Completed)
    }
}
