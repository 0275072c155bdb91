//! Task model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::TaskStatus;

/// A unit of work created for a customer against one pipeline step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Task {
    /// Step key this task was created for
    pub work_type: String,

    /// Current status of the task
    pub status: TaskStatus,

    /// Name of the employee the task is assigned to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to_name: Option<String>,

    /// Role of the assignee (engineer, accountant, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to_role: Option<String>,

    /// Timestamp when the task was created (UTC)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub created_at: Option<Timestamp>,
}

impl Task {
    /// Creates an unassigned, undated task.
    pub fn new(work_type: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            work_type: work_type.into(),
            status,
            assigned_to_name: None,
            assigned_to_role: None,
            created_at: None,
        }
    }

    /// Sets the assignee name and role.
    pub fn assigned_to(mut self, name: impl Into<String>, role: impl Into<String>) -> Self {
        self.assigned_to_name = Some(name.into());
        self.assigned_to_role = Some(role.into());
        self
    }

    /// Sets the creation timestamp.
    pub fn created(mut self, at: Timestamp) -> Self {
        self.created_at = Some(at);
        self
    }
}
