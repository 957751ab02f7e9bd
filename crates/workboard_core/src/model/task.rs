//! Task domain model.
//!
//! # Responsibility
//! - Define the task record belonging to exactly one project.
//! - Provide the soft-delete sink (`Archived`) and creation defaults.
//!
//! # Invariants
//! - `project_id` must resolve to an existing project at create/update
//!   time; repositories and services enforce this at their boundaries.
//! - `name` is non-empty after validation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

use crate::model::project::ProjectId;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// Task lifecycle state.
///
/// Flat set, no transition graph; `Archived` is the soft-delete sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Pending,
    Active,
    InProgress,
    Completed,
    /// Terminal soft-delete status.
    Archived,
}

/// Validation failure for task write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyName,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "task name must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub status: TaskStatus,
    /// Owning project reference.
    pub project_id: ProjectId,
}

impl Task {
    /// Creates a new task under the given project with a generated stable
    /// ID and default status `Pending`.
    pub fn new(project_id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            status: TaskStatus::Pending,
            project_id,
        }
    }

    /// Checks boundary invariants before persistence.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.name.trim().is_empty() {
            return Err(TaskValidationError::EmptyName);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskStatus, TaskValidationError};
    use uuid::Uuid;

    #[test]
    fn new_task_defaults_to_pending() {
        let task = Task::new(Uuid::new_v4(), "Spec doc");
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn validate_rejects_blank_name() {
        let task = Task::new(Uuid::new_v4(), "");
        assert_eq!(task.validate(), Err(TaskValidationError::EmptyName));
    }
}
