//! Project domain model.
//!
//! # Responsibility
//! - Define the project record owned by a user and referenced by tasks.
//! - Provide the soft-delete sink (`Inactive`) and creation defaults.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - `name` is non-empty after validation.
//! - Soft delete is a status overwrite; rows are never removed.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

use crate::model::user::UserId;

/// Stable identifier for a project.
pub type ProjectId = Uuid;

/// Project lifecycle state.
///
/// A flat set with no enforced transition graph; the only distinguished
/// value is `Inactive`, the soft-delete sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Pending,
    Active,
    InProgress,
    Completed,
    /// Terminal soft-delete status.
    Inactive,
}

/// Project urgency bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Validation failure for project write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    EmptyName,
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "project name must not be empty"),
        }
    }
}

impl Error for ProjectValidationError {}

/// Canonical project record.
///
/// Serialized field names match the external API wire shape (camelCase,
/// SCREAMING_SNAKE_CASE enum values).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable global ID used for linking and auditing.
    pub id: ProjectId,
    pub name: String,
    pub description: Option<String>,
    /// Optional deadline in unix epoch milliseconds.
    pub deadline: Option<i64>,
    pub priority: Priority,
    pub client_name: Option<String>,
    pub status: ProjectStatus,
    /// Owning user.
    pub user_id: UserId,
}

impl Project {
    /// Creates a new project with a generated stable ID and creation
    /// defaults (`status = InProgress`, `priority = Medium`).
    pub fn new(user_id: UserId, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            deadline: None,
            priority: Priority::Medium,
            client_name: None,
            status: ProjectStatus::InProgress,
            user_id,
        }
    }

    /// Checks boundary invariants before persistence.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProjectValidationError::EmptyName);
        }
        Ok(())
    }

    /// Returns whether this project counts as visible/active work.
    pub fn is_active(&self) -> bool {
        self.status != ProjectStatus::Inactive
    }
}

#[cfg(test)]
mod tests {
    use super::{Priority, Project, ProjectStatus, ProjectValidationError};
    use uuid::Uuid;

    #[test]
    fn new_project_uses_creation_defaults() {
        let project = Project::new(Uuid::new_v4(), "Launch");
        assert_eq!(project.status, ProjectStatus::InProgress);
        assert_eq!(project.priority, Priority::Medium);
        assert!(project.description.is_none());
        assert!(project.is_active());
    }

    #[test]
    fn validate_rejects_blank_name() {
        let mut project = Project::new(Uuid::new_v4(), "  ");
        assert_eq!(
            project.validate(),
            Err(ProjectValidationError::EmptyName)
        );
        project.name = "Launch".to_string();
        assert!(project.validate().is_ok());
    }

    #[test]
    fn status_serializes_in_wire_casing() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
    }
}
