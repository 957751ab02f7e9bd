//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate every state-changing operation through one fixed
//!   pipeline: validate, persist once, invalidate the collection cache
//!   (best effort), publish one event (best effort).
//! - Keep API layers decoupled from storage, cache, and event details.
//!
//! # Invariants
//! - Only the persistence step is fatal; cache and event failures are
//!   logged and swallowed, never surfaced to the caller.
//! - A failed validation or parent lookup performs no side effects at all.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::project::ProjectId;
use crate::model::task::TaskId;
use crate::repo::RepoError;

pub mod overview;
pub mod project_service;
pub mod task_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error surfaced by mutation services to the API layer.
#[derive(Debug)]
pub enum ServiceError {
    /// Create-project was attempted without an authenticated actor.
    Unauthorized,
    /// A task operation referenced a project that does not exist.
    ProjectNotFound(ProjectId),
    /// Update-task referenced a task absent from the given project.
    TaskNotFound(TaskId),
    /// The persistence mutation itself failed.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "missing authenticated user"),
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
