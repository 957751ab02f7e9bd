//! HTTP-style request/response envelopes.
//!
//! # Responsibility
//! - Render service results as status-code + JSON-body responses the way
//!   the hosting HTTP layer expects them.
//! - Own the mapping from `ServiceError` to status codes and the short
//!   error-body messages.
//!
//! # Invariants
//! - Creation responds 201; update/delete respond 200.
//! - Error bodies are `{"error": "<message>"}` with no further structure.
//! - Repository failures other than validation surface as a generic 500.

use log::error;
use serde::Serialize;
use serde_json::json;

use crate::repo::RepoError;
use crate::service::ServiceError;

pub mod project_handlers;
pub mod task_handlers;

pub use project_handlers::{
    create_project, delete_project, list_projects, update_project, CreateProjectRequest,
    UpdateProjectRequest,
};
pub use task_handlers::{
    create_task, delete_task, list_tasks, update_task, CreateTaskRequest, UpdateTaskRequest,
};

/// Response envelope handed to the hosting HTTP layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// JSON body: the entity on success, `{"error": ...}` on failure.
    pub body: serde_json::Value,
}

impl ApiResponse {
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "error": message.into() }),
        }
    }
}

/// Serializes an entity body, falling back to a generic 500 if the
/// serialization itself fails.
pub(crate) fn entity_response<T: Serialize>(status: u16, entity: &T, op: &str) -> ApiResponse {
    match serde_json::to_value(entity) {
        Ok(body) => ApiResponse { status, body },
        Err(err) => {
            error!("event=response_encode module=api status=error op={op} error={err}");
            internal_error(op)
        }
    }
}

pub(crate) fn internal_error(op: &str) -> ApiResponse {
    ApiResponse::error(500, format!("Internal Server Error: {op}"))
}

/// Maps a service error to the wire contract.
pub(crate) fn service_error_response(op: &str, err: ServiceError) -> ApiResponse {
    match err {
        ServiceError::Unauthorized => ApiResponse::error(401, "Unauthorized: No user id"),
        ServiceError::ProjectNotFound(_) => ApiResponse::error(404, "Project not found"),
        ServiceError::TaskNotFound(_) => {
            ApiResponse::error(404, "Task not found for the given project")
        }
        ServiceError::Repo(RepoError::Validation(message)) => ApiResponse::error(400, message),
        ServiceError::Repo(other) => {
            error!("event=mutation module=api status=error op={op} error={other}");
            internal_error(op)
        }
    }
}
