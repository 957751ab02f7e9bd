//! Task mutation and read handlers.
//!
//! # Responsibility
//! - Parse the parent-project and task path identifiers and delegate to
//!   `TaskService`.
//!
//! # Invariants
//! - A missing/blank project path parameter is a 400 before anything
//!   else runs.
//! - An unresolvable parent project is a 404 with no side effects.

use serde::Deserialize;

use crate::api::project_handlers::parse_uuid;
use crate::api::{entity_response, internal_error, service_error_response, ApiResponse};
use crate::cache::Cache;
use crate::event::EventPublisher;
use crate::model::task::TaskStatus;
use crate::repo::project_repo::ProjectRepository;
use crate::repo::task_repo::TaskRepository;
use crate::service::task_service::{NewTask, TaskService};

/// Body payload for task creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub name: String,
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

/// Body payload for the task update path (status is the only mutable
/// field on this route).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub status: TaskStatus,
}

/// `POST /projects/{projectId}/tasks` — 201 + created task.
///
/// 400 when the project id path parameter is absent or blank; 404 when it
/// does not resolve to an existing project.
pub fn create_task<PR, TR, C, E>(
    service: &TaskService<PR, TR, C, E>,
    project_id: Option<&str>,
    request: CreateTaskRequest,
) -> ApiResponse
where
    PR: ProjectRepository,
    TR: TaskRepository,
    C: Cache,
    E: EventPublisher,
{
    let Some(raw_project_id) = project_id.map(str::trim).filter(|value| !value.is_empty())
    else {
        return ApiResponse::error(400, "Project id is required");
    };
    let Some(project_id) = parse_uuid(raw_project_id) else {
        // Malformed ids behave like unknown projects.
        return ApiResponse::error(404, "Project not found");
    };

    let input = NewTask {
        name: request.name,
        status: request.status,
    };

    match service.create_task(project_id, input) {
        Ok(task) => entity_response(201, &task, "createTask"),
        Err(err) => service_error_response("createTask", err),
    }
}

/// `PUT /projects/{projectId}/tasks/{taskId}` — 200 + updated task.
///
/// 404 when the project is unknown or the task does not belong to it.
pub fn update_task<PR, TR, C, E>(
    service: &TaskService<PR, TR, C, E>,
    project_id: &str,
    task_id: &str,
    request: UpdateTaskRequest,
) -> ApiResponse
where
    PR: ProjectRepository,
    TR: TaskRepository,
    C: Cache,
    E: EventPublisher,
{
    let Some(project_id) = parse_uuid(project_id) else {
        return ApiResponse::error(404, "Project not found");
    };
    let Some(task_id) = parse_uuid(task_id) else {
        return ApiResponse::error(404, "Task not found for the given project");
    };

    match service.update_task(project_id, task_id, request.status) {
        Ok(task) => entity_response(200, &task, "updateTask"),
        Err(err) => service_error_response("updateTask", err),
    }
}

/// `DELETE /projects/{projectId}/tasks/{taskId}` — soft delete; 200 +
/// task forced ARCHIVED.
///
/// Only the parent project is pre-checked; a missing task surfaces via
/// the generic 500 path, as in the source.
pub fn delete_task<PR, TR, C, E>(
    service: &TaskService<PR, TR, C, E>,
    project_id: &str,
    task_id: &str,
) -> ApiResponse
where
    PR: ProjectRepository,
    TR: TaskRepository,
    C: Cache,
    E: EventPublisher,
{
    let Some(project_id) = parse_uuid(project_id) else {
        return ApiResponse::error(404, "Project not found");
    };
    let Some(task_id) = parse_uuid(task_id) else {
        return internal_error("deleteTask");
    };

    match service.delete_task(project_id, task_id) {
        Ok(task) => entity_response(200, &task, "deleteTask"),
        Err(err) => service_error_response("deleteTask", err),
    }
}

/// `GET /projects/{projectId}/tasks` — 200 + tasks under the project.
pub fn list_tasks<PR, TR, C, E>(
    service: &TaskService<PR, TR, C, E>,
    project_id: &str,
) -> ApiResponse
where
    PR: ProjectRepository,
    TR: TaskRepository,
    C: Cache,
    E: EventPublisher,
{
    let Some(project_id) = parse_uuid(project_id) else {
        return ApiResponse::error(404, "Project not found");
    };

    match service.list_tasks(project_id) {
        Ok(tasks) => entity_response(200, &tasks, "listTasks"),
        Err(err) => service_error_response("listTasks", err),
    }
}
