//! Project mutation and read handlers.
//!
//! # Responsibility
//! - Parse path identifiers and body fields (deadline dates in
//!   particular) and delegate to `ProjectService`.
//!
//! # Invariants
//! - Malformed or unknown project identifiers on update/delete surface
//!   through the generic 500 path, matching the source behavior of a
//!   persistence-layer throw.

use serde::Deserialize;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

use crate::api::{entity_response, internal_error, service_error_response, ApiResponse};
use crate::cache::Cache;
use crate::event::EventPublisher;
use crate::model::project::{Priority, ProjectStatus};
use crate::model::user::UserId;
use crate::repo::project_repo::{ProjectChanges, ProjectRepository};
use crate::service::project_service::{NewProject, ProjectService};

/// Body payload for project creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// RFC 3339 timestamp or plain `YYYY-MM-DD` date.
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
}

/// Body payload for the partial update path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
}

/// `POST /projects` — 201 + created project, 401 without an actor.
pub fn create_project<R, C, E>(
    service: &ProjectService<R, C, E>,
    actor: Option<UserId>,
    request: CreateProjectRequest,
) -> ApiResponse
where
    R: ProjectRepository,
    C: Cache,
    E: EventPublisher,
{
    let deadline = match parse_optional_deadline(request.deadline.as_deref()) {
        Ok(deadline) => deadline,
        Err(response) => return response,
    };

    let input = NewProject {
        name: request.name,
        description: request.description,
        deadline,
        priority: request.priority,
        client_name: request.client_name,
        status: request.status,
    };

    match service.create_project(actor, input) {
        Ok(project) => entity_response(201, &project, "createProject"),
        Err(err) => service_error_response("createProject", err),
    }
}

/// `PUT /projects/{id}` — 200 + updated project.
pub fn update_project<R, C, E>(
    service: &ProjectService<R, C, E>,
    id: &str,
    request: UpdateProjectRequest,
) -> ApiResponse
where
    R: ProjectRepository,
    C: Cache,
    E: EventPublisher,
{
    let Some(project_id) = parse_uuid(id) else {
        return internal_error("updateProject");
    };

    let deadline = match parse_optional_deadline(request.deadline.as_deref()) {
        Ok(deadline) => deadline,
        Err(response) => return response,
    };

    let changes = ProjectChanges {
        name: request.name,
        description: request.description,
        deadline,
        priority: request.priority,
        client_name: request.client_name,
        status: request.status,
    };

    match service.update_project(project_id, &changes) {
        Ok(project) => entity_response(200, &project, "updateProject"),
        Err(err) => service_error_response("updateProject", err),
    }
}

/// `DELETE /projects/{id}` — soft delete; 200 + project forced INACTIVE.
pub fn delete_project<R, C, E>(service: &ProjectService<R, C, E>, id: &str) -> ApiResponse
where
    R: ProjectRepository,
    C: Cache,
    E: EventPublisher,
{
    let Some(project_id) = parse_uuid(id) else {
        return internal_error("deleteProject");
    };

    match service.delete_project(project_id) {
        Ok(project) => entity_response(200, &project, "deleteProject"),
        Err(err) => service_error_response("deleteProject", err),
    }
}

/// `GET /projects` — 200 + all projects owned by the actor.
pub fn list_projects<R, C, E>(service: &ProjectService<R, C, E>, user_id: UserId) -> ApiResponse
where
    R: ProjectRepository,
    C: Cache,
    E: EventPublisher,
{
    match service.list_projects(user_id) {
        Ok(projects) => entity_response(200, &projects, "listProjects"),
        Err(err) => service_error_response("listProjects", err),
    }
}

pub(crate) fn parse_uuid(value: &str) -> Option<Uuid> {
    Uuid::parse_str(value.trim()).ok()
}

/// Parses an optional deadline string to epoch milliseconds.
///
/// Accepts RFC 3339 (`2026-09-01T12:00:00Z`) or a plain date
/// (`2026-09-01`, interpreted as midnight UTC). A present but unparsable
/// value is a 400.
fn parse_optional_deadline(deadline: Option<&str>) -> Result<Option<i64>, ApiResponse> {
    let Some(raw) = deadline else {
        return Ok(None);
    };

    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(Some(unix_millis(parsed)));
    }

    let date_only = format_description!("[year]-[month]-[day]");
    if let Ok(date) = Date::parse(raw, &date_only) {
        let midnight = PrimitiveDateTime::new(date, Time::MIDNIGHT).assume_utc();
        return Ok(Some(unix_millis(midnight)));
    }

    Err(ApiResponse::error(
        400,
        format!("Invalid deadline date: {raw}"),
    ))
}

fn unix_millis(moment: OffsetDateTime) -> i64 {
    (moment.unix_timestamp_nanos() / 1_000_000) as i64
}
