//! Project mutation service.
//!
//! # Responsibility
//! - Run every project mutation through the fixed pipeline: validate,
//!   one repository mutation, best-effort cache invalidation, best-effort
//!   event publish.
//!
//! # Invariants
//! - Exactly one repository mutation per request; its failure aborts
//!   before any side-effecting step runs.
//! - Cache and event failures never change the returned result.
//! - Soft delete overwrites status with `Inactive` and is idempotent.

use log::warn;

use crate::cache::{Cache, PROJECTS_CACHE_KEY};
use crate::event::{DomainEvent, EventPublisher, ProjectEventKind};
use crate::model::project::{Priority, Project, ProjectId, ProjectStatus};
use crate::model::user::UserId;
use crate::repo::project_repo::{ProjectChanges, ProjectRepository};
use crate::service::{ServiceError, ServiceResult};

/// Request model for project creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    /// Unix epoch milliseconds.
    pub deadline: Option<i64>,
    pub priority: Option<Priority>,
    pub client_name: Option<String>,
    /// Defaults to `InProgress` when omitted.
    pub status: Option<ProjectStatus>,
}

/// Use-case service for project mutations and reads.
pub struct ProjectService<R, C, E> {
    repo: R,
    cache: C,
    events: E,
}

impl<R, C, E> ProjectService<R, C, E>
where
    R: ProjectRepository,
    C: Cache,
    E: EventPublisher,
{
    /// Creates a service with constructor-injected collaborators.
    pub fn new(repo: R, cache: C, events: E) -> Self {
        Self {
            repo,
            cache,
            events,
        }
    }

    /// Creates a project owned by the authenticated actor.
    ///
    /// # Contract
    /// - `actor = None` is rejected with `Unauthorized` before any side
    ///   effect.
    /// - Omitted `status` defaults to `InProgress`, omitted `priority` to
    ///   `Medium`.
    pub fn create_project(
        &self,
        actor: Option<UserId>,
        input: NewProject,
    ) -> ServiceResult<Project> {
        let user_id = actor.ok_or(ServiceError::Unauthorized)?;

        let mut project = Project::new(user_id, input.name);
        project.description = input.description;
        project.deadline = input.deadline;
        project.client_name = input.client_name;
        if let Some(priority) = input.priority {
            project.priority = priority;
        }
        if let Some(status) = input.status {
            project.status = status;
        }

        self.repo.create(&project)?;
        self.finish_mutation(ProjectEventKind::Created, &project);
        Ok(project)
    }

    /// Applies a partial field set to an existing project.
    pub fn update_project(
        &self,
        id: ProjectId,
        changes: &ProjectChanges,
    ) -> ServiceResult<Project> {
        let project = self.repo.update_fields(id, changes)?;
        self.finish_mutation(ProjectEventKind::Updated, &project);
        Ok(project)
    }

    /// Soft-deletes a project by forcing its status to `Inactive`.
    ///
    /// Idempotent: deleting an already inactive project succeeds and
    /// returns `Inactive` again.
    pub fn delete_project(&self, id: ProjectId) -> ServiceResult<Project> {
        let project = self.repo.set_status(id, ProjectStatus::Inactive)?;
        self.finish_mutation(ProjectEventKind::Deleted, &project);
        Ok(project)
    }

    /// Gets one project by id. No cache or event involvement.
    pub fn get_project(&self, id: ProjectId) -> ServiceResult<Option<Project>> {
        Ok(self.repo.get(id)?)
    }

    /// Lists projects owned by a user. No cache or event involvement.
    pub fn list_projects(&self, user_id: UserId) -> ServiceResult<Vec<Project>> {
        Ok(self.repo.list_for_user(user_id)?)
    }

    /// Runs the two best-effort steps that follow a successful mutation,
    /// in fixed order: cache invalidation, then event publish.
    fn finish_mutation(&self, kind: ProjectEventKind, project: &Project) {
        if let Err(err) = self.cache.delete(PROJECTS_CACHE_KEY) {
            warn!(
                "event=cache_invalidate module=project_service status=error key={PROJECTS_CACHE_KEY} error={err}"
            );
        }

        let event = DomainEvent::project(kind, project.clone());
        if let Err(err) = self.events.publish(&event) {
            warn!("event=event_publish module=project_service status=error error={err}");
        }
    }
}
