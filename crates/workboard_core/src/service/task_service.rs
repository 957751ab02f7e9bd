//! Task mutation service.
//!
//! # Responsibility
//! - Run every task mutation through the fixed pipeline, with the parent
//!   project resolved before anything else.
//!
//! # Invariants
//! - An unresolvable parent project terminates the request with no
//!   persistence mutation, no cache touch, and no event.
//! - Exactly one repository mutation per request.
//! - Soft delete overwrites status with `Archived` and is idempotent.

use log::warn;

use crate::cache::{Cache, TASKS_CACHE_KEY};
use crate::event::{DomainEvent, EventPublisher, TaskEventKind};
use crate::model::project::ProjectId;
use crate::model::task::{Task, TaskId, TaskStatus};
use crate::repo::project_repo::ProjectRepository;
use crate::repo::task_repo::TaskRepository;
use crate::service::{ServiceError, ServiceResult};

/// Request model for task creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub name: String,
    /// Defaults to `Pending` when omitted.
    pub status: Option<TaskStatus>,
}

/// Use-case service for task mutations and reads.
pub struct TaskService<PR, TR, C, E> {
    projects: PR,
    tasks: TR,
    cache: C,
    events: E,
}

impl<PR, TR, C, E> TaskService<PR, TR, C, E>
where
    PR: ProjectRepository,
    TR: TaskRepository,
    C: Cache,
    E: EventPublisher,
{
    /// Creates a service with constructor-injected collaborators.
    pub fn new(projects: PR, tasks: TR, cache: C, events: E) -> Self {
        Self {
            projects,
            tasks,
            cache,
            events,
        }
    }

    /// Creates a task under an existing project.
    ///
    /// The parent is resolved by id only; its status is not inspected, so
    /// tasks can be attached to inactive projects (matching the permissive
    /// source behavior).
    pub fn create_task(&self, project_id: ProjectId, input: NewTask) -> ServiceResult<Task> {
        self.require_project(project_id)?;

        let mut task = Task::new(project_id, input.name);
        if let Some(status) = input.status {
            task.status = status;
        }

        self.tasks.create(&task)?;
        self.finish_mutation(TaskEventKind::Created, &task);
        Ok(task)
    }

    /// Updates the status of a task belonging to the given project.
    ///
    /// # Contract
    /// - The parent project must exist.
    /// - The task must exist and reference that project; otherwise the
    ///   request fails with `TaskNotFound` and no side effects.
    pub fn update_task(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
        status: TaskStatus,
    ) -> ServiceResult<Task> {
        self.require_project(project_id)?;

        let existing = self.tasks.get(task_id)?;
        match existing {
            Some(task) if task.project_id == project_id => {}
            _ => return Err(ServiceError::TaskNotFound(task_id)),
        }

        let task = self.tasks.set_status(task_id, status)?;
        self.finish_mutation(TaskEventKind::Updated, &task);
        Ok(task)
    }

    /// Soft-deletes a task by forcing its status to `Archived`.
    ///
    /// Only the parent project is checked up front; a missing task
    /// surfaces through the repository mutation itself. The published
    /// event uses kind `Inactive`, matching the original producer.
    pub fn delete_task(&self, project_id: ProjectId, task_id: TaskId) -> ServiceResult<Task> {
        self.require_project(project_id)?;

        let task = self.tasks.set_status(task_id, TaskStatus::Archived)?;
        self.finish_mutation(TaskEventKind::Inactive, &task);
        Ok(task)
    }

    /// Gets one task by id. No cache or event involvement.
    pub fn get_task(&self, id: TaskId) -> ServiceResult<Option<Task>> {
        Ok(self.tasks.get(id)?)
    }

    /// Lists tasks under a project. No cache or event involvement.
    pub fn list_tasks(&self, project_id: ProjectId) -> ServiceResult<Vec<Task>> {
        Ok(self.tasks.list_for_project(project_id)?)
    }

    fn require_project(&self, project_id: ProjectId) -> ServiceResult<()> {
        match self.projects.get(project_id)? {
            Some(_) => Ok(()),
            None => Err(ServiceError::ProjectNotFound(project_id)),
        }
    }

    /// Runs the two best-effort steps that follow a successful mutation,
    /// in fixed order: cache invalidation, then event publish.
    fn finish_mutation(&self, kind: TaskEventKind, task: &Task) {
        if let Err(err) = self.cache.delete(TASKS_CACHE_KEY) {
            warn!(
                "event=cache_invalidate module=task_service status=error key={TASKS_CACHE_KEY} error={err}"
            );
        }

        let event = DomainEvent::task(kind, task.clone());
        if let Err(err) = self.events.publish(&event) {
            warn!("event=event_publish module=task_service status=error error={err}");
        }
    }
}
