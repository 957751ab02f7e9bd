//! Core domain logic for Workboard, a project/task tracker.
//! This crate is the single source of truth for business invariants.

pub mod api;
pub mod cache;
pub mod db;
pub mod event;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use cache::{Cache, CacheError, MemoryCache, PROJECTS_CACHE_KEY, TASKS_CACHE_KEY};
pub use event::{
    DomainEvent, EventError, EventPublisher, LogEventPublisher, ProjectEventKind, TaskEventKind,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Priority, Project, ProjectId, ProjectStatus};
pub use model::task::{Task, TaskId, TaskStatus};
pub use model::user::{Role, User, UserId, UserStatus};
pub use repo::project_repo::{ProjectChanges, ProjectRepository, SqliteProjectRepository};
pub use repo::task_repo::{SqliteTaskRepository, TaskRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{RepoError, RepoResult};
pub use service::project_service::{NewProject, ProjectService};
pub use service::task_service::{NewTask, TaskService};
pub use service::{ServiceError, ServiceResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
