//! Task repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `tasks` table.
//! - Keep the project foreign-key relationship inside SQL.
//!
//! # Invariants
//! - Write paths validate before SQL mutations.
//! - `project_id` is enforced by the schema foreign key; services check
//!   parent existence first to produce not-found semantics.

use rusqlite::{params, Connection, Row};

use crate::model::project::ProjectId;
use crate::model::task::{Task, TaskId, TaskStatus};
use crate::repo::project_repo::parse_uuid_column;
use crate::repo::{RepoError, RepoResult};

const TASK_SELECT_SQL: &str = "SELECT
    id,
    name,
    status,
    project_id
FROM tasks";

/// Repository interface for task persistence.
pub trait TaskRepository {
    /// Inserts one task row.
    fn create(&self, task: &Task) -> RepoResult<()>;
    /// Overwrites only the status column and returns the updated row.
    ///
    /// This is both the generic update path (the API only mutates task
    /// status) and the soft-delete path (`TaskStatus::Archived`).
    fn set_status(&self, id: TaskId, status: TaskStatus) -> RepoResult<Task>;
    /// Gets one task by id.
    fn get(&self, id: TaskId) -> RepoResult<Option<Task>>;
    /// Lists all tasks under a project, newest update first.
    fn list_for_project(&self, project_id: ProjectId) -> RepoResult<Vec<Task>>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn create(&self, task: &Task) -> RepoResult<()> {
        task.validate()?;

        self.conn.execute(
            "INSERT INTO tasks (id, name, status, project_id)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                task.id.to_string(),
                task.name.as_str(),
                task_status_to_db(task.status),
                task.project_id.to_string(),
            ],
        )?;

        Ok(())
    }

    fn set_status(&self, id: TaskId, status: TaskStatus) -> RepoResult<Task> {
        let changed = self.conn.execute(
            "UPDATE tasks
             SET
                status = ?1,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?2;",
            params![task_status_to_db(status), id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        self.get(id)?.ok_or(RepoError::NotFound(id))
    }

    fn get(&self, id: TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }

        Ok(None)
    }

    fn list_for_project(&self, project_id: ProjectId) -> RepoResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TASK_SELECT_SQL}
             WHERE project_id = ?1
             ORDER BY updated_at DESC, id ASC;"
        ))?;

        let mut rows = stmt.query([project_id.to_string()])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let id = parse_uuid_column(row, "id")?;
    let project_id = parse_uuid_column(row, "project_id")?;

    let status_text: String = row.get("status")?;
    let status = parse_task_status(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid status `{status_text}` in tasks.status"))
    })?;

    Ok(Task {
        id,
        name: row.get("name")?,
        status,
        project_id,
    })
}

pub(crate) fn task_status_to_db(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "PENDING",
        TaskStatus::Active => "ACTIVE",
        TaskStatus::InProgress => "IN_PROGRESS",
        TaskStatus::Completed => "COMPLETED",
        TaskStatus::Archived => "ARCHIVED",
    }
}

pub(crate) fn parse_task_status(value: &str) -> Option<TaskStatus> {
    match value {
        "PENDING" => Some(TaskStatus::Pending),
        "ACTIVE" => Some(TaskStatus::Active),
        "IN_PROGRESS" => Some(TaskStatus::InProgress),
        "COMPLETED" => Some(TaskStatus::Completed),
        "ARCHIVED" => Some(TaskStatus::Archived),
        _ => None,
    }
}
