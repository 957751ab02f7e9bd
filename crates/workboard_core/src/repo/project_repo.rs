//! Project repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `projects` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths validate before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use uuid::Uuid;

use crate::model::project::{Priority, Project, ProjectId, ProjectStatus};
use crate::model::user::UserId;
use crate::repo::{RepoError, RepoResult};

const PROJECT_SELECT_SQL: &str = "SELECT
    id,
    name,
    description,
    deadline,
    priority,
    client_name,
    status,
    user_id
FROM projects";

/// Partial field set for the generic update path.
///
/// `None` fields are left untouched; the update always bumps `updated_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<i64>,
    pub priority: Option<Priority>,
    pub client_name: Option<String>,
    pub status: Option<ProjectStatus>,
}

/// Repository interface for project persistence.
pub trait ProjectRepository {
    /// Inserts one project row.
    fn create(&self, project: &Project) -> RepoResult<()>;
    /// Applies a partial field set and returns the updated row.
    fn update_fields(&self, id: ProjectId, changes: &ProjectChanges) -> RepoResult<Project>;
    /// Overwrites only the status column and returns the updated row.
    ///
    /// This is the soft-delete path when called with
    /// `ProjectStatus::Inactive`.
    fn set_status(&self, id: ProjectId, status: ProjectStatus) -> RepoResult<Project>;
    /// Gets one project by id.
    fn get(&self, id: ProjectId) -> RepoResult<Option<Project>>;
    /// Lists all projects owned by a user, newest update first.
    fn list_for_user(&self, user_id: UserId) -> RepoResult<Vec<Project>>;
}

/// SQLite-backed project repository.
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn get_existing(&self, id: ProjectId) -> RepoResult<Project> {
        self.get(id)?.ok_or(RepoError::NotFound(id))
    }
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    fn create(&self, project: &Project) -> RepoResult<()> {
        project.validate()?;

        self.conn.execute(
            "INSERT INTO projects (
                id,
                name,
                description,
                deadline,
                priority,
                client_name,
                status,
                user_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                project.id.to_string(),
                project.name.as_str(),
                project.description.as_deref(),
                project.deadline,
                priority_to_db(project.priority),
                project.client_name.as_deref(),
                project_status_to_db(project.status),
                project.user_id.to_string(),
            ],
        )?;

        Ok(())
    }

    fn update_fields(&self, id: ProjectId, changes: &ProjectChanges) -> RepoResult<Project> {
        if let Some(name) = &changes.name {
            if name.trim().is_empty() {
                return Err(RepoError::Validation(
                    "project name must not be empty".to_string(),
                ));
            }
        }

        let mut assignments = vec!["updated_at = (strftime('%s', 'now') * 1000)".to_string()];
        let mut bind_values: Vec<Value> = Vec::new();

        let mut push = |column: &str, value: Value, bind_values: &mut Vec<Value>| {
            bind_values.push(value);
            assignments.push(format!("{column} = ?{}", bind_values.len()));
        };

        if let Some(name) = &changes.name {
            push("name", Value::Text(name.clone()), &mut bind_values);
        }
        if let Some(description) = &changes.description {
            push(
                "description",
                Value::Text(description.clone()),
                &mut bind_values,
            );
        }
        if let Some(deadline) = changes.deadline {
            push("deadline", Value::Integer(deadline), &mut bind_values);
        }
        if let Some(priority) = changes.priority {
            push(
                "priority",
                Value::Text(priority_to_db(priority).to_string()),
                &mut bind_values,
            );
        }
        if let Some(client_name) = &changes.client_name {
            push(
                "client_name",
                Value::Text(client_name.clone()),
                &mut bind_values,
            );
        }
        if let Some(status) = changes.status {
            push(
                "status",
                Value::Text(project_status_to_db(status).to_string()),
                &mut bind_values,
            );
        }

        let sql = format!(
            "UPDATE projects SET {} WHERE id = ?{};",
            assignments.join(", "),
            bind_values.len() + 1
        );
        bind_values.push(Value::Text(id.to_string()));

        let changed = self.conn.execute(&sql, params_from_iter(bind_values))?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        self.get_existing(id)
    }

    fn set_status(&self, id: ProjectId, status: ProjectStatus) -> RepoResult<Project> {
        let changed = self.conn.execute(
            "UPDATE projects
             SET
                status = ?1,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?2;",
            params![project_status_to_db(status), id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        self.get_existing(id)
    }

    fn get(&self, id: ProjectId) -> RepoResult<Option<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_project_row(row)?));
        }

        Ok(None)
    }

    fn list_for_user(&self, user_id: UserId) -> RepoResult<Vec<Project>> {
        let mut stmt = self.conn.prepare(&format!(
            "{PROJECT_SELECT_SQL}
             WHERE user_id = ?1
             ORDER BY updated_at DESC, id ASC;"
        ))?;

        let mut rows = stmt.query([user_id.to_string()])?;
        let mut projects = Vec::new();
        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(row)?);
        }

        Ok(projects)
    }
}

fn parse_project_row(row: &Row<'_>) -> RepoResult<Project> {
    let id = parse_uuid_column(row, "id")?;
    let user_id = parse_uuid_column(row, "user_id")?;

    let priority_text: String = row.get("priority")?;
    let priority = parse_priority(&priority_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid priority `{priority_text}` in projects.priority"
        ))
    })?;

    let status_text: String = row.get("status")?;
    let status = parse_project_status(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid status `{status_text}` in projects.status"))
    })?;

    Ok(Project {
        id,
        name: row.get("name")?,
        description: row.get("description")?,
        deadline: row.get("deadline")?,
        priority,
        client_name: row.get("client_name")?,
        status,
        user_id,
    })
}

pub(crate) fn parse_uuid_column(row: &Row<'_>, column: &str) -> RepoResult<Uuid> {
    let text: String = row.get(column)?;
    Uuid::parse_str(&text)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{text}` in {column}")))
}

pub(crate) fn project_status_to_db(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Pending => "PENDING",
        ProjectStatus::Active => "ACTIVE",
        ProjectStatus::InProgress => "IN_PROGRESS",
        ProjectStatus::Completed => "COMPLETED",
        ProjectStatus::Inactive => "INACTIVE",
    }
}

pub(crate) fn parse_project_status(value: &str) -> Option<ProjectStatus> {
    match value {
        "PENDING" => Some(ProjectStatus::Pending),
        "ACTIVE" => Some(ProjectStatus::Active),
        "IN_PROGRESS" => Some(ProjectStatus::InProgress),
        "COMPLETED" => Some(ProjectStatus::Completed),
        "INACTIVE" => Some(ProjectStatus::Inactive),
        _ => None,
    }
}

fn priority_to_db(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "LOW",
        Priority::Medium => "MEDIUM",
        Priority::High => "HIGH",
    }
}

fn parse_priority(value: &str) -> Option<Priority> {
    match value {
        "LOW" => Some(Priority::Low),
        "MEDIUM" => Some(Priority::Medium),
        "HIGH" => Some(Priority::High),
        _ => None,
    }
}
