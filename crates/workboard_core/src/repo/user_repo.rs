//! User repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide account persistence for the signup-adjacent flows.
//! - Surface email uniqueness violations as a semantic error.
//!
//! # Invariants
//! - Write paths validate the email shape before SQL mutations.
//! - `email` uniqueness is enforced by the schema.

use rusqlite::{params, Connection, ErrorCode, Row};

use crate::model::user::{Role, User, UserId, UserStatus};
use crate::repo::project_repo::parse_uuid_column;
use crate::repo::{RepoError, RepoResult};

const USER_SELECT_SQL: &str = "SELECT
    id,
    name,
    email,
    password_hash,
    role,
    status
FROM users";

/// Repository interface for account persistence.
pub trait UserRepository {
    /// Inserts one account row.
    fn create(&self, user: &User) -> RepoResult<()>;
    /// Gets one account by id.
    fn get(&self, id: UserId) -> RepoResult<Option<User>>;
    /// Gets one account by exact email.
    fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;
    /// Overwrites only the status column and returns the updated row.
    fn set_status(&self, id: UserId, status: UserStatus) -> RepoResult<User>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn create(&self, user: &User) -> RepoResult<()> {
        user.validate()?;

        let result = self.conn.execute(
            "INSERT INTO users (id, name, email, password_hash, role, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                user.id.to_string(),
                user.name.as_str(),
                user.email.as_str(),
                user.password_hash.as_str(),
                role_to_db(user.role),
                user_status_to_db(user.status),
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => {
                Err(RepoError::DuplicateEmail(user.email.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn get(&self, id: UserId) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }

        Ok(None)
    }

    fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE email = ?1;"))?;

        let mut rows = stmt.query([email])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }

        Ok(None)
    }

    fn set_status(&self, id: UserId, status: UserStatus) -> RepoResult<User> {
        let changed = self.conn.execute(
            "UPDATE users
             SET
                status = ?1,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?2;",
            params![user_status_to_db(status), id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        self.get(id)?.ok_or(RepoError::NotFound(id))
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation
    )
}

fn parse_user_row(row: &Row<'_>) -> RepoResult<User> {
    let id = parse_uuid_column(row, "id")?;

    let role_text: String = row.get("role")?;
    let role = parse_role(&role_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid role `{role_text}` in users.role"))
    })?;

    let status_text: String = row.get("status")?;
    let status = parse_user_status(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid status `{status_text}` in users.status"))
    })?;

    Ok(User {
        id,
        name: row.get("name")?,
        email: row.get("email")?,
        password_hash: row.get("password_hash")?,
        role,
        status,
    })
}

fn role_to_db(role: Role) -> &'static str {
    match role {
        Role::User => "USER",
        Role::Admin => "ADMIN",
    }
}

fn parse_role(value: &str) -> Option<Role> {
    match value {
        "USER" => Some(Role::User),
        "ADMIN" => Some(Role::Admin),
        _ => None,
    }
}

fn user_status_to_db(status: UserStatus) -> &'static str {
    match status {
        UserStatus::Active => "ACTIVE",
        UserStatus::Inactive => "INACTIVE",
        UserStatus::Banned => "BANNED",
        UserStatus::Deleted => "DELETED",
    }
}

fn parse_user_status(value: &str) -> Option<UserStatus> {
    match value {
        "ACTIVE" => Some(UserStatus::Active),
        "INACTIVE" => Some(UserStatus::Inactive),
        "BANNED" => Some(UserStatus::Banned),
        "DELETED" => Some(UserStatus::Deleted),
        _ => None,
    }
}
