//! User account model.
//!
//! # Responsibility
//! - Define the account record that owns projects.
//! - Validate the email shape at the boundary.
//!
//! # Invariants
//! - `email` is unique per account (enforced by storage) and must look
//!   like an address (`local@domain.tld`).
//! - `password_hash` is opaque to this crate; hashing happens upstream.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a user account.
pub type UserId = Uuid;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern must compile")
});

/// Account permission level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Admin,
}

/// Account lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Inactive,
    Banned,
    Deleted,
}

/// Validation failure for account write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyName,
    InvalidEmail(String),
}

impl Display for UserValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "user name must not be empty"),
            Self::InvalidEmail(email) => write!(f, "invalid email address `{email}`"),
        }
    }
}

impl Error for UserValidationError {}

/// Canonical user account record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Already-hashed credential; never logged or echoed by this crate.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub status: UserStatus,
}

impl User {
    /// Creates a new account with defaults `role = User`, `status = Active`.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            role: Role::User,
            status: UserStatus::Active,
        }
    }

    /// Checks boundary invariants before persistence.
    pub fn validate(&self) -> Result<(), UserValidationError> {
        if self.name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if !EMAIL_SHAPE.is_match(self.email.trim()) {
            return Err(UserValidationError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Role, User, UserStatus, UserValidationError};

    #[test]
    fn new_user_uses_account_defaults() {
        let user = User::new("Dana", "dana@example.com", "hash");
        assert_eq!(user.role, Role::User);
        assert_eq!(user.status, UserStatus::Active);
        assert!(user.validate().is_ok());
    }

    #[test]
    fn validate_rejects_malformed_email() {
        let user = User::new("Dana", "not-an-email", "hash");
        assert!(matches!(
            user.validate(),
            Err(UserValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn password_hash_never_serializes() {
        let user = User::new("Dana", "dana@example.com", "secret-hash");
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret-hash"));
    }
}
