//! User entity representing a registered account in the LegalEase system.

use chrono::{DateTime, Utc};
use le_shared::validation::{is_valid_email, normalize_email};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

/// Represents the role of a user in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// A client seeking legal consultation
    Client,
    /// A lawyer offering consultations
    Lawyer,
    /// Platform administrator
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Client => write!(f, "CLIENT"),
            UserRole::Lawyer => write!(f, "LAWYER"),
            UserRole::Admin => write!(f, "ADMIN"),
        }
    }
}

/// User entity representing a registered account
///
/// The email doubles as the subject of issued access tokens, so it is
/// normalized (trimmed, lowercase) on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Normalized email address
    pub email: String,

    /// Role of the account
    pub role: UserRole,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the address is malformed.
    pub fn new(
        name: impl Into<String>,
        email: &str,
        role: UserRole,
    ) -> Result<Self, ValidationError> {
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: normalize_email(email),
            role,
            created_at: now,
            updated_at: now,
        })
    }

    /// Checks if the user is a lawyer
    pub fn is_lawyer(&self) -> bool {
        self.role == UserRole::Lawyer
    }

    /// Checks if the user is a client
    pub fn is_client(&self) -> bool {
        self.role == UserRole::Client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_creation() {
        let user = User::new("Alice", "Alice@Example.com", UserRole::Client).unwrap();

        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "alice@example.com");
        assert!(user.is_client());
        assert!(!user.is_lawyer());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_new_user_rejects_invalid_email() {
        let result = User::new("Bob", "bob-at-example", UserRole::Lawyer);
        assert_eq!(result.unwrap_err(), ValidationError::InvalidEmail);
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&UserRole::Lawyer).unwrap();
        assert_eq!(json, "\"LAWYER\"");
        assert_eq!(UserRole::Admin.to_string(), "ADMIN");
    }
}
