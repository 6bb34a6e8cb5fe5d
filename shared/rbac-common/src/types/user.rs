//! User Types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::Role;

/// User as seen by the access layer.
///
/// Loaded by the caller's identity subsystem; the access layer only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID (nil for anonymous users).
    pub id: Uuid,
    /// Username (empty for anonymous users).
    pub username: String,
    /// Whether the request carrying this user was authenticated.
    pub is_authenticated: bool,
    /// Assigned role, if any.
    pub role: Option<Role>,
}

impl User {
    /// Authenticated user with an optional role.
    pub fn authenticated(id: Uuid, username: impl Into<String>, role: Option<Role>) -> Self {
        Self {
            id,
            username: username.into(),
            is_authenticated: true,
            role,
        }
    }

    /// Anonymous (unauthenticated) user.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            id: Uuid::nil(),
            username: String::new(),
            is_authenticated: false,
            role: None,
        }
    }

    /// Name of the assigned role, if any.
    #[must_use]
    pub fn role_name(&self) -> Option<&str> {
        self.role.as_ref().map(|r| r.name.as_str())
    }
}
