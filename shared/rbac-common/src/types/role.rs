//! Role Types

use serde::{Deserialize, Serialize};

use super::permission::{PermissionSet, PermissionToken};

/// Named bundle of permission tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role name (unique within a registry).
    pub name: String,
    /// Permissions granted by this role.
    #[serde(default)]
    pub permissions: PermissionSet,
}

impl Role {
    /// Create a role from a name and any iterable of tokens.
    ///
    /// Duplicate tokens collapse into one.
    pub fn new<I, T>(name: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<PermissionToken>,
    {
        Self {
            name: name.into(),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this role grants `token` (exact match).
    #[must_use]
    pub fn grants(&self, token: &str) -> bool {
        self.permissions.contains(token)
    }
}
