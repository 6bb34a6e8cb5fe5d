//! Registry error types.

use std::path::PathBuf;

/// Errors raised while building a [`RoleRegistry`](super::RoleRegistry).
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Failed to read roles file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid roles definition: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Role name must not be empty")]
    EmptyRoleName,

    #[error("Role '{0}' is already registered")]
    DuplicateRole(String),

    #[error("Role '{role}' uses unknown permission '{permission}'")]
    UnknownPermission { role: String, permission: String },
}
