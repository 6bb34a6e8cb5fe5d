//! Access Layer Configuration
//!
//! Loads configuration from environment variables.

use anyhow::{bail, Context, Result};
use std::env::{self, VarError};
use std::path::PathBuf;

/// Access layer configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON roles file to load into the registry (optional)
    pub roles_file: Option<PathBuf>,

    /// Extra permission tokens added to the vocabulary (comma-separated)
    pub extra_permissions: Vec<String>,

    /// Seed the registry with the built-in roles (default: true)
    pub builtin_roles: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            roles_file: env::var_os("RBAC_ROLES_FILE")
                .filter(|v| v.to_str().map_or(true, |s| !s.trim().is_empty()))
                .map(PathBuf::from),
            extra_permissions: optional_var("RBAC_AVAILABLE_PERMISSIONS")?
                .map(|s| parse_list(&s))
                .unwrap_or_default(),
            builtin_roles: match optional_var("RBAC_BUILTIN_ROLES")? {
                Some(v) => parse_bool(&v).context("RBAC_BUILTIN_ROLES must be true or false")?,
                None => true,
            },
        })
    }

    /// Check if a roles file is configured.
    #[must_use]
    pub const fn has_roles_file(&self) -> bool {
        self.roles_file.is_some()
    }

    /// Create a default configuration for testing.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            roles_file: None,
            extra_permissions: Vec::new(),
            builtin_roles: true,
        }
    }
}

/// Read a variable, treating only absence as unset.
fn optional_var(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(v) => Ok(Some(v)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e @ VarError::NotUnicode(_)) => {
            Err(anyhow::Error::new(e).context(format!("{key} is not valid UTF-8")))
        }
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("invalid boolean '{other}'"),
    }
}
