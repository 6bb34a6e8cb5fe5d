//! Permission Types

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single grantable capability, e.g. `manage_organization`.
///
/// Tokens are opaque: two tokens match only when their strings are equal.
/// There is no hierarchy and no wildcard matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionToken(String);

impl PermissionToken {
    /// Create a token from any string-like value.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PermissionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PermissionToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PermissionToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for PermissionToken {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PermissionToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered set of permission tokens.
pub type PermissionSet = BTreeSet<PermissionToken>;
