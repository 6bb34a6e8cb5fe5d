//! Permission resolution logic.
//!
//! Pure predicates over an already-loaded user. A missing user (`None`)
//! is treated as unauthenticated, never as an error.

use rbac_common::{PermissionSet, User};
use uuid::Uuid;

use crate::registry::RoleRegistry;

/// Check if the user holds `permission` through their role.
///
/// Returns `false` for missing or unauthenticated users and for users
/// without a role. Tokens match by exact string equality.
pub fn has_permission(user: Option<&User>, permission: &str) -> bool {
    let Some(user) = user else {
        return false;
    };

    if !user.is_authenticated {
        return false;
    }

    user.role
        .as_ref()
        .is_some_and(|role| role.grants(permission))
}

/// Check if the user holds at least one of `permissions`.
///
/// An empty list is never satisfied.
pub fn has_any_permission<S: AsRef<str>>(user: Option<&User>, permissions: &[S]) -> bool {
    permissions
        .iter()
        .any(|p| has_permission(user, p.as_ref()))
}

/// Check if the user's role is named `role_name` (case-sensitive).
pub fn has_role(user: Option<&User>, role_name: &str) -> bool {
    let Some(user) = user else {
        return false;
    };

    if !user.is_authenticated {
        return false;
    }

    user.role_name() == Some(role_name)
}

/// All permissions granted by the user's role.
///
/// Empty when there is no user or no role. Authentication status is not
/// consulted.
pub fn list_permissions(user: Option<&User>) -> PermissionSet {
    user.and_then(|u| u.role.as_ref())
        .map(|role| role.permissions.clone())
        .unwrap_or_default()
}

/// Every permission token that can be assigned to a role.
///
/// `organization` is accepted for per-organization filtering but currently
/// ignored; the full vocabulary is always returned.
pub fn list_available_permissions(
    registry: &RoleRegistry,
    _organization: Option<Uuid>,
) -> PermissionSet {
    registry.available_permissions().clone()
}
