//! Guard functions for request handlers.
//!
//! Call a guard at the start of an operation and propagate its error with `?`:
//!
//! ```
//! use rbac_access::permissions::{require_permission, AccessResult, MANAGE_ORGANIZATION};
//! use rbac_common::User;
//!
//! fn rename_organization(user: Option<&User>, name: &str) -> AccessResult<String> {
//!     require_permission(user, MANAGE_ORGANIZATION)?;
//!     Ok(name.to_uppercase())
//! }
//!
//! assert!(rename_organization(None, "acme").is_err());
//! ```

use rbac_common::{PermissionSet, PermissionToken, User};
use uuid::Uuid;

use super::error::{AccessResult, PermissionDenied};
use super::resolver::{has_any_permission, has_permission, has_role, list_permissions};

fn user_id(user: Option<&User>) -> Uuid {
    user.map(|u| u.id).unwrap_or_default()
}

/// Require that the user holds `permission`.
///
/// Returns `Ok(())` if the permission is present, or `Err(PermissionDenied::Permission)`.
pub fn require_permission(user: Option<&User>, permission: &str) -> AccessResult<()> {
    if has_permission(user, permission) {
        return Ok(());
    }

    tracing::debug!(user_id = %user_id(user), permission, "Permission denied");
    Err(PermissionDenied::Permission(PermissionToken::new(permission)))
}

/// Require that the user holds at least one of `permissions`.
///
/// An empty list always fails.
pub fn require_any_permission<S: AsRef<str>>(
    user: Option<&User>,
    permissions: &[S],
) -> AccessResult<()> {
    if has_any_permission(user, permissions) {
        return Ok(());
    }

    let missing: Vec<PermissionToken> = permissions
        .iter()
        .map(|p| PermissionToken::new(p.as_ref()))
        .collect();
    tracing::debug!(user_id = %user_id(user), permissions = ?missing, "Permission denied");
    Err(PermissionDenied::AnyPermission(missing))
}

/// Require that the user's role is `role_name`.
pub fn require_role(user: Option<&User>, role_name: &str) -> AccessResult<()> {
    if has_role(user, role_name) {
        return Ok(());
    }

    tracing::debug!(user_id = %user_id(user), role = role_name, "Role required");
    Err(PermissionDenied::Role(role_name.to_string()))
}

/// The acting user for a single operation.
///
/// Binds the user once so handlers can run several checks without passing
/// it around.
#[derive(Debug, Clone, Copy)]
pub struct AccessContext<'a> {
    user: Option<&'a User>,
}

impl<'a> AccessContext<'a> {
    /// Context for a possibly-missing user.
    #[must_use]
    pub const fn new(user: Option<&'a User>) -> Self {
        Self { user }
    }

    /// Context for a loaded user.
    #[must_use]
    pub const fn for_user(user: &'a User) -> Self {
        Self { user: Some(user) }
    }

    /// Context with no user (treated as unauthenticated).
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { user: None }
    }

    /// The acting user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&'a User> {
        self.user
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some_and(|u| u.is_authenticated)
    }

    #[must_use]
    pub fn has_permission(&self, permission: &str) -> bool {
        has_permission(self.user, permission)
    }

    #[must_use]
    pub fn has_any_permission<S: AsRef<str>>(&self, permissions: &[S]) -> bool {
        has_any_permission(self.user, permissions)
    }

    #[must_use]
    pub fn has_role(&self, role_name: &str) -> bool {
        has_role(self.user, role_name)
    }

    #[must_use]
    pub fn permissions(&self) -> PermissionSet {
        list_permissions(self.user)
    }

    pub fn require_permission(&self, permission: &str) -> AccessResult<()> {
        require_permission(self.user, permission)
    }

    pub fn require_any_permission<S: AsRef<str>>(&self, permissions: &[S]) -> AccessResult<()> {
        require_any_permission(self.user, permissions)
    }

    pub fn require_role(&self, role_name: &str) -> AccessResult<()> {
        require_role(self.user, role_name)
    }
}

impl<'a> From<&'a User> for AccessContext<'a> {
    fn from(user: &'a User) -> Self {
        Self::for_user(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::builtin::{BuiltinRole, MANAGE_ALL, MANAGE_ORGANIZATION};

    fn org_admin() -> User {
        User::authenticated(
            Uuid::now_v7(),
            "org",
            Some(BuiltinRole::OrganizationAdmin.into()),
        )
    }

    #[test]
    fn test_require_permission_success() {
        let user = org_admin();
        assert!(require_permission(Some(&user), MANAGE_ORGANIZATION).is_ok());
    }

    #[test]
    fn test_require_permission_failure_carries_token() {
        let user = org_admin();
        let result = require_permission(Some(&user), MANAGE_ALL);
        assert_eq!(
            result,
            Err(PermissionDenied::Permission(MANAGE_ALL.into()))
        );
    }

    #[test]
    fn test_require_any_permission() {
        let user = org_admin();

        assert!(require_any_permission(Some(&user), &[MANAGE_ALL, MANAGE_ORGANIZATION]).is_ok());

        let result = require_any_permission(Some(&user), &[MANAGE_ALL, "billing"]);
        assert!(matches!(
            result,
            Err(PermissionDenied::AnyPermission(ref tokens)) if tokens.len() == 2
        ));
    }

    #[test]
    fn test_require_any_permission_empty_list_fails() {
        let user = org_admin();
        let result = require_any_permission::<&str>(Some(&user), &[]);
        assert_eq!(result, Err(PermissionDenied::AnyPermission(vec![])));
    }

    #[test]
    fn test_require_role() {
        let user = org_admin();
        assert!(require_role(Some(&user), "organization_admin").is_ok());
        assert_eq!(
            require_role(Some(&user), "main_admin"),
            Err(PermissionDenied::Role("main_admin".into()))
        );
    }

    #[test]
    fn test_anonymous_context_denies_everything() {
        let ctx = AccessContext::anonymous();

        assert!(!ctx.is_authenticated());
        assert!(!ctx.has_permission(MANAGE_ALL));
        assert!(!ctx.has_role("main_admin"));
        assert!(ctx.permissions().is_empty());
        assert!(ctx.require_permission(MANAGE_ALL).is_err());
        assert!(ctx.require_any_permission(&[MANAGE_ALL]).is_err());
        assert!(ctx.require_role("main_admin").is_err());
    }

    #[test]
    fn test_context_matches_free_functions() {
        let user = org_admin();
        let ctx = AccessContext::from(&user);

        assert!(ctx.is_authenticated());
        assert_eq!(ctx.user().map(|u| u.id), Some(user.id));
        assert!(ctx.has_permission(MANAGE_ORGANIZATION));
        assert!(ctx.has_any_permission(&[MANAGE_ALL, MANAGE_ORGANIZATION]));
        assert!(ctx.has_role("organization_admin"));
        assert_eq!(ctx.permissions(), list_permissions(Some(&user)));
        assert!(ctx.require_permission(MANAGE_ORGANIZATION).is_ok());
        assert!(ctx.require_role("organization_admin").is_ok());
    }
}
