//! Built-in roles and permission tokens.
//!
//! These roles are always available unless disabled in configuration.
//! Additional roles are loaded into the [`RoleRegistry`](crate::registry::RoleRegistry)
//! at setup time.

use rbac_common::Role;

/// Full platform administration.
pub const MANAGE_ALL: &str = "manage_all";

/// Administration of a single organization.
pub const MANAGE_ORGANIZATION: &str = "manage_organization";

/// Every token granted by a built-in role.
pub const BUILTIN_PERMISSIONS: &[&str] = &[MANAGE_ALL, MANAGE_ORGANIZATION];

/// Role shipped with the access layer.
///
/// Each variant carries a fixed permission set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinRole {
    /// Platform administrator
    MainAdmin,
    /// Organization administrator
    OrganizationAdmin,
}

impl BuiltinRole {
    /// Returns the role name used for role checks.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbac_access::permissions::BuiltinRole;
    ///
    /// assert_eq!(BuiltinRole::OrganizationAdmin.name(), "organization_admin");
    /// ```
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MainAdmin => "main_admin",
            Self::OrganizationAdmin => "organization_admin",
        }
    }

    /// Returns the permissions granted by this role.
    #[must_use]
    pub const fn permissions(&self) -> &'static [&'static str] {
        match self {
            Self::MainAdmin => &[MANAGE_ALL],
            Self::OrganizationAdmin => &[MANAGE_ORGANIZATION],
        }
    }

    /// Returns all built-in roles as a slice.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::MainAdmin, Self::OrganizationAdmin]
    }

    /// Returns a human-readable description of the role.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::MainAdmin => "Manage the whole platform",
            Self::OrganizationAdmin => "Manage a single organization",
        }
    }

    /// Look up a built-in role by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|r| r.name() == name)
    }

    /// Build the role record assigned to users.
    #[must_use]
    pub fn to_role(&self) -> Role {
        Role::new(self.name(), self.permissions().iter().copied())
    }
}

impl From<BuiltinRole> for Role {
    fn from(role: BuiltinRole) -> Self {
        role.to_role()
    }
}
