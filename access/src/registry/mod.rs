//! Role registry.
//!
//! Maps role names to permission sets and holds the vocabulary of tokens
//! roles may use. Built once at setup time, then only read.

mod error;
mod file;

pub use error::RegistryError;
pub use file::RolesFile;

use std::collections::BTreeMap;
use std::path::Path;

use rbac_common::{PermissionSet, PermissionToken, Role};
use tracing::{debug, info};

use crate::config::Config;
use crate::permissions::builtin::{BuiltinRole, BUILTIN_PERMISSIONS};

/// Role name → permission set, plus the token vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleRegistry {
    roles: BTreeMap<String, PermissionSet>,
    vocabulary: PermissionSet,
}

impl RoleRegistry {
    /// Registry with no roles and an empty vocabulary.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry seeded with the built-in roles and tokens.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.extend_vocabulary(BUILTIN_PERMISSIONS.iter().copied());
        for role in BuiltinRole::all() {
            registry
                .roles
                .insert(role.name().to_string(), role.to_role().permissions);
        }
        registry
    }

    /// Build the registry described by `config`.
    ///
    /// Order: built-in roles (unless disabled), extra vocabulary, roles file.
    #[tracing::instrument(skip(config))]
    pub fn from_config(config: &Config) -> Result<Self, RegistryError> {
        let mut registry = if config.builtin_roles {
            Self::builtin()
        } else {
            Self::empty()
        };

        registry.extend_vocabulary(config.extra_permissions.iter().map(String::as_str));

        if let Some(path) = &config.roles_file {
            let file = read_roles_file(path)?;
            registry.load(file)?;
        }

        info!(
            roles = registry.len(),
            permissions = registry.vocabulary.len(),
            "Role registry loaded"
        );

        Ok(registry)
    }

    /// Parse a roles file from a JSON string into a fresh registry.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let file: RolesFile = serde_json::from_str(json)?;
        let mut registry = Self::empty();
        registry.load(file)?;
        Ok(registry)
    }

    /// Read a roles file into a fresh registry.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let file = read_roles_file(path.as_ref())?;
        let mut registry = Self::empty();
        registry.load(file)?;
        Ok(registry)
    }

    /// Add the file's vocabulary, then register each of its roles.
    ///
    /// All or nothing: on error the registry is left unchanged.
    pub fn load(&mut self, file: RolesFile) -> Result<(), RegistryError> {
        let mut next = self.clone();
        next.vocabulary.extend(file.available_permissions);
        for role in file.roles {
            next.register(role)?;
        }
        *self = next;
        Ok(())
    }

    /// Add tokens to the vocabulary.
    pub fn extend_vocabulary<I, T>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<PermissionToken>,
    {
        self.vocabulary.extend(tokens.into_iter().map(Into::into));
    }

    /// Register a role.
    ///
    /// Every token of the role must already be in the vocabulary.
    pub fn register(&mut self, role: Role) -> Result<(), RegistryError> {
        if role.name.trim().is_empty() {
            return Err(RegistryError::EmptyRoleName);
        }

        if self.roles.contains_key(&role.name) {
            return Err(RegistryError::DuplicateRole(role.name));
        }

        if let Some(unknown) = role
            .permissions
            .iter()
            .find(|p| !self.vocabulary.contains(*p))
        {
            return Err(RegistryError::UnknownPermission {
                role: role.name.clone(),
                permission: unknown.to_string(),
            });
        }

        debug!(role = %role.name, permissions = role.permissions.len(), "Registered role");
        self.roles.insert(role.name, role.permissions);
        Ok(())
    }

    /// Look up a role by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Role> {
        self.roles.get(name).map(|permissions| Role {
            name: name.to_string(),
            permissions: permissions.clone(),
        })
    }

    #[must_use]
    pub fn permissions_for(&self, name: &str) -> Option<&PermissionSet> {
        self.roles.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.roles.contains_key(name)
    }

    /// Role names in sorted order.
    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(String::as_str)
    }

    /// All roles in name order.
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.roles.iter().map(|(name, permissions)| Role {
            name: name.clone(),
            permissions: permissions.clone(),
        })
    }

    /// The configured token vocabulary.
    #[must_use]
    pub const fn available_permissions(&self) -> &PermissionSet {
        &self.vocabulary
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Snapshot in roles-file form.
    #[must_use]
    pub fn to_roles_file(&self) -> RolesFile {
        RolesFile {
            available_permissions: self.vocabulary.clone(),
            roles: self.roles().collect(),
        }
    }
}

impl serde::Serialize for RoleRegistry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_roles_file().serialize(serializer)
    }
}

fn read_roles_file(path: &Path) -> Result<RolesFile, RegistryError> {
    let contents = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::builtin::{MANAGE_ALL, MANAGE_ORGANIZATION};

    #[test]
    fn test_builtin_registry() {
        let registry = RoleRegistry::builtin();

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.role_names().collect::<Vec<_>>(),
            vec!["main_admin", "organization_admin"]
        );
        assert!(registry
            .permissions_for("main_admin")
            .is_some_and(|p| p.contains(MANAGE_ALL)));
        assert!(registry
            .permissions_for("organization_admin")
            .is_some_and(|p| p.contains(MANAGE_ORGANIZATION)));
        assert_eq!(registry.available_permissions().len(), 2);
    }

    #[test]
    fn test_get_returns_role_record() {
        let registry = RoleRegistry::builtin();
        let role = registry.get("main_admin").unwrap();

        assert_eq!(role, BuiltinRole::MainAdmin.to_role());
        assert!(registry.get("MAIN_ADMIN").is_none());
    }

    #[test]
    fn test_register_rejects_duplicate() {
        let mut registry = RoleRegistry::builtin();
        let result = registry.register(Role::new("main_admin", [MANAGE_ALL]));
        assert!(matches!(result, Err(RegistryError::DuplicateRole(name)) if name == "main_admin"));
    }

    #[test]
    fn test_register_rejects_empty_name() {
        let mut registry = RoleRegistry::builtin();
        let result = registry.register(Role::new("  ", [MANAGE_ALL]));
        assert!(matches!(result, Err(RegistryError::EmptyRoleName)));
    }

    #[test]
    fn test_register_rejects_unknown_permission() {
        let mut registry = RoleRegistry::builtin();
        let result = registry.register(Role::new("auditor", ["view_audit_log"]));
        assert!(matches!(
            result,
            Err(RegistryError::UnknownPermission { ref permission, .. }) if permission == "view_audit_log"
        ));
        assert!(!registry.contains("auditor"));
    }

    #[test]
    fn test_register_after_extending_vocabulary() {
        let mut registry = RoleRegistry::builtin();
        registry.extend_vocabulary(["view_audit_log"]);

        registry
            .register(Role::new("auditor", ["view_audit_log"]))
            .unwrap();
        assert!(registry.contains("auditor"));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_role_with_no_permissions() {
        let mut registry = RoleRegistry::empty();
        registry
            .register(Role::new("guest", Vec::<String>::new()))
            .unwrap();
        assert!(registry.permissions_for("guest").is_some_and(|p| p.is_empty()));
    }

    #[test]
    fn test_from_json() {
        let registry = RoleRegistry::from_json(
            r#"{
                "available_permissions": ["view_reports", "export_reports"],
                "roles": [
                    {"name": "analyst", "permissions": ["view_reports"]},
                    {"name": "exporter", "permissions": ["view_reports", "export_reports"]}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry
            .permissions_for("exporter")
            .is_some_and(|p| p.contains("export_reports")));
    }

    #[test]
    fn test_from_json_invalid() {
        let result = RoleRegistry::from_json("{\"roles\": 3}");
        assert!(matches!(result, Err(RegistryError::Parse(_))));
    }

    #[test]
    fn test_failed_load_leaves_registry_unchanged() {
        let mut registry = RoleRegistry::builtin();
        let file = RolesFile {
            available_permissions: ["view_reports"].into_iter().map(Into::into).collect(),
            roles: vec![
                Role::new("analyst", ["view_reports"]),
                Role::new("broken", ["nope"]),
            ],
        };

        let result = registry.load(file);

        assert!(matches!(
            result,
            Err(RegistryError::UnknownPermission { ref role, .. }) if role == "broken"
        ));
        assert!(!registry.contains("analyst"));
        assert!(!registry.available_permissions().contains("view_reports"));
        assert_eq!(registry, RoleRegistry::builtin());
    }

    #[test]
    fn test_load_applies_valid_file() {
        let mut registry = RoleRegistry::builtin();
        let file = RolesFile {
            available_permissions: ["view_reports"].into_iter().map(Into::into).collect(),
            roles: vec![Role::new("analyst", ["view_reports"])],
        };

        registry.load(file).unwrap();

        assert!(registry.contains("analyst"));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_serialized_dump_loads_back() {
        let registry = RoleRegistry::builtin();
        let json = serde_json::to_string(&registry).unwrap();

        assert_eq!(RoleRegistry::from_json(&json).unwrap(), registry);
    }
}
