//! Permission evaluation.
//!
//! - Predicates: `has_permission`, `has_any_permission`, `has_role`
//! - Listings: `list_permissions`, `list_available_permissions`
//! - Guards: `require_permission`, `require_any_permission`, `require_role`

pub mod builtin;
pub mod error;
pub mod helpers;
pub mod resolver;

pub use builtin::{BuiltinRole, BUILTIN_PERMISSIONS, MANAGE_ALL, MANAGE_ORGANIZATION};
pub use error::{AccessResult, PermissionDenied};
pub use helpers::{require_any_permission, require_permission, require_role, AccessContext};
pub use resolver::{
    has_any_permission, has_permission, has_role, list_available_permissions, list_permissions,
};
