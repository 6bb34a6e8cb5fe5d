//! Role-based access control layer.
//!
//! Evaluates a user's role and its permission set, and guards operations
//! with a typed [`PermissionDenied`](permissions::PermissionDenied) error.

pub mod config;
pub mod permissions;
pub mod registry;

pub use permissions::{AccessContext, AccessResult, BuiltinRole, PermissionDenied};
pub use registry::{RegistryError, RoleRegistry};
