//! Shared Types

pub mod permission;
pub mod role;
pub mod user;

pub use permission::{PermissionSet, PermissionToken};
pub use role::Role;
pub use user::User;
