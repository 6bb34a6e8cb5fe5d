//! RBAC Common Library
//!
//! Shared user, role and permission types used by the access layer and its callers.

pub mod types;

pub use types::*;
