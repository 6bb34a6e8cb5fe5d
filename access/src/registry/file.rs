//! JSON roles file.
//!
//! ```json
//! {
//!   "available_permissions": ["view_reports", "export_reports"],
//!   "roles": [
//!     { "name": "analyst", "permissions": ["view_reports"] }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use rbac_common::{PermissionSet, Role};

/// On-disk role definitions. Also the shape of the registry dump.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RolesFile {
    /// Tokens added to the vocabulary before roles are registered.
    #[serde(default)]
    pub available_permissions: PermissionSet,

    /// Roles to register, in order.
    #[serde(default)]
    pub roles: Vec<Role>,
}
