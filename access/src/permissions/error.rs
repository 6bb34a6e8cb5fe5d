//! Access Denial Error

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rbac_common::PermissionToken;
use serde::Serialize;
use thiserror::Error;

/// Raised when a required permission or role is missing.
///
/// Never recovered inside the access layer; callers propagate it and turn
/// it into an access-denied outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionDenied {
    /// A single required permission is missing.
    #[error("Permission '{0}' required.")]
    Permission(PermissionToken),

    /// None of the acceptable permissions are held.
    #[error("One of [{}] required.", join(.0))]
    AnyPermission(Vec<PermissionToken>),

    /// The required role is not assigned.
    #[error("Role '{0}' required.")]
    Role(String),
}

fn join(tokens: &[PermissionToken]) -> String {
    tokens
        .iter()
        .map(PermissionToken::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl PermissionDenied {
    /// The failing token(s) or role name.
    #[must_use]
    pub fn missing(&self) -> Vec<&str> {
        match self {
            Self::Permission(token) => vec![token.as_str()],
            Self::AnyPermission(tokens) => tokens.iter().map(PermissionToken::as_str).collect(),
            Self::Role(name) => vec![name.as_str()],
        }
    }
}

/// Error response body for JSON responses.
#[derive(Debug, Serialize)]
pub struct DeniedResponse<'a> {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
    /// Missing permission tokens or role name.
    pub missing: Vec<&'a str>,
}

impl IntoResponse for PermissionDenied {
    fn into_response(self) -> Response {
        let body = Json(DeniedResponse {
            error: "permission_denied",
            message: self.to_string(),
            missing: self.missing(),
        });

        (StatusCode::FORBIDDEN, body).into_response()
    }
}

/// Result type for guarded operations.
pub type AccessResult<T> = Result<T, PermissionDenied>;
