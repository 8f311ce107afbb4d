use crate::domain::Role;
use thiserror::Error;

/// Failures produced while authenticating or authorizing a request.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("invalid or expired token")]
    Unauthenticated,
    #[error("access forbidden: {0} role required")]
    Forbidden(Role),
    #[error("token encoding failed: {0}")]
    TokenEncoding(String),
}
