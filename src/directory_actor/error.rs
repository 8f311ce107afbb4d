use thiserror::Error;

/// Errors that can occur during directory operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DirectoryError {
    #[error("email already registered: {0}")]
    EmailTaken(String),
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("credential hashing error: {0}")]
    Hashing(String),
    #[error("actor communication error: {0}")]
    ActorCommunicationError(String),
}
