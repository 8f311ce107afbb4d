use tokio::sync::oneshot;

use crate::directory_actor::DirectoryError;
use crate::domain::User;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed messages for the directory service. Each variant includes
/// parameters and a oneshot channel for the response.
#[derive(Debug)]
pub enum DirectoryRequest {
    /// Register a new user. The password has already been hashed by the
    /// client; the actor assigns the id and enforces email uniqueness.
    Register {
        user: User,
        respond_to: ServiceResponse<String, DirectoryError>,
    },
    GetUser {
        id: String,
        respond_to: ServiceResponse<Option<User>, DirectoryError>,
    },
    GetByEmail {
        email: String,
        respond_to: ServiceResponse<Option<User>, DirectoryError>,
    },
    /// List doctors, optionally filtered by specialization
    /// (case-insensitive).
    ListDoctors {
        specialization: Option<String>,
        respond_to: ServiceResponse<Vec<User>, DirectoryError>,
    },
}
