use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

use crate::auth::PasswordHasher;
use crate::client_method;
use crate::directory_actor::DirectoryError;
use crate::domain::{User, UserCreate};
use crate::messages::DirectoryRequest;

/// Client for the directory service. Password hashing and verification
/// happen here so the actor never blocks on bcrypt.
#[derive(Clone)]
pub struct DirectoryClient {
    sender: mpsc::Sender<DirectoryRequest>,
    hasher: PasswordHasher,
}

impl DirectoryClient {
    pub fn new(sender: mpsc::Sender<DirectoryRequest>, hasher: PasswordHasher) -> Self {
        Self { sender, hasher }
    }

    /// Registers a new user. Fails with [`DirectoryError::EmailTaken`] when
    /// the email is already registered.
    #[instrument(skip(self, payload), fields(email = %payload.email))]
    pub async fn register(&self, payload: UserCreate) -> Result<String, DirectoryError> {
        info!("Processing register request");
        let UserCreate { name, email, password, role, specialization } = payload;
        let password_hash = self
            .hasher
            .hash(password)
            .await
            .map_err(|e| DirectoryError::Hashing(e.to_string()))?;

        let user = User {
            id: String::new(), // assigned by the actor
            name,
            email,
            role,
            specialization,
            password_hash,
        };

        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DirectoryRequest::Register { user, respond_to })
            .await
            .map_err(|_| DirectoryError::ActorCommunicationError("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| DirectoryError::ActorCommunicationError("Actor dropped".to_string()))?
    }

    /// Checks credentials and returns the matching user.
    ///
    /// Unknown email and wrong password are deliberately indistinguishable
    /// to the caller.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, email: String, password: String) -> Result<User, DirectoryError> {
        debug!("Processing authenticate request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DirectoryRequest::GetByEmail { email, respond_to })
            .await
            .map_err(|_| DirectoryError::ActorCommunicationError("Actor closed".to_string()))?;
        let user = response
            .await
            .map_err(|_| DirectoryError::ActorCommunicationError("Actor dropped".to_string()))??;

        let Some(user) = user else {
            warn!("Authentication failed: unknown email");
            return Err(DirectoryError::InvalidCredentials);
        };

        let verified = self
            .hasher
            .verify(password, user.password_hash.clone())
            .await
            .map_err(|e| DirectoryError::Hashing(e.to_string()))?;
        if verified {
            Ok(user)
        } else {
            warn!("Authentication failed: wrong password");
            Err(DirectoryError::InvalidCredentials)
        }
    }
}

client_method!(DirectoryClient => fn get_user(id: String) -> Option<User> as DirectoryRequest::GetUser, Error = DirectoryError);
client_method!(DirectoryClient => fn list_doctors(specialization: Option<String>) -> Vec<User> as DirectoryRequest::ListDoctors, Error = DirectoryError);
