use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use super::error::DirectoryError;
use crate::domain::{Role, User};
use crate::messages::{DirectoryRequest, ServiceResponse};

/// Owns all user records. Registration and lookups are serialized through
/// the actor's mailbox, which makes the email-uniqueness check atomic.
pub struct DirectoryActor {
    receiver: mpsc::Receiver<DirectoryRequest>,
    store: HashMap<String, User>,
    next_id: u64,
}

impl DirectoryActor {
    pub fn new(buffer_size: usize) -> (Self, mpsc::Sender<DirectoryRequest>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        (actor, sender)
    }

    #[instrument(name = "directory_service", skip(self))]
    pub async fn run(mut self) {
        info!("DirectoryService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                DirectoryRequest::Register { user, respond_to } => {
                    self.handle_register(user, respond_to);
                }
                DirectoryRequest::GetUser { id, respond_to } => {
                    self.handle_get_user(id, respond_to);
                }
                DirectoryRequest::GetByEmail { email, respond_to } => {
                    self.handle_get_by_email(email, respond_to);
                }
                DirectoryRequest::ListDoctors { specialization, respond_to } => {
                    self.handle_list_doctors(specialization, respond_to);
                }
            }
        }
        info!("DirectoryService stopped");
    }

    #[instrument(fields(email = %user.email, role = %user.role), skip(self, user, respond_to))]
    fn handle_register(&mut self, mut user: User, respond_to: ServiceResponse<String, DirectoryError>) {
        if self.store.values().any(|existing| existing.email == user.email) {
            warn!("Registration rejected, email already taken");
            let _ = respond_to.send(Err(DirectoryError::EmailTaken(user.email)));
            return;
        }
        let id = format!("user_{}", self.next_id);
        self.next_id += 1;
        user.id = id.clone();
        self.store.insert(id.clone(), user);
        info!(user_id = %id, "User registered");
        let _ = respond_to.send(Ok(id));
    }

    #[instrument(fields(user_id = %id), skip(self, respond_to))]
    fn handle_get_user(&self, id: String, respond_to: ServiceResponse<Option<User>, DirectoryError>) {
        debug!("Processing get_user request");
        let _ = respond_to.send(Ok(self.store.get(&id).cloned()));
    }

    #[instrument(fields(email = %email), skip(self, respond_to))]
    fn handle_get_by_email(&self, email: String, respond_to: ServiceResponse<Option<User>, DirectoryError>) {
        debug!("Processing get_by_email request");
        let user = self.store.values().find(|u| u.email == email).cloned();
        let _ = respond_to.send(Ok(user));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_doctors(
        &self,
        specialization: Option<String>,
        respond_to: ServiceResponse<Vec<User>, DirectoryError>,
    ) {
        debug!("Processing list_doctors request");
        let doctors = self
            .store
            .values()
            .filter(|u| u.role == Role::Doctor)
            .filter(|u| match (&specialization, &u.specialization) {
                (None, _) => true,
                (Some(wanted), Some(actual)) => wanted.eq_ignore_ascii_case(actual),
                (Some(_), None) => false,
            })
            .cloned()
            .collect();
        let _ = respond_to.send(Ok(doctors));
    }
}
