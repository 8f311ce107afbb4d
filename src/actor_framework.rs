use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait with lifecycle hooks and actions)
// =============================================================================

/// Transport and lookup failures produced by the framework itself.
///
/// Every entity error type converts from this, so clients get a single typed
/// error per domain instead of a stringly mixed one.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("actor channel closed")]
    ActorClosed,
    #[error("actor dropped the response channel")]
    ActorDropped,
}

/// Trait that any domain entity must implement to be managed by [`ResourceActor`].
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    /// Domain-specific state transitions beyond CRUD.
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    /// Predicate payload for filtered listings.
    type Filter: Send + Sync + Debug;

    /// The error type surfaced to clients of this entity's actor.
    type Error: std::error::Error + Clone + Send + Sync + From<FrameworkError> + 'static;

    /// Construct the full entity from a generated id and the payload.
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, Self::Error>;

    /// Apply a partial update.
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), Self::Error>;

    /// Handle a custom domain-specific action. Runs inside the actor, so a
    /// check-then-mutate here is serialized against all other requests.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;

    /// Whether this entity should appear in a listing for `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T, E> = oneshot::Sender<Result<T, E>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T::Id, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T, T::Error>,
    },
    List {
        filter: T::Filter,
        respond_to: Response<Vec<T>, T::Error>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient { sender };
        (actor, client)
    }

    pub async fn run(mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let id = (self.next_id_fn)();
                    match T::from_create(id.clone(), payload) {
                        Ok(item) => {
                            self.store.insert(id.clone(), item);
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    if let Some(item) = self.store.get_mut(&id) {
                        match item.on_update(patch) {
                            Ok(()) => {
                                let _ = respond_to.send(Ok(item.clone()));
                            }
                            Err(e) => {
                                let _ = respond_to.send(Err(e));
                            }
                        }
                    } else {
                        let _ = respond_to
                            .send(Err(FrameworkError::NotFound(id.to_string()).into()));
                    }
                }
                ResourceRequest::List { filter, respond_to } => {
                    let items = self
                        .store
                        .values()
                        .filter(|item| item.matches(&filter))
                        .cloned()
                        .collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item.handle_action(action);
                        let _ = respond_to.send(result);
                    } else {
                        let _ = respond_to
                            .send(Err(FrameworkError::NotFound(id.to_string()).into()));
                    }
                }
            }
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T::Id, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { payload, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Update { id, patch, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self, filter: T::Filter) -> Result<Vec<T>, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { filter, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action { id, action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AvailabilitySlot, SlotCreate};
    use crate::slot_actor::{SlotAction, SlotActionResult, SlotError, SlotFilter};
    use chrono::Utc;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_resource_actor_with_actions() {
        // ID Generator
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || {
            let id = counter.fetch_add(1, Ordering::SeqCst);
            format!("slot_{}", id)
        };

        // Start Actor
        let (actor, client) = ResourceActor::<AvailabilitySlot>::new(10, next_id);
        tokio::spawn(actor.run());

        // 1. Create
        let payload = SlotCreate { doctor_id: "user_1".to_string(), time: Utc::now() };
        let id = client.create(payload).await.unwrap();

        // 2. Perform Action: Reserve flips the flag
        let SlotActionResult::Reserved(slot) =
            client.perform_action(id.clone(), SlotAction::Reserve).await.unwrap();
        assert!(slot.booked);

        // 3. Perform Action: Reserve again (should fail)
        let err = client.perform_action(id.clone(), SlotAction::Reserve).await.unwrap_err();
        assert_eq!(err, SlotError::SlotUnavailable(id.clone()));

        // Unknown ids surface as NotFound
        let err = client
            .perform_action("slot_999".to_string(), SlotAction::Reserve)
            .await
            .unwrap_err();
        assert_eq!(err, SlotError::NotFound("slot_999".to_string()));

        // Booked slots drop out of open listings
        let open = client
            .list(SlotFilter { doctor_id: "user_1".to_string(), open_only: true })
            .await
            .unwrap();
        assert!(open.is_empty());
        let all = client
            .list(SlotFilter { doctor_id: "user_1".to_string(), open_only: false })
            .await
            .unwrap();
        assert_eq!(all.len(), 1);
    }
}
