//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a collection of
//! aggregates. It implements the "Server" side of the Actor Model, processing messages
//! sequentially and ensuring exclusive access to the underlying store.

use crate::client::ResourceClient;
use crate::entity::{IdSequence, StoredEntity};
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that persists a collection of aggregates.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each `ResourceActor` processes its own messages *sequentially* in a loop, so every
/// individual save or lookup is atomic with respect to every other one. No `Mutex` or
/// `RwLock` guards the `store`; exclusive ownership inside the task does.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Use**: Clone the client wherever the store is needed.
///
/// ```rust
/// use resource_actor::{ResourceActor, StoredEntity};
///
/// #[derive(Clone, Debug)]
/// struct Note { id: Option<u64>, text: String }
///
/// impl StoredEntity for Note {
///     type Id = u64;
///     fn id(&self) -> Option<&u64> { self.id.as_ref() }
///     fn assign_id(&mut self, id: u64) { self.id = Some(id); }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run());
///
///     let saved = client.save(Note { id: None, text: "hello".into() }).await.unwrap();
///     assert_eq!(saved.id, Some(1));
/// }
/// ```
///
/// # Operations
///
/// * **Save** without an identity: draws the next identity, assigns it, runs `on_save`,
///   inserts, and returns the stored aggregate.
/// * **Save** with an identity: runs `on_save` and replaces the stored aggregate. Saving an
///   identity the store never assigned fails with [`FrameworkError::NotFound`].
/// * **Seed**: inserts an aggregate under the identity it carries. Fails with
///   [`FrameworkError::AlreadyExists`] if that identity is stored and with
///   [`FrameworkError::MissingId`] if it carries none. Later saves never draw a seeded identity.
/// * **Get**: returns a clone of the aggregate, or `None`.
/// * **List**: returns clones of all aggregates ordered by identity.
pub struct ResourceActor<T: StoredEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    ids: IdSequence,
    child_ids: IdSequence,
}

impl<T: StoredEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. If the channel is full,
    /// calls on the client wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            ids: IdSequence::new(),
            child_ids: IdSequence::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Order" instead of "order_service::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Save { entity, respond_to } => {
                    debug!(entity_type, ?entity, "Save");
                    let _ = respond_to.send(self.save(entity, entity_type));
                }
                ResourceRequest::Seed { entity, respond_to } => {
                    debug!(entity_type, ?entity, "Seed");
                    let _ = respond_to.send(self.seed(entity, entity_type));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn save(&mut self, mut entity: T, entity_type: &str) -> Result<T, FrameworkError> {
        let id = match entity.id().cloned() {
            Some(id) if self.store.contains_key(&id) => id,
            Some(id) => {
                warn!(entity_type, %id, "Not found");
                return Err(FrameworkError::NotFound(id.to_string()));
            }
            None => {
                let id = self.next_free_id();
                entity.assign_id(id.clone());
                id
            }
        };

        entity.on_save(&mut self.child_ids);
        let replaced = self.store.insert(id.clone(), entity.clone()).is_some();
        info!(entity_type, %id, replaced, size = self.store.len(), "Saved");
        Ok(entity)
    }

    fn seed(&mut self, mut entity: T, entity_type: &str) -> Result<T, FrameworkError> {
        let Some(id) = entity.id().cloned() else {
            warn!(entity_type, "Seed without identity");
            return Err(FrameworkError::MissingId);
        };
        if self.store.contains_key(&id) {
            warn!(entity_type, %id, "Already exists");
            return Err(FrameworkError::AlreadyExists(id.to_string()));
        }

        entity.on_save(&mut self.child_ids);
        self.store.insert(id.clone(), entity.clone());
        info!(entity_type, %id, size = self.store.len(), "Seeded");
        Ok(entity)
    }

    /// Draws identities until one is not taken by a seeded aggregate.
    fn next_free_id(&mut self) -> T::Id {
        loop {
            let id: T::Id = self.ids.next_id();
            if !self.store.contains_key(&id) {
                return id;
            }
        }
    }
}
