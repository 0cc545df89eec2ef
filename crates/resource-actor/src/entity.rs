//! # StoredEntity Trait
//!
//! The `StoredEntity` trait defines the contract that every aggregate (Order, Product,
//! Customer, …) must implement to be persisted by the generic `ResourceActor`. It names the
//! identity type, tells the actor how to read and assign that identity, and offers a single
//! hook (`on_save`) that runs inside the actor right before the aggregate is written.
//!
//! # Architecture Note
//! By defining one contract for every stored type, the `ResourceActor` save/find logic is
//! written *once*. The associated `Id` type keeps the API type safe: an `OrderId` can never
//! be used to look up a `Product`.
//!
//! # Aggregates and Owned Children
//! The store always replaces a whole aggregate on save. Children that the aggregate owns
//! (an order's line items, for example) therefore live and die with their root: detaching a
//! child from the root and saving is enough to remove it. Children that need identities of
//! their own draw them from the [`IdSequence`] handed to [`StoredEntity::on_save`].

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Monotonic identity generator owned by a `ResourceActor`.
///
/// Identities start at 1 and are never reused while the actor lives.
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the next identity and advances the sequence.
    pub fn next_id<I: From<u64>>(&mut self) -> I {
        let id = self.next;
        self.next += 1;
        I::from(id)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait that any aggregate must implement to be persisted by `ResourceActor`.
pub trait StoredEntity: Clone + Send + Sync + Debug + 'static {
    /// The identity of the aggregate root (e.g. `OrderId`).
    /// Must be convertible from `u64` for store-assigned identities.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u64>;

    /// The identity, if the store has assigned one yet.
    fn id(&self) -> Option<&Self::Id>;

    /// Records the identity assigned by the store on first save.
    fn assign_id(&mut self, id: Self::Id);

    /// Called inside the actor immediately before the aggregate is written.
    ///
    /// Use this hook to give owned children their identities. The default does nothing.
    fn on_save(&mut self, _child_ids: &mut IdSequence) {}
}
