//! # Collaborator Interfaces
//!
//! The lifecycle engine reaches persistence and the catalog only through these traits.
//! The bundled implementations are the actor clients in [`crate::clients`]; tests plug in
//! in-memory fakes or mock-backed clients.

use crate::model::{Order, OrderId, Product, ProductId};
use crate::order_actor::StoreError;
use crate::product_actor::CatalogError;
use async_trait::async_trait;

/// Durable storage of order aggregates.
///
/// # Contract
/// - `save` on an order without an identity inserts it and assigns identities to the order
///   and every new item. On an order with an identity it replaces the stored aggregate, so
///   items missing from the new list are gone.
/// - Item identities are unique across the whole store.
/// - Each call is atomic on its own; nothing spans two calls.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn save(&self, order: Order) -> Result<Order, StoreError>;

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError>;

    /// Every order, ordered by identity. Empty when there are none.
    async fn find_all(&self) -> Result<Vec<Order>, StoreError>;
}

/// Read-only product lookup.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError>;
}
