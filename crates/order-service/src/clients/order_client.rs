//! # Order Client
//!
//! Provides the [`OrderStore`] implementation backed by the `Order` actor.
//! It wraps a `ResourceClient<Order>` and translates framework failures into [`StoreError`].
use crate::lifecycle::OrderStore;
use crate::model::{Order, OrderId};
use crate::order_actor::StoreError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => StoreError::UnknownOrder(id),
            other => StoreError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl OrderStore for OrderClient {
    #[instrument(skip(self, order), fields(order_id = ?order.id, items = order.items.len()))]
    async fn save(&self, order: Order) -> Result<Order, StoreError> {
        debug!("Sending request");
        self.inner
            .save(order)
            .await
            .map_err(<Self as ActorClient<Order>>::map_error)
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        self.fetch(id).await
    }

    async fn find_all(&self) -> Result<Vec<Order>, StoreError> {
        self.fetch_all().await
    }
}
