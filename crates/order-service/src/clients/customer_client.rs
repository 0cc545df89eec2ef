//! # Customer Client
//!
//! Provides a high‑level API for interacting with the `Customer` actor.
//! It wraps a `ResourceClient<Customer>` and exposes domain‑specific methods.
use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument, warn};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CustomerError::ActorCommunicationError(e.to_string())
    }
}

impl CustomerClient {
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn register(&self, params: CustomerCreate) -> Result<CustomerId, CustomerError> {
        debug!("Sending request");
        let saved = self
            .inner
            .save(Customer::from(params))
            .await
            .map_err(Self::map_error)?;
        saved.id.ok_or(CustomerError::MissingId)
    }

    pub async fn get(&self, id: CustomerId) -> Result<Option<Customer>, CustomerError> {
        self.fetch(id).await
    }

    /// Like [`get`](Self::get), but absence is an error.
    pub async fn find(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        self.get(id).await?.ok_or_else(|| {
            warn!(%id, "Customer not found");
            CustomerError::NotFound(id)
        })
    }

    pub async fn list(&self) -> Result<Vec<Customer>, CustomerError> {
        self.fetch_all().await
    }
}
