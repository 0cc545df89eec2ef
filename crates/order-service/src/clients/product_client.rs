//! # Product Client
//!
//! Provides the [`ProductCatalog`] implementation backed by the `Product` actor, plus the
//! registration call used to seed the catalog.
use crate::lifecycle::ProductCatalog;
use crate::model::{Product, ProductId};
use crate::product_actor::CatalogError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CatalogError::UnknownProduct(id),
            FrameworkError::AlreadyExists(id) => CatalogError::DuplicateProduct(id),
            FrameworkError::MissingId => CatalogError::MissingId,
            other => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    /// Adds a product to the catalog and returns it with its assigned identity.
    ///
    /// Any identity already on `product` is discarded; the catalog numbers products in
    /// registration order.
    #[instrument(skip(self, product), fields(title = %product.title))]
    pub async fn register(&self, mut product: Product) -> Result<Product, CatalogError> {
        debug!("Sending request");
        product.id = None;
        self.inner
            .save(product)
            .await
            .map_err(<Self as ActorClient<Product>>::map_error)
    }

    /// Adds a product under the identity it already carries.
    ///
    /// Orders reference products by identity, so seeded products must keep theirs. Fails
    /// with [`CatalogError::DuplicateProduct`] if the identity is taken.
    #[instrument(skip(self, product), fields(product_id = ?product.id, title = %product.title))]
    pub async fn seed(&self, product: Product) -> Result<Product, CatalogError> {
        debug!("Sending request");
        self.inner
            .seed(product)
            .await
            .map_err(<Self as ActorClient<Product>>::map_error)
    }
}

#[async_trait]
impl ProductCatalog for ProductClient {
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        self.fetch(id).await
    }
}
