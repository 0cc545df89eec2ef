//! # Product Actor
//!
//! Holds the product catalog. The order lifecycle reads it through
//! [`ProductCatalog`](crate::lifecycle::ProductCatalog); products get in through
//! [`ProductClient::register`] or a seed file loaded by
//! [`OrderSystem::seed_catalog`](crate::runtime::OrderSystem::seed_catalog).

pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use resource_actor::ResourceActor;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}
