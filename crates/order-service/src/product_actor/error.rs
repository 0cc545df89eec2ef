//! Error types for the Product actor.

use thiserror::Error;

/// Errors that can occur while reading or seeding the catalog.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// A seeded product carried an identity the catalog never assigned.
    #[error("Product not stored: {0}")]
    UnknownProduct(String),

    /// Two seeded products share an identity.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// A seeded product carried no identity.
    #[error("Seeded product has no id")]
    MissingId,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
