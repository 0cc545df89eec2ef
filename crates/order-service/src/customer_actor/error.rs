//! Error types for the Customer actor.

use crate::model::CustomerId;
use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// The requested customer was not found.
    #[error("Could not find customer {0}")]
    NotFound(CustomerId),

    /// The registry returned a customer without an identity.
    #[error("Customer registry returned an unsaved customer")]
    MissingId,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
