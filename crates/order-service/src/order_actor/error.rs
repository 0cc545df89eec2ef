//! Error types for the Order actor.

use thiserror::Error;

/// Failures of the order store itself. "No such order" is not one of them; lookups
/// report absence as `None`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// An update named an order the store never assigned.
    #[error("Order not stored: {0}")]
    UnknownOrder(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
