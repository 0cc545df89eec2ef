//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, independent of any domain.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    /// A save carried an identity the store has never assigned.
    #[error("Item not found: {0}")]
    NotFound(String),
    /// A seed carried an identity that is already stored.
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    /// A seed carried no identity.
    #[error("Seeded item has no identity")]
    MissingId,
}
