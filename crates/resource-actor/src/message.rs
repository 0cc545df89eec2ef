//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::StoredEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Repository Semantics
/// Each variant maps to one repository operation on the aggregate type `T`:
///
/// - **Save**: Writes the whole aggregate. Without an identity it is inserted and given
///   one; with an identity it replaces the stored aggregate in place.
/// - **Seed**: Inserts an aggregate under the identity it already carries. Used to load
///   data whose identities were fixed elsewhere.
/// - **Get**: Fetches the current state of one aggregate by identity.
/// - **List**: Fetches every stored aggregate, ordered by identity.
///
/// The enum is generic over `T: StoredEntity`, so a `ResourceRequest<Order>` can only
/// carry orders and order identities.
#[derive(Debug)]
pub enum ResourceRequest<T: StoredEntity> {
    Save {
        entity: T,
        respond_to: Response<T>,
    },
    Seed {
        entity: T,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
}
