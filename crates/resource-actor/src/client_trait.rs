//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default `fetch` and
//! `fetch_all` methods built on top of a generic `ResourceClient`.
use crate::{FrameworkError, ResourceClient, StoredEntity};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read operations.
///
/// # Example
///
/// ```rust
/// use resource_actor::{ActorClient, FrameworkError, ResourceActor, ResourceClient, StoredEntity};
///
/// #[derive(Clone, Debug)]
/// struct Tag { id: Option<u64>, label: String }
///
/// impl StoredEntity for Tag {
///     type Id = u64;
///     fn id(&self) -> Option<&u64> { self.id.as_ref() }
///     fn assign_id(&mut self, id: u64) { self.id = Some(id); }
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("tag store unavailable: {0}")]
/// struct TagError(String);
///
/// struct TagClient { inner: ResourceClient<Tag> }
///
/// impl ActorClient<Tag> for TagClient {
///     type Error = TagError;
///     fn inner(&self) -> &ResourceClient<Tag> { &self.inner }
///     fn map_error(e: FrameworkError) -> TagError { TagError(e.to_string()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, inner) = ResourceActor::<Tag>::new(4);
///     tokio::spawn(actor.run());
///     let client = TagClient { inner };
///
///     // fetch() and fetch_all() are provided automatically
///     assert!(client.fetch(1).await.unwrap().is_none());
///     assert!(client.fetch_all().await.unwrap().is_empty());
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: StoredEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an aggregate by identity.
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every aggregate, ordered by identity.
    #[tracing::instrument(skip(self))]
    async fn fetch_all(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
