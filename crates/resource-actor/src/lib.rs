//! # Resource Actor
//!
//! This crate provides an actor-backed aggregate store for Tokio applications. Each stored
//! type gets its own [`ResourceActor`], a task that owns the aggregates outright and serves
//! repository requests (save, get, list) arriving over a channel.
//!
//! ## Why an Actor for a Store?
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing within each actor makes every single save or lookup atomic
//!
//! Code that needs a store only ever holds a cheap, cloneable [`ResourceClient`]; the
//! domain layer wraps that client and exposes whatever repository trait it defines.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`StoredEntity`]) - Identity handling for your aggregates
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and storage
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ```rust
//! use resource_actor::{IdSequence, ResourceActor, StoredEntity};
//!
//! #[derive(Clone, Debug)]
//! struct Playlist { id: Option<u64>, tracks: Vec<Track> }
//!
//! #[derive(Clone, Debug)]
//! struct Track { id: Option<u64>, title: String }
//!
//! impl StoredEntity for Playlist {
//!     type Id = u64;
//!     fn id(&self) -> Option<&u64> { self.id.as_ref() }
//!     fn assign_id(&mut self, id: u64) { self.id = Some(id); }
//!     fn on_save(&mut self, child_ids: &mut IdSequence) {
//!         for track in self.tracks.iter_mut().filter(|t| t.id.is_none()) {
//!             track.id = Some(child_ids.next_id());
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Playlist>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     let playlist = Playlist {
//!         id: None,
//!         tracks: vec![Track { id: None, title: "Intro".into() }],
//!     };
//!     let saved = client.save(playlist).await.unwrap();
//!     assert_eq!(saved.id, Some(1));
//!     assert_eq!(saved.tracks[0].id, Some(1));
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor
//! - Multiple actors run in **parallel**
//! - A read-modify-write spanning two requests is *not* atomic; callers that need that
//!   must coordinate themselves
//!
//! ## Testing
//!
//! The [`mock`] module offers a scripted [`mock::MockClient`] and raw channel helpers so code
//! built on a `ResourceClient` can be tested without a running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::{IdSequence, StoredEntity};
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
