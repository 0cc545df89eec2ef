//! # System Runtime & Orchestration
//!
//! This module manages the runtime lifecycle of the service: starting the actors, wiring
//! the order lifecycle engine to them, and shutting everything down again.
//!
//! **Key Responsibilities:**
//! 1. **Actor Creation** - Instantiate all actors and their clients
//! 2. **Dependency Injection** - Hand the order and product clients to [`OrderLifecycle`](crate::lifecycle::OrderLifecycle)
//! 3. **Graceful Shutdown** - Drop every client, then join every actor task
//! 4. **Configuration** - [`SystemConfig`] from the environment, catalog seed files
//! 5. **Observability Setup** - [`setup_tracing`]
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors clean up** - Log final state
//! 4. **Await completion** - Wait for all actor tasks to finish
//!
//! Actors never hold each other's clients, so the dependency graph is acyclic and channel
//! closure alone shuts the system down.
//!
//! **Usage:**
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```

pub mod config;
pub mod order_system;
pub mod tracing;

pub use config::*;
pub use order_system::*;
pub use self::tracing::*;
