//! # Order Lifecycle Engine
//!
//! The core of the service: order creation with validation and server-side pricing, and
//! the cancel/complete transitions.
//!
//! ## Structure
//!
//! - [`validator`] - Structural checks on a [`NewOrder`](crate::model::NewOrder)
//! - [`pricing`] - Total computation against the [`ProductCatalog`]
//! - [`transition`] - The status state machine
//! - [`service`] - [`OrderLifecycle`], which runs the operations against an [`OrderStore`]
//! - [`ports`] - The collaborator traits
//! - [`error`] - [`OrderError`]

pub mod error;
pub mod ports;
pub mod pricing;
pub mod service;
pub mod transition;
pub mod validator;

pub use error::*;
pub use ports::*;
pub use pricing::*;
pub use service::*;
pub use transition::*;
pub use validator::*;
