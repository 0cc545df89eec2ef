//! # Order Service Library
//!
//! An order-management backend built on [`resource_actor`]. Orders are priced on the
//! server, validated before they are stored, and move through a small lifecycle:
//!
//! ```text
//! OPEN ──▶ CANCELLED
//!   └────▶ COMPLETED
//! ```
//!
//! - **[model]**: Pure data structures ([`Order`](model::Order), [`Product`](model::Product), [`Customer`](model::Customer)).
//! - **[lifecycle]**: The order lifecycle engine and its collaborator traits.
//! - **[clients]**: Actor-backed implementations of those traits.
//! - **[metrics]**: Prometheus request counters per endpoint.
//! - **[problem]**: Error bodies and status codes for the boundary.
//! - **[runtime]**: Startup, configuration, tracing and shutdown.

pub mod clients;
pub mod customer_actor;
pub mod lifecycle;
pub mod metrics;
pub mod model;
pub mod order_actor;
pub mod problem;
pub mod product_actor;
pub mod runtime;
