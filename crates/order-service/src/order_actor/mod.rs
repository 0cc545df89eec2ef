//! # Order Actor
//!
//! The store for [`Order`] aggregates. Orders and their line items are written as one
//! unit: saving an order replaces its item list wholesale, and new items get identities
//! from a sequence shared by every order in the store.
//!
//! ## Usage
//!
//! ```rust
//! use order_service::lifecycle::OrderStore;
//! use order_service::model::{Order, OrderItem, ProductId};
//! use order_service::order_actor;
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = order_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let item = OrderItem { id: None, product_id: ProductId(1), quantity: 2 };
//!     let saved = client.save(Order::open(vec![item], Decimal::new(3000, 2))).await?;
//!     assert!(saved.items[0].id.is_some());
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use resource_actor::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
