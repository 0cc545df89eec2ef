//! # Customer Actor
//!
//! The customer registry: the simplest actor in the system, with no dependencies and no
//! owned children.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use order_service::customer_actor;
//! use order_service::model::CustomerCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = customer_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let params = CustomerCreate {
//!         name: "Ragnar Lothbrok".to_string(),
//!         birth: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
//!         personal_id: "123.456.789-00".to_string(),
//!     };
//!     let id = client.register(params).await?;
//!     assert_eq!(client.find(id).await?.name, "Ragnar Lothbrok");
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::*;

use crate::clients::CustomerClient;
use crate::model::Customer;
use resource_actor::ResourceActor;

/// Creates a new Customer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Customer>, CustomerClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CustomerClient::new(generic_client))
}
