//! Pure data structures shared by the actors, the lifecycle engine and the boundary.

pub mod customer;
pub mod order;
pub mod product;

pub use customer::*;
pub use order::*;
pub use product::*;
