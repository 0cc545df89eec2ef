//! Errors returned by the order lifecycle engine.
//!
//! Variants carry identifying data only; turning them into user-facing text and status
//! codes is the job of [`crate::problem`].

use crate::lifecycle::{IllegalTransition, PricingError, Transition, ValidationError};
use crate::model::{NewOrder, OrderId, OrderStatus, ProductId};
use crate::order_actor::StoreError;
use crate::product_actor::CatalogError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The request failed validation. The original request is kept for reporting.
    #[error("Invalid order: {reason}")]
    InvalidOrder {
        reason: ValidationError,
        request: NewOrder,
    },

    #[error("Could not find product {0}")]
    ProductNotFound(ProductId),

    /// Pricing the order exceeded the range of exact decimals.
    #[error("Order total overflows at product {0}")]
    TotalOverflow(ProductId),

    #[error("Could not find order {0}")]
    OrderNotFound(OrderId),

    #[error("cannot {attempted} an order that is {current}")]
    IllegalTransition {
        current: OrderStatus,
        attempted: Transition,
    },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl From<IllegalTransition> for OrderError {
    fn from(e: IllegalTransition) -> Self {
        OrderError::IllegalTransition {
            current: e.current,
            attempted: e.attempted,
        }
    }
}

impl From<PricingError> for OrderError {
    fn from(e: PricingError) -> Self {
        match e {
            PricingError::ProductNotFound(id) => OrderError::ProductNotFound(id),
            PricingError::Overflow(id) => OrderError::TotalOverflow(id),
            PricingError::Catalog(e) => OrderError::Catalog(e),
        }
    }
}
