//! Structural checks on an incoming order request, run before any catalog access.

use crate::model::{NewOrder, NewOrderItem};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Order items not informed correctly")]
    EmptyItems,
}

/// A request that passed validation. Only [`validate`] can build one.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedOrder<'a> {
    items: &'a [NewOrderItem],
}

impl<'a> ValidatedOrder<'a> {
    /// The requested items, never empty.
    pub fn items(&self) -> &'a [NewOrderItem] {
        self.items
    }
}

/// Rejects a request with no items. Quantities and product references are not checked
/// here; unknown products surface during pricing.
pub fn validate(candidate: &NewOrder) -> Result<ValidatedOrder<'_>, ValidationError> {
    if candidate.items.is_empty() {
        return Err(ValidationError::EmptyItems);
    }
    Ok(ValidatedOrder {
        items: &candidate.items,
    })
}
