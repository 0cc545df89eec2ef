//! # Problem Bodies
//!
//! Maps lifecycle and registry errors to the structured error bodies (and HTTP status
//! codes) a transport layer would send back. No transport is served from this crate; the
//! routes these bodies belong to are:
//!
//! | Route | Success | Failures |
//! |-------|---------|----------|
//! | `GET /orders` | 200 | 503 |
//! | `GET /orders/{id}` | 200 | 404 |
//! | `POST /orders` | 201 | 400, 406 |
//! | `DELETE /orders/{id}/cancel` | 200 | 404, 405 |
//! | `PUT /orders/{id}/complete` | 200 | 404, 405 |

use crate::customer_actor::CustomerError;
use crate::lifecycle::{OrderError, Transition};
use serde::Serialize;

pub const BAD_REQUEST: u16 = 400;
pub const NOT_FOUND: u16 = 404;
pub const METHOD_NOT_ALLOWED: u16 = 405;
pub const NOT_ACCEPTABLE: u16 = 406;
pub const SERVICE_UNAVAILABLE: u16 = 503;

/// A structured error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub title: String,
    pub status: u16,
    pub detail: String,
}

impl Problem {
    pub fn new(status: u16, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status,
            detail: detail.into(),
        }
    }
}

impl From<&OrderError> for Problem {
    fn from(e: &OrderError) -> Self {
        match e {
            OrderError::InvalidOrder { reason, .. } => {
                Problem::new(BAD_REQUEST, "Invalid order", reason.to_string())
            }
            OrderError::ProductNotFound(id) => Problem::new(
                NOT_ACCEPTABLE,
                "Product not found",
                format!("Could not find product {id}"),
            ),
            OrderError::TotalOverflow(id) => Problem::new(
                BAD_REQUEST,
                "Invalid order",
                format!("Order total is out of range at product {id}"),
            ),
            OrderError::OrderNotFound(id) => Problem::new(
                NOT_FOUND,
                "Order not found",
                format!("Could not find order {id}"),
            ),
            OrderError::IllegalTransition { current, attempted } => {
                let title = match attempted {
                    Transition::Cancel => "Order can't be canceled",
                    Transition::Complete => "Method not allowed",
                };
                Problem::new(
                    METHOD_NOT_ALLOWED,
                    title,
                    format!("You can't {attempted} an order that is in the {current} status"),
                )
            }
            OrderError::Store(e) => Problem::new(SERVICE_UNAVAILABLE, "Service unavailable", e.to_string()),
            OrderError::Catalog(e) => Problem::new(SERVICE_UNAVAILABLE, "Service unavailable", e.to_string()),
        }
    }
}

impl From<&CustomerError> for Problem {
    fn from(e: &CustomerError) -> Self {
        match e {
            CustomerError::NotFound(id) => Problem::new(
                NOT_FOUND,
                "Customer not found",
                format!("Could not find customer {id}"),
            ),
            CustomerError::MissingId | CustomerError::ActorCommunicationError(_) => {
                Problem::new(SERVICE_UNAVAILABLE, "Service unavailable", e.to_string())
            }
        }
    }
}
