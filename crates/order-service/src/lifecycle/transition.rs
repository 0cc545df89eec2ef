//! The order state machine.
//!
//! ```text
//!          cancel
//!   OPEN ─────────▶ CANCELLED
//!     │
//!     │ complete
//!     ▼
//!  COMPLETED
//! ```
//!
//! Terminal states accept no transition at all, including the one that led to them.

use crate::model::OrderStatus;
use serde::Serialize;
use std::fmt::Display;
use thiserror::Error;

/// A requested status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    Cancel,
    Complete,
}

impl Transition {
    /// The status an open order reaches through this transition.
    pub fn target(self) -> OrderStatus {
        match self {
            Transition::Cancel => OrderStatus::Cancelled,
            Transition::Complete => OrderStatus::Completed,
        }
    }
}

impl Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Transition::Cancel => "cancel",
            Transition::Complete => "complete",
        })
    }
}

/// A transition attempted from a status that does not allow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot {attempted} an order that is {current}")]
pub struct IllegalTransition {
    pub current: OrderStatus,
    pub attempted: Transition,
}

impl OrderStatus {
    /// Computes the status reached by applying `transition`.
    ///
    /// Only an open order moves; every other pairing is rejected.
    pub fn apply(self, transition: Transition) -> Result<OrderStatus, IllegalTransition> {
        match (self, transition) {
            (OrderStatus::Open, Transition::Cancel | Transition::Complete) => Ok(transition.target()),
            (OrderStatus::Cancelled | OrderStatus::Completed, attempted) => Err(IllegalTransition {
                current: self,
                attempted,
            }),
        }
    }
}
