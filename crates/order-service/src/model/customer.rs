use chrono::NaiveDate;
use resource_actor::StoredEntity;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub u64);

impl From<u64> for CustomerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a registered customer.
///
/// # Actor Framework
/// This struct implements [`StoredEntity`], allowing it to be managed by a
/// [`ResourceActor`](resource_actor::ResourceActor). Customers are independent of orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Option<CustomerId>,
    pub name: String,
    pub birth: NaiveDate,
    pub personal_id: String,
}

/// Payload for registering a new customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreate {
    pub name: String,
    pub birth: NaiveDate,
    pub personal_id: String,
}

impl From<CustomerCreate> for Customer {
    fn from(params: CustomerCreate) -> Self {
        Self {
            id: None,
            name: params.name,
            birth: params.birth,
            personal_id: params.personal_id,
        }
    }
}

impl StoredEntity for Customer {
    type Id = CustomerId;

    fn id(&self) -> Option<&CustomerId> {
        self.id.as_ref()
    }

    fn assign_id(&mut self, id: CustomerId) {
        self.id = Some(id);
    }
}
