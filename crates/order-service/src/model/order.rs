/// Represents a customer order and its line items.
///
/// # Actor Framework
/// [`Order`] implements [`StoredEntity`](resource_actor::StoredEntity), so it is persisted
/// by a [`ResourceActor`](resource_actor::ResourceActor). The order is the aggregate root:
/// its [`OrderItem`]s are saved, replaced and dropped together with it, and receive their
/// identities from the actor's child sequence in [`Order::on_save`](resource_actor::StoredEntity::on_save).
///
/// Inbound requests use [`NewOrder`], which carries no identities, status or price.
use crate::model::ProductId;
use resource_actor::{IdSequence, StoredEntity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe identifier for order line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderItemId(pub u64);

impl From<u64> for OrderItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where an order is in its lifecycle.
///
/// `Open` is the only state a new order can be in. `Cancelled` and `Completed` are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Open,
    Cancelled,
    Completed,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Open => "OPEN",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Completed => "COMPLETED",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Option<OrderId>,
    pub status: OrderStatus,
    pub total_price: Decimal,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: Option<OrderItemId>,
    pub product_id: ProductId,
    /// Not range-checked; zero and negative quantities are priced as given.
    pub quantity: i32,
}

impl Order {
    /// Builds an unsaved, open order from priced items.
    pub fn open(items: Vec<OrderItem>, total_price: Decimal) -> Self {
        Self {
            id: None,
            status: OrderStatus::Open,
            total_price,
            items,
        }
    }
}

impl StoredEntity for Order {
    type Id = OrderId;

    fn id(&self) -> Option<&OrderId> {
        self.id.as_ref()
    }

    fn assign_id(&mut self, id: OrderId) {
        self.id = Some(id);
    }

    fn on_save(&mut self, child_ids: &mut IdSequence) {
        for item in self.items.iter_mut().filter(|item| item.id.is_none()) {
            item.id = Some(child_ids.next_id());
        }
    }
}

/// Payload for creating a new order.
///
/// A missing `items` field deserializes as an empty list, which validation rejects.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewOrder {
    #[serde(default)]
    pub items: Vec<NewOrderItem>,
}

/// One requested line: a product and how many of it.
///
/// Accepts both `{"productId": 1}` and the nested `{"product": {"id": 1}}` form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderItem {
    #[serde(alias = "product", deserialize_with = "product_ref::deserialize")]
    pub product_id: ProductId,
    pub quantity: i32,
}

impl NewOrderItem {
    pub fn new(product_id: impl Into<ProductId>, quantity: i32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

mod product_ref {
    use crate::model::ProductId;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ProductRef {
        Id(ProductId),
        Nested { id: ProductId },
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ProductId, D::Error> {
        Ok(match ProductRef::deserialize(deserializer)? {
            ProductRef::Id(id) | ProductRef::Nested { id } => id,
        })
    }
}
