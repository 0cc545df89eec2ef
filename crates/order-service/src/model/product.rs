/// Represents a product in the catalog.
///
/// # Actor Framework
/// [`Product`] implements [`StoredEntity`](resource_actor::StoredEntity) and lives in the
/// product actor. The order lifecycle only ever reads it, through
/// [`ProductCatalog`](crate::lifecycle::ProductCatalog).
///
/// The serde shape matches the catalog seed file: `id`, `title`, `category`, `price`, with
/// any other fields (description, rating, brand) ignored.
use resource_actor::StoredEntity;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<ProductId>,
    pub title: String,
    #[serde(default)]
    pub category: String,
    pub price: Decimal,
}

impl Product {
    /// Creates a new, unsaved Product.
    ///
    /// # Arguments
    /// * `title` - Product name
    /// * `category` - Catalog category
    /// * `price` - Unit price
    pub fn new(title: impl Into<String>, category: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: None,
            title: title.into(),
            category: category.into(),
            price,
        }
    }
}

impl StoredEntity for Product {
    type Id = ProductId;

    fn id(&self) -> Option<&ProductId> {
        self.id.as_ref()
    }

    fn assign_id(&mut self, id: ProductId) {
        self.id = Some(id);
    }
}
