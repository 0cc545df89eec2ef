//! Server-side order pricing.

use crate::lifecycle::ProductCatalog;
use crate::model::{NewOrderItem, ProductId};
use crate::product_actor::CatalogError;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("Could not find product {0}")]
    ProductNotFound(ProductId),

    /// The line or running total no longer fits in a `Decimal`.
    #[error("Order total overflows at product {0}")]
    Overflow(ProductId),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// The charge for one line: the unit price times one more than the quantity.
///
/// `None` when the result does not fit in a `Decimal`.
pub fn line_total(unit_price: Decimal, quantity: i32) -> Option<Decimal> {
    Decimal::from(quantity)
        .checked_add(Decimal::ONE)
        .and_then(|units| unit_price.checked_mul(units))
}

/// Sums [`line_total`] over `items`, looking each product up in `catalog` in order.
///
/// The first product the catalog does not know stops the computation.
pub async fn compute_total<C>(items: &[NewOrderItem], catalog: &C) -> Result<Decimal, PricingError>
where
    C: ProductCatalog + ?Sized,
{
    let mut total = Decimal::ZERO;
    for item in items {
        let product = catalog
            .find_by_id(item.product_id)
            .await?
            .ok_or(PricingError::ProductNotFound(item.product_id))?;
        let line = line_total(product.price, item.quantity)
            .ok_or(PricingError::Overflow(item.product_id))?;
        debug!(product_id = %item.product_id, quantity = item.quantity, %line, "Priced line");
        total = total
            .checked_add(line)
            .ok_or(PricingError::Overflow(item.product_id))?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Catalog over a fixed price list that records every lookup.
    struct PriceList {
        prices: HashMap<ProductId, Decimal>,
        lookups: Mutex<Vec<ProductId>>,
    }

    impl PriceList {
        fn new(prices: &[(u64, Decimal)]) -> Self {
            Self {
                prices: prices.iter().map(|&(id, price)| (ProductId(id), price)).collect(),
                lookups: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ProductCatalog for PriceList {
        async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
            self.lookups.lock().unwrap().push(id);
            Ok(self.prices.get(&id).map(|&price| Product {
                id: Some(id),
                title: format!("product {id}"),
                category: "test".to_string(),
                price,
            }))
        }
    }

    struct Unreachable;

    #[async_trait]
    impl ProductCatalog for Unreachable {
        async fn find_by_id(&self, _id: ProductId) -> Result<Option<Product>, CatalogError> {
            Err(CatalogError::ActorCommunicationError("Actor closed".to_string()))
        }
    }

    #[test]
    fn test_line_total_charges_one_extra_unit() {
        assert_eq!(line_total(dec!(10.00), 2), Some(dec!(30.00)));
        assert_eq!(line_total(dec!(4.99), 0), Some(dec!(4.99)));
        assert_eq!(line_total(dec!(5), -1), Some(dec!(0)));
        assert_eq!(line_total(dec!(5), -3), Some(dec!(-10)));
    }

    #[test]
    fn test_line_total_out_of_range() {
        assert_eq!(line_total(Decimal::MAX, 1), None);
        assert_eq!(line_total(Decimal::MAX, 0), Some(Decimal::MAX));
    }

    #[tokio::test]
    async fn test_overflowing_total_is_an_error() {
        let catalog = PriceList::new(&[(1, Decimal::MAX), (2, dec!(1))]);

        let single = compute_total(&[NewOrderItem::new(1, 1)], &catalog).await;
        assert_eq!(single, Err(PricingError::Overflow(ProductId(1))));

        let summed = compute_total(&[NewOrderItem::new(1, 0), NewOrderItem::new(2, 0)], &catalog).await;
        assert_eq!(summed, Err(PricingError::Overflow(ProductId(2))));
    }

    #[tokio::test]
    async fn test_total_sums_exactly() {
        let catalog = PriceList::new(&[(1, dec!(0.10)), (2, dec!(0.20))]);
        let items = [NewOrderItem::new(1, 2), NewOrderItem::new(2, 1)];

        let total = compute_total(&items, &catalog).await.unwrap();

        assert_eq!(total, dec!(0.70));
    }

    #[tokio::test]
    async fn test_first_unknown_product_stops_pricing() {
        let catalog = PriceList::new(&[(1, dec!(1))]);
        let items = [
            NewOrderItem::new(1, 1),
            NewOrderItem::new(8, 1),
            NewOrderItem::new(9, 1),
        ];

        let result = compute_total(&items, &catalog).await;

        assert_eq!(result, Err(PricingError::ProductNotFound(ProductId(8))));
        assert_eq!(*catalog.lookups.lock().unwrap(), vec![ProductId(1), ProductId(8)]);
    }

    #[tokio::test]
    async fn test_unreachable_catalog_is_not_a_partial_total() {
        let result = compute_total(&[NewOrderItem::new(1, 1)], &Unreachable).await;
        assert!(matches!(result, Err(PricingError::Catalog(_))));
    }
}
