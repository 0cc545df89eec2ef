//! # Order Lifecycle Service
//!
//! [`OrderLifecycle`] ties validation, pricing and the state machine to an
//! [`OrderStore`] and a [`ProductCatalog`] injected at construction.
//!
//! ## Create
//!
//! ```text
//! NewOrder ─▶ validate ─▶ compute_total ─▶ Order::open ─▶ store.save ─▶ Order (OPEN)
//!               │              │
//!               ▼              ▼
//!         InvalidOrder   ProductNotFound / Catalog      (nothing persisted)
//! ```
//!
//! ## Observability
//!
//! Every operation counts one request in [`Metrics`] as it starts and runs in a span
//! carrying a fresh `trace_id`.
//!
//! ## Cancel / Complete
//!
//! Load the order, apply the transition, save. A rejected transition saves nothing. The
//! load and the save are two separate store calls, so two transitions racing on the same
//! order are settled by whichever save lands last.

use crate::lifecycle::{
    compute_total, validate, OrderError, OrderStore, ProductCatalog, Transition,
};
use crate::metrics::{Metrics, Operation};
use crate::model::{NewOrder, Order, OrderId, OrderItem};
use tracing::{info, instrument, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct OrderLifecycle<S, C> {
    store: S,
    catalog: C,
    metrics: Metrics,
}

impl<S: OrderStore, C: ProductCatalog> OrderLifecycle<S, C> {
    /// Creates a lifecycle with its own, private metrics registry.
    pub fn new(store: S, catalog: C) -> Self {
        Self::with_metrics(store, catalog, Metrics::default())
    }

    /// Creates a lifecycle that records into `metrics`.
    pub fn with_metrics(store: S, catalog: C, metrics: Metrics) -> Self {
        Self {
            store,
            catalog,
            metrics,
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Validates, prices and persists a new order in the `OPEN` status.
    #[instrument(skip(self, request), fields(trace_id = %Uuid::new_v4(), items = request.items.len()))]
    pub async fn create(&self, request: NewOrder) -> Result<Order, OrderError> {
        self.metrics.record_request(Operation::Create);
        let validated = match validate(&request) {
            Ok(validated) => validated,
            Err(reason) => {
                warn!(%reason, "Order rejected");
                return Err(OrderError::InvalidOrder { reason, request });
            }
        };

        let total = compute_total(validated.items(), &self.catalog)
            .await
            .inspect_err(|e| warn!(error = %e, "Order pricing failed"))?;

        let items = validated
            .items()
            .iter()
            .map(|item| OrderItem {
                id: None,
                product_id: item.product_id,
                quantity: item.quantity,
            })
            .collect();

        let saved = self.store.save(Order::open(items, total)).await?;
        info!(order_id = ?saved.id, total_price = %saved.total_price, "Order created");
        Ok(saved)
    }

    #[instrument(skip(self), fields(trace_id = %Uuid::new_v4()))]
    pub async fn get(&self, id: OrderId) -> Result<Order, OrderError> {
        self.metrics.record_request(Operation::Get);
        self.find(id).await
    }

    #[instrument(skip(self), fields(trace_id = %Uuid::new_v4()))]
    pub async fn list(&self) -> Result<Vec<Order>, OrderError> {
        self.metrics.record_request(Operation::List);
        Ok(self.store.find_all().await?)
    }

    /// Moves an open order to `CANCELLED`.
    #[instrument(skip(self), fields(trace_id = %Uuid::new_v4()))]
    pub async fn cancel(&self, id: OrderId) -> Result<Order, OrderError> {
        self.metrics.record_request(Operation::Cancel);
        self.transition(id, Transition::Cancel).await
    }

    /// Moves an open order to `COMPLETED`.
    #[instrument(skip(self), fields(trace_id = %Uuid::new_v4()))]
    pub async fn complete(&self, id: OrderId) -> Result<Order, OrderError> {
        self.metrics.record_request(Operation::Complete);
        self.transition(id, Transition::Complete).await
    }

    async fn find(&self, id: OrderId) -> Result<Order, OrderError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(OrderError::OrderNotFound(id))
    }

    async fn transition(&self, id: OrderId, transition: Transition) -> Result<Order, OrderError> {
        let mut order = self.find(id).await.inspect_err(|e| {
            if let OrderError::OrderNotFound(_) = e {
                warn!("Order not found");
            }
        })?;

        order.status = order
            .status
            .apply(transition)
            .inspect_err(|e| warn!(current = %e.current, "Transition rejected"))?;

        let saved = self.store.save(order).await?;
        info!(status = %saved.status, "Order transitioned");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::ValidationError;
    use crate::model::{NewOrderItem, OrderItemId, OrderStatus, Product, ProductId};
    use crate::order_actor::StoreError;
    use crate::product_actor::CatalogError;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    // --- In-memory fakes ---

    #[derive(Default)]
    struct StoreState {
        orders: BTreeMap<OrderId, Order>,
        next_order: u64,
        next_item: u64,
        saves: usize,
    }

    #[derive(Clone, Default)]
    struct FakeStore {
        state: Arc<Mutex<StoreState>>,
    }

    impl FakeStore {
        fn saves(&self) -> usize {
            self.state.lock().unwrap().saves
        }

        fn stored(&self, id: OrderId) -> Option<Order> {
            self.state.lock().unwrap().orders.get(&id).cloned()
        }
    }

    #[async_trait]
    impl OrderStore for FakeStore {
        async fn save(&self, mut order: Order) -> Result<Order, StoreError> {
            let mut state = self.state.lock().unwrap();
            state.saves += 1;
            let id = match order.id {
                Some(id) => id,
                None => {
                    state.next_order += 1;
                    OrderId(state.next_order)
                }
            };
            order.id = Some(id);
            for item in order.items.iter_mut().filter(|i| i.id.is_none()) {
                state.next_item += 1;
                item.id = Some(OrderItemId(state.next_item));
            }
            state.orders.insert(id, order.clone());
            Ok(order)
        }

        async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
            Ok(self.state.lock().unwrap().orders.get(&id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<Order>, StoreError> {
            Ok(self.state.lock().unwrap().orders.values().cloned().collect())
        }
    }

    #[derive(Clone, Default)]
    struct FakeCatalog {
        products: BTreeMap<ProductId, Product>,
    }

    impl FakeCatalog {
        fn with(mut self, id: u64, price: rust_decimal::Decimal) -> Self {
            let mut product = Product::new(format!("P{id}"), "test", price);
            product.id = Some(ProductId(id));
            self.products.insert(ProductId(id), product);
            self
        }
    }

    #[async_trait]
    impl ProductCatalog for FakeCatalog {
        async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
            Ok(self.products.get(&id).cloned())
        }
    }

    struct DownStore;

    #[async_trait]
    impl OrderStore for DownStore {
        async fn save(&self, _order: Order) -> Result<Order, StoreError> {
            Err(StoreError::ActorCommunicationError("Actor closed".to_string()))
        }

        async fn find_by_id(&self, _id: OrderId) -> Result<Option<Order>, StoreError> {
            Err(StoreError::ActorCommunicationError("Actor closed".to_string()))
        }

        async fn find_all(&self) -> Result<Vec<Order>, StoreError> {
            Err(StoreError::ActorCommunicationError("Actor closed".to_string()))
        }
    }

    fn setup() -> (OrderLifecycle<FakeStore, FakeCatalog>, FakeStore) {
        let store = FakeStore::default();
        let catalog = FakeCatalog::default().with(1, dec!(10.00)).with(2, dec!(2.50));
        (OrderLifecycle::new(store.clone(), catalog), store)
    }

    fn request(items: &[(u64, i32)]) -> NewOrder {
        NewOrder {
            items: items
                .iter()
                .map(|&(product, quantity)| NewOrderItem::new(product, quantity))
                .collect(),
        }
    }

    // --- Create ---

    #[tokio::test]
    async fn test_create_prices_and_opens_order() {
        let (lifecycle, store) = setup();

        let order = lifecycle.create(request(&[(1, 2), (2, 3)])).await.unwrap();

        assert_eq!(order.status, OrderStatus::Open);
        assert_eq!(order.total_price, dec!(40.00));
        let id = order.id.expect("order should have an id");
        assert!(order.items.iter().all(|item| item.id.is_some()));
        assert_eq!(store.stored(id), Some(order));
    }

    #[tokio::test]
    async fn test_create_single_item() {
        let (lifecycle, _store) = setup();
        let order = lifecycle.create(request(&[(1, 2)])).await.unwrap();
        assert_eq!(order.total_price, dec!(30.00));
    }

    #[tokio::test]
    async fn test_create_empty_order_persists_nothing() {
        let (lifecycle, store) = setup();

        let err = lifecycle.create(NewOrder::default()).await.unwrap_err();

        assert_eq!(
            err,
            OrderError::InvalidOrder {
                reason: ValidationError::EmptyItems,
                request: NewOrder::default(),
            }
        );
        assert_eq!(store.saves(), 0);
    }

    #[tokio::test]
    async fn test_create_unknown_product_persists_nothing() {
        let (lifecycle, store) = setup();

        let err = lifecycle.create(request(&[(1, 1), (99, 1)])).await.unwrap_err();

        assert_eq!(err, OrderError::ProductNotFound(ProductId(99)));
        assert_eq!(store.saves(), 0);
        assert!(lifecycle.list().await.unwrap().is_empty());
    }

    // --- Transitions ---

    #[tokio::test]
    async fn test_complete_keeps_total_then_cancel_is_illegal() {
        let (lifecycle, store) = setup();
        let id = lifecycle.create(request(&[(1, 2)])).await.unwrap().id.unwrap();

        let completed = lifecycle.complete(id).await.unwrap();
        assert_eq!(completed.status, OrderStatus::Completed);
        assert_eq!(completed.total_price, dec!(30.00));

        let saves = store.saves();
        let err = lifecycle.cancel(id).await.unwrap_err();
        assert_eq!(
            err,
            OrderError::IllegalTransition {
                current: OrderStatus::Completed,
                attempted: Transition::Cancel,
            }
        );
        assert_eq!(store.saves(), saves);
        assert_eq!(lifecycle.get(id).await.unwrap().status, OrderStatus::Completed);
    }

    #[tokio::test]
    async fn test_cancel_twice() {
        let (lifecycle, _store) = setup();
        let id = lifecycle.create(request(&[(2, 1)])).await.unwrap().id.unwrap();

        assert_eq!(lifecycle.cancel(id).await.unwrap().status, OrderStatus::Cancelled);
        assert_eq!(
            lifecycle.cancel(id).await.unwrap_err(),
            OrderError::IllegalTransition {
                current: OrderStatus::Cancelled,
                attempted: Transition::Cancel,
            }
        );
        assert_eq!(
            lifecycle.complete(id).await.unwrap_err(),
            OrderError::IllegalTransition {
                current: OrderStatus::Cancelled,
                attempted: Transition::Complete,
            }
        );
    }

    #[tokio::test]
    async fn test_transition_on_unknown_order() {
        let (lifecycle, store) = setup();

        assert_eq!(
            lifecycle.cancel(OrderId(7)).await.unwrap_err(),
            OrderError::OrderNotFound(OrderId(7))
        );
        assert_eq!(
            lifecycle.complete(OrderId(7)).await.unwrap_err(),
            OrderError::OrderNotFound(OrderId(7))
        );
        assert_eq!(store.saves(), 0);
    }

    // --- Reads ---

    #[tokio::test]
    async fn test_get_and_list() {
        let (lifecycle, _store) = setup();
        assert!(lifecycle.list().await.unwrap().is_empty());
        assert_eq!(
            lifecycle.get(OrderId(1)).await.unwrap_err(),
            OrderError::OrderNotFound(OrderId(1))
        );

        let first = lifecycle.create(request(&[(1, 0)])).await.unwrap();
        let second = lifecycle.create(request(&[(2, 0)])).await.unwrap();

        assert_eq!(lifecycle.get(OrderId(1)).await.unwrap(), first);
        assert_eq!(lifecycle.list().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_unreachable_store_surfaces_as_store_error() {
        let lifecycle = OrderLifecycle::new(DownStore, FakeCatalog::default().with(1, dec!(1)));

        assert!(matches!(lifecycle.list().await, Err(OrderError::Store(_))));
        assert!(matches!(lifecycle.get(OrderId(1)).await, Err(OrderError::Store(_))));
        assert!(matches!(
            lifecycle.create(request(&[(1, 1)])).await,
            Err(OrderError::Store(_))
        ));
    }

    #[tokio::test]
    async fn test_overflowing_total_persists_nothing() {
        let store = FakeStore::default();
        let catalog = FakeCatalog::default().with(1, rust_decimal::Decimal::MAX);
        let lifecycle = OrderLifecycle::new(store.clone(), catalog);

        let err = lifecycle.create(request(&[(1, 1)])).await.unwrap_err();

        assert_eq!(err, OrderError::TotalOverflow(ProductId(1)));
        assert_eq!(store.saves(), 0);
    }

    // --- Metrics ---

    #[tokio::test]
    async fn test_every_request_is_counted() {
        let (lifecycle, _store) = setup();
        let metrics = lifecycle.metrics().clone();

        let id = lifecycle.create(request(&[(1, 1)])).await.unwrap().id.unwrap();
        let _ = lifecycle.create(NewOrder::default()).await;
        lifecycle.get(id).await.unwrap();
        lifecycle.list().await.unwrap();
        lifecycle.cancel(id).await.unwrap();
        let _ = lifecycle.cancel(id).await;
        let _ = lifecycle.complete(OrderId(99)).await;

        assert_eq!(metrics.requests(Operation::Create), 2);
        assert_eq!(metrics.requests(Operation::Get), 1);
        assert_eq!(metrics.requests(Operation::List), 1);
        assert_eq!(metrics.requests(Operation::Cancel), 2);
        assert_eq!(metrics.requests(Operation::Complete), 1);
    }

    #[tokio::test]
    async fn test_shared_metrics() {
        let metrics = Metrics::new().unwrap();
        let catalog = FakeCatalog::default().with(1, dec!(1));
        let first = OrderLifecycle::with_metrics(FakeStore::default(), catalog.clone(), metrics.clone());
        let second = OrderLifecycle::with_metrics(FakeStore::default(), catalog, metrics.clone());

        first.list().await.unwrap();
        second.list().await.unwrap();

        assert_eq!(metrics.requests(Operation::List), 2);
    }
}
