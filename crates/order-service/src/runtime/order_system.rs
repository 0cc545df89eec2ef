use crate::clients::{CustomerClient, OrderClient, ProductClient};
use crate::lifecycle::OrderLifecycle;
use crate::metrics::Metrics;
use crate::model::Product;
use crate::product_actor::CatalogError;
use crate::runtime::SystemConfig;
use crate::{customer_actor, order_actor, product_actor};
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The main runtime orchestrator for the order service.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Dependency Wiring**: Handing the order store and the product catalog to the
///   [`OrderLifecycle`] engine
///
/// # Architecture
///
/// The system consists of three actors:
/// - **Order Actor**: Stores order aggregates and their items
/// - **Product Actor**: Holds the product catalog
/// - **Customer Actor**: The customer registry
///
/// # Example
///
/// ```rust
/// use order_service::model::{NewOrder, NewOrderItem, Product};
/// use order_service::runtime::OrderSystem;
/// use rust_decimal::Decimal;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = OrderSystem::new();
///     system
///         .seed_catalog(vec![Product::new("Mead Horn", "drinkware", Decimal::new(1000, 2))])
///         .await?;
///
///     let order = system
///         .orders
///         .create(NewOrder { items: vec![NewOrderItem::new(1, 2)] })
///         .await?;
///     assert_eq!(order.total_price, Decimal::new(3000, 2));
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct OrderSystem {
    /// The order lifecycle engine, backed by the order and product actors
    pub orders: OrderLifecycle<OrderClient, ProductClient>,

    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Client for interacting with the Customer actor
    pub customer_client: CustomerClient,

    /// Request counters recorded by `orders`
    pub metrics: Metrics,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl OrderSystem {
    /// Starts every actor with the default configuration.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(&SystemConfig::default())
    }

    pub fn with_config(config: &SystemConfig) -> Self {
        let buffer_size = config.buffer_size.max(1);

        let (order_actor, order_client) = order_actor::new(buffer_size);
        let (product_actor, product_client) = product_actor::new(buffer_size);
        let (customer_actor, customer_client) = customer_actor::new(buffer_size);

        let handles = vec![
            tokio::spawn(order_actor.run()),
            tokio::spawn(product_actor.run()),
            tokio::spawn(customer_actor.run()),
        ];

        let metrics = Metrics::default();
        let orders = OrderLifecycle::with_metrics(
            order_client.clone(),
            product_client.clone(),
            metrics.clone(),
        );
        info!(buffer_size, "Order system started");

        Self {
            orders,
            order_client,
            product_client,
            customer_client,
            metrics,
            handles,
        }
    }

    /// Loads `products` into the catalog.
    ///
    /// Products that carry an id keep it, so orders naming that id price against that
    /// product. Products without one are registered afterwards and numbered around the
    /// seeded ids. A repeated id fails with [`CatalogError::DuplicateProduct`].
    pub async fn seed_catalog(&self, products: Vec<Product>) -> Result<usize, CatalogError> {
        let count = products.len();
        let (identified, anonymous): (Vec<_>, Vec<_>) =
            products.into_iter().partition(|product| product.id.is_some());

        for product in identified {
            self.product_client.seed(product).await?;
        }
        for product in anonymous {
            self.product_client.register(product).await?;
        }

        info!(count, "Catalog seeded");
        Ok(count)
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops every client, which closes the actor channels, then waits for every actor task.
    /// Fails with the first task failure, after all tasks have finished.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");

        let Self {
            orders,
            order_client,
            product_client,
            customer_client,
            metrics: _,
            handles,
        } = self;
        drop(orders);
        drop(order_client);
        drop(product_client);
        drop(customer_client);

        let mut first_failure = None;
        for handle in handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                first_failure.get_or_insert(e);
            }
        }

        match first_failure {
            Some(e) => Err(e),
            None => {
                info!("System shutdown complete.");
                Ok(())
            }
        }
    }
}
