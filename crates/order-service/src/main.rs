//! # Order Service
//!
//! Starts the actors, seeds the catalog and walks one order through its lifecycle.
//!
//! Configuration comes from the environment (see [`order_service::runtime::config`]).
//! Without `ORDER_SERVICE_CATALOG` a small built-in catalog is used.

use chrono::NaiveDate;
use order_service::lifecycle::OrderError;
use order_service::model::{CustomerCreate, NewOrder, NewOrderItem, Product};
use order_service::problem::Problem;
use order_service::runtime::{load_catalog, setup_tracing, OrderSystem, SystemConfig};
use rust_decimal::Decimal;
use tracing::{error, info, warn, Instrument};

fn demo_catalog() -> Vec<Product> {
    vec![
        Product::new("Skyforge Hammer", "tools", Decimal::new(54900, 2)),
        Product::new("Round Shield", "armor", Decimal::new(1296, 2)),
        Product::new("Mead Horn", "drinkware", Decimal::new(1000, 2)),
    ]
}

fn report(e: &OrderError) {
    let problem = Problem::from(e);
    match serde_json::to_string(&problem) {
        Ok(body) => warn!(status = problem.status, %body, "Request rejected"),
        Err(json_error) => error!(error = %json_error, "Could not encode problem"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = SystemConfig::from_env().inspect_err(|e| error!(error = %e, "Bad configuration"))?;
    info!(?config, "Starting order service");

    let system = OrderSystem::with_config(&config);

    let products = match &config.catalog_path {
        Some(path) => load_catalog(path)?,
        None => demo_catalog(),
    };
    system.seed_catalog(products).await?;

    let customer_id = system
        .customer_client
        .register(CustomerCreate {
            name: "Ragnar Lothbrok".to_string(),
            birth: NaiveDate::from_ymd_opt(1990, 4, 12).ok_or("invalid birth date")?,
            personal_id: "123.456.789-00".to_string(),
        })
        .await?;
    info!(%customer_id, "Customer registered");

    let span = tracing::info_span!("order_processing");
    async {
        let request = NewOrder {
            items: vec![NewOrderItem::new(1, 2), NewOrderItem::new(3, 1)],
        };
        let order = match system.orders.create(request).await {
            Ok(order) => order,
            Err(e) => {
                report(&e);
                return;
            }
        };
        let Some(id) = order.id else {
            error!("Stored order has no id");
            return;
        };
        info!(%id, total_price = %order.total_price, "Order placed");

        match system.orders.complete(id).await {
            Ok(order) => info!(%id, status = %order.status, "Order completed"),
            Err(e) => report(&e),
        }

        // A completed order can no longer be cancelled.
        if let Err(e) = system.orders.cancel(id).await {
            report(&e);
        }

        // Neither can an order with no items be placed.
        if let Err(e) = system.orders.create(NewOrder::default()).await {
            report(&e);
        }
    }
    .instrument(span)
    .await;

    let orders = system.orders.list().await?;
    info!(count = orders.len(), "Orders on file");

    match system.metrics.render() {
        Ok(text) => info!(metrics = %text, "Request metrics"),
        Err(e) => warn!(error = %e, "Could not render metrics"),
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
