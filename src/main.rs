use tracing::{error, info, Instrument};
use order_orchestrator::boundary::place_order;
use order_orchestrator::domain::{CatalogItemCreate, Customer, OrderRequest};
use order_orchestrator::{setup_tracing, OrderSystem, SystemConfig};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = SystemConfig::from_env();
    setup_tracing(&config);

    info!("Starting order system");
    let system = OrderSystem::new(&config);

    // Publish a small catalog
    let span = tracing::info_span!("catalog_seeding");
    let product_ids = async {
        let mut ids = Vec::new();
        for (name, price) in [("Phone A", 100.0), ("Phone B", 600.0), ("Phone C", 50.0)] {
            let item = system.catalog_client
                .add_item(CatalogItemCreate::new(name, price).with_description(format!("{} smartphone", name)))
                .await
                .map_err(|e| e.to_string())?;
            info!(product_id = %item.product_id, price = item.price, "Catalog item published");
            ids.push(item.product_id);
        }
        Ok::<_, String>(ids)
    }
    .instrument(span)
    .await?;

    let customer = Customer::new("Jane", "Doe", "jane@example.com");

    // One order that succeeds, one that names an unknown product
    let requests = [
        OrderRequest::new(customer.clone(), [product_ids[0].clone(), product_ids[1].clone()]),
        OrderRequest::new(customer, [product_ids[0].clone(), "phone_404".to_string()]),
    ];
    for request in requests {
        let span = tracing::info_span!("order_processing");
        match place_order(&system.orchestrator, request).instrument(span).await {
            Ok(order) => info!(order_id = %order.order_id, total_price = order.total_price, "Order placed"),
            Err(response) => error!(
                status = response.status,
                operation_id = %response.operation_id,
                error = %response.error_message,
                "Order rejected"
            ),
        }
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
