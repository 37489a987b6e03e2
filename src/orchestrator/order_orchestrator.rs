use tracing::{error, info, instrument};
use crate::clients::{CatalogClient, OrderBackendClient};
use crate::domain::{NewOrder, Order, OrderRequest};
use crate::orchestrator::{reconcile, total_price, CatalogAggregator, OrderError};

/// Places orders against the catalog service and the order backend.
///
/// Holds only the two service clients, so one instance can serve any number
/// of concurrent requests. Every remote call is made at most once per order;
/// there are no retries at this level.
#[derive(Clone)]
pub struct OrderOrchestrator {
    catalog: CatalogAggregator,
    order_backend: OrderBackendClient,
}

impl OrderOrchestrator {
    pub fn new(catalog_client: CatalogClient, order_backend: OrderBackendClient) -> Self {
        Self {
            catalog: CatalogAggregator::new(catalog_client),
            order_backend,
        }
    }

    #[instrument(skip(self, request), fields(requested = request.product_ids.len()))]
    pub async fn create_order(&self, request: OrderRequest) -> Result<Order, OrderError> {
        info!("Processing create_order request");

        // Step 1: Validate request shape
        if request.product_ids.is_empty() {
            let err = OrderError::EmptyRequest;
            error!(error = %err, "Rejecting order request");
            return Err(err);
        }

        // Step 2: Retrieve the full catalog
        let catalog = match self.catalog.fetch_full_catalog().await {
            Ok(catalog) => catalog,
            Err(e) => {
                error!(error = %e, "Catalog retrieval failed");
                return Err(OrderError::CatalogUnavailable(e));
            }
        };

        // Step 3: Reconcile requested identifiers against the catalog
        let line_items = match reconcile(&request.product_ids, &catalog) {
            Ok(line_items) => line_items,
            Err(e) => {
                error!(error = %e, "Reconciliation failed");
                return Err(e);
            }
        };

        // Step 4: Price from the catalog
        let total = total_price(&line_items);
        info!(line_items = line_items.len(), total_price = total, "Order reconciled");

        // Step 5: Submit to the backend
        let payload = NewOrder {
            customer: request.customer,
            line_items,
            total_price: total,
        };
        let stored = match self.order_backend.submit_order(payload).await {
            Ok(stored) => stored,
            Err(e) => {
                error!(error = %e, "Order submission failed");
                return Err(OrderError::OrderSubmission(e));
            }
        };

        // Step 6: Translate the backend representation
        let order = Order::from(stored);
        info!(order_id = %order.order_id, "Order created successfully");
        Ok(order)
    }
}
