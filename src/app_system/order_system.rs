use tracing::{info, error};
use crate::actor_framework::ResourceActor;
use crate::app_system::SystemConfig;
use crate::clients::{CatalogClient, OrderBackendClient};
use crate::domain::CatalogItem;
use crate::order_backend::BackendOrder;
use crate::orchestrator::OrderOrchestrator;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// The assembled application: both services running plus the orchestrator.
///
/// Responsible for starting the service tasks, wiring the clients, and
/// handling shutdown.
pub struct OrderSystem {
    pub orchestrator: OrderOrchestrator,
    pub catalog_client: CatalogClient,
    pub order_backend_client: OrderBackendClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    pub fn new(config: &SystemConfig) -> Self {
        // 1. Catalog service
        let (catalog_actor, catalog_resource_client) =
            ResourceActor::<CatalogItem>::new(config.channel_buffer, sequential_ids("phone"));
        let catalog_client = CatalogClient::new(catalog_resource_client);
        let catalog_handle = tokio::spawn(catalog_actor.run());

        // 2. Order backend
        let (order_actor, order_resource_client) =
            ResourceActor::<BackendOrder>::new(config.channel_buffer, sequential_ids("order"));
        let order_backend_client = OrderBackendClient::new(order_resource_client);
        let order_handle = tokio::spawn(order_actor.run());

        // 3. Orchestrator over both
        let orchestrator = OrderOrchestrator::new(catalog_client.clone(), order_backend_client.clone());

        info!(channel_buffer = config.channel_buffer, "Order system started");

        Self {
            orchestrator,
            catalog_client,
            order_backend_client,
            handles: vec![catalog_handle, order_handle],
        }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // Services stop once every client handle is gone.
        drop(self.orchestrator);
        drop(self.catalog_client);
        drop(self.order_backend_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Service task failed: {:?}", e);
                return Err(format!("Service task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

fn sequential_ids(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        format!("{}_{}", prefix, id)
    }
}
