//! # Order Orchestrator
//!
//! Places orders priced from a paginated remote catalog and submits them to
//! an independent order backend.
//!
//! - **Services** - the catalog and the order backend, each a task draining a
//!   request channel → [`actor_framework::ResourceActor`]
//! - **Clients** - cloneable, traced handles to those services → [`CatalogClient`], [`OrderBackendClient`]
//! - **Orchestration** - full-catalog aggregation, reconciliation, pricing,
//!   submission → [`CatalogAggregator`], [`OrderOrchestrator`]
//! - **Boundary** - request validation and structured error responses → [`boundary::place_order`]
//! - **System** - startup, shutdown, config and tracing → [`OrderSystem`], [`setup_tracing`]
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use order_orchestrator::{Customer, OrderRequest, OrderSystem, SystemConfig};
//!
//! let system = OrderSystem::new(&SystemConfig::from_env());
//! let request = OrderRequest::new(Customer::new("Jane", "Doe", "jane@x.com"), ["phone_1"]);
//! let order = system.orchestrator.create_order(request).await?;
//! println!("{} costs {}", order.order_id, order.total_price);
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod boundary;
pub mod catalog_actor;
pub mod clients;
pub mod domain;
pub mod order_backend;
pub mod orchestrator;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, OrderSystem, SystemConfig};
pub use clients::{CatalogClient, OrderBackendClient};
pub use domain::{CatalogItem, Customer, Order, OrderRequest};
pub use orchestrator::{CatalogAggregator, OrderError, OrderOrchestrator};
