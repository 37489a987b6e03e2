//! Order placement: catalog aggregation, reconciliation, pricing and submission.

pub mod catalog_aggregator;
pub mod error;
pub mod order_orchestrator;
pub mod reconciliation;

pub use catalog_aggregator::*;
pub use error::*;
pub use order_orchestrator::*;
pub use reconciliation::*;
