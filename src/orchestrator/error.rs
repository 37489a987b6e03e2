use thiserror::Error;
use crate::catalog_actor::CatalogError;
use crate::order_backend::OrderBackendError;

/// Every way an order placement can fail.
///
/// Remote failures keep their cause as the error source; the display message
/// stays stable whatever the transport reported.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Error. The list of product identifiers is empty")]
    EmptyRequest,
    #[error("An error occurred while retrieving the product catalog")]
    CatalogUnavailable(#[source] CatalogError),
    #[error("Cannot continue with order creation. The following product identifiers have not been found: {}", .0.join(", "))]
    UnknownProducts(Vec<String>),
    #[error("An error occurred creating the order")]
    OrderSubmission(#[source] OrderBackendError),
}

impl OrderError {
    /// Whether the caller's request is at fault rather than a remote service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, OrderError::EmptyRequest | OrderError::UnknownProducts(_))
    }
}
