use tracing::{debug, error, instrument};
use crate::actor_framework::ResourceClient;
use crate::domain::NewOrder;
use crate::order_backend::{BackendOrder, OrderBackendError};

/// Client for interacting with the order backend.
#[derive(Clone)]
pub struct OrderBackendClient {
    inner: ResourceClient<BackendOrder>,
}

impl_basic_client!(OrderBackendClient, BackendOrder, OrderBackendError, get_order);

impl OrderBackendClient {
    /// Submits a composed order and returns it with its assigned identifier.
    ///
    /// # Errors
    /// Returns [`OrderBackendError::InvalidPayload`] without contacting the
    /// backend when the payload is malformed.
    #[instrument(skip(self, order), fields(line_items = order.line_items.len(), total_price = order.total_price))]
    pub async fn submit_order(&self, order: NewOrder) -> Result<BackendOrder, OrderBackendError> {
        if let Err(reason) = check_payload(&order) {
            error!(%reason, "Refusing malformed order payload");
            return Err(OrderBackendError::InvalidPayload(reason));
        }
        debug!("Sending request");
        self.inner.create(order).await.map_err(OrderBackendError::from)
    }
}

fn check_payload(order: &NewOrder) -> Result<(), String> {
    let customer = &order.customer;
    if customer.name.trim().is_empty()
        || customer.surname.trim().is_empty()
        || customer.email.trim().is_empty()
    {
        return Err("customer data is incomplete".to_string());
    }
    if order.line_items.is_empty() {
        return Err("the order has no line items".to_string());
    }
    if !order.total_price.is_finite() || order.total_price < 0.0 {
        return Err(format!("invalid total price: {}", order.total_price));
    }
    Ok(())
}
