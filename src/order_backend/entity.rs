use serde::{Deserialize, Serialize};
use crate::actor_framework::Entity;
use crate::domain::{Customer, NewOrder, Order, ReconciledLineItem};

/// An order as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendOrder {
    #[serde(rename = "orderId")]
    pub order_id: String,
    pub customer: Customer,
    #[serde(rename = "products-to-buy")]
    pub line_items: Vec<ReconciledLineItem>,
    #[serde(rename = "total-price")]
    pub total_price: f64,
}

impl Entity for BackendOrder {
    type Id = String;
    type CreatePayload = NewOrder;

    fn id(&self) -> &String { &self.order_id }

    fn from_create(id: String, payload: NewOrder) -> Result<Self, String> {
        Ok(Self {
            order_id: id,
            customer: payload.customer,
            line_items: payload.line_items,
            total_price: payload.total_price,
        })
    }

    /// Refuses orders whose total disagrees with their line items.
    fn on_create(&mut self) -> Result<(), String> {
        if self.line_items.is_empty() {
            return Err("an order needs at least one line item".to_string());
        }
        let expected: f64 = self.line_items.iter().map(|item| item.price).sum();
        if (expected - self.total_price).abs() > 1e-6 {
            return Err(format!("total price {} does not match line items ({})", self.total_price, expected));
        }
        Ok(())
    }
}

impl From<BackendOrder> for Order {
    fn from(stored: BackendOrder) -> Self {
        Self {
            order_id: stored.order_id,
            customer: stored.customer,
            line_items: stored.line_items,
            total_price: stored.total_price,
        }
    }
}
