use serde::{Deserialize, Serialize};
use crate::domain::{CatalogItem, Customer};

/// Inbound request: who is buying and which product identifiers.
///
/// Identifiers may repeat; each occurrence becomes its own line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer: Customer,
    #[serde(rename = "products-to-buy")]
    pub product_ids: Vec<String>,
}

impl OrderRequest {
    pub fn new<I, S>(customer: Customer, product_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            customer,
            product_ids: product_ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// A catalog item matched against one requested identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciledLineItem {
    #[serde(rename = "productId")]
    pub product_id: String,
    pub name: String,
    pub price: f64,
}

impl From<&CatalogItem> for ReconciledLineItem {
    fn from(item: &CatalogItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            name: item.name.clone(),
            price: item.price,
        }
    }
}

/// Payload submitted to the order backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer: Customer,
    #[serde(rename = "products-to-buy")]
    pub line_items: Vec<ReconciledLineItem>,
    #[serde(rename = "total-price")]
    pub total_price: f64,
}

/// A placed order, as returned to the caller of the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "orderId")]
    pub order_id: String,
    pub customer: Customer,
    #[serde(rename = "products-to-buy")]
    pub line_items: Vec<ReconciledLineItem>,
    #[serde(rename = "total-price")]
    pub total_price: f64,
}
