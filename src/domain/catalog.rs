use serde::{Deserialize, Serialize};
use crate::actor_framework::Page;

/// A purchasable product as published by the catalog service.
///
/// The price is authoritative: order totals are always computed from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(rename = "productId")]
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "imageURL", default)]
    pub image_url: String,
    pub price: f64,
}

impl CatalogItem {
    pub fn new(product_id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            description: String::new(),
            image_url: String::new(),
            price,
        }
    }
}

/// Payload for publishing a new catalog item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItemCreate {
    pub name: String,
    pub description: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub price: f64,
}

impl CatalogItemCreate {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            image_url: String::new(),
            price,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }
}

/// One page of the catalog listing.
pub type CatalogPage = Page<CatalogItem>;
