use crate::actor_framework::Entity;
use crate::domain::{CatalogItem, CatalogItemCreate};

impl Entity for CatalogItem {
    type Id = String;
    type CreatePayload = CatalogItemCreate;

    fn id(&self) -> &String { &self.product_id }

    /// Creates a new CatalogItem from a publication payload.
    ///
    /// # Errors
    /// Rejects a blank name and any price that is negative or not finite.
    fn from_create(id: String, payload: CatalogItemCreate) -> Result<Self, String> {
        if payload.name.trim().is_empty() {
            return Err("name must not be blank".to_string());
        }
        if !payload.price.is_finite() || payload.price < 0.0 {
            return Err(format!("the price cannot be less than 0: {}", payload.price));
        }
        Ok(Self {
            product_id: id,
            name: payload.name,
            description: payload.description,
            image_url: payload.image_url,
            price: payload.price,
        })
    }
}
