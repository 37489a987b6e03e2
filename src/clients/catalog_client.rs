use tracing::{debug, instrument};
use crate::actor_framework::{PageRequest, ResourceClient};
use crate::catalog_actor::CatalogError;
use crate::domain::{CatalogItem, CatalogItemCreate, CatalogPage};

/// Client for interacting with the catalog service.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<CatalogItem>,
}

impl_basic_client!(CatalogClient, CatalogItem, CatalogError, get_item);

impl CatalogClient {
    /// Fetches one page of the catalog.
    ///
    /// # Errors
    /// Returns [`CatalogError::InvalidPageRequest`] without contacting the
    /// service when `page` or `page_size` is zero.
    #[instrument(skip(self))]
    pub async fn get_catalog_page(&self, page: u32, page_size: u32) -> Result<CatalogPage, CatalogError> {
        let request = PageRequest::new(page, page_size)?;
        debug!("Sending request");
        let batch = self.inner.list(request).await?;
        debug!(items = batch.items.len(), total_count = batch.total_count, "Catalog page received");
        Ok(batch)
    }

    #[instrument(skip(self))]
    pub async fn add_item(&self, item: CatalogItemCreate) -> Result<CatalogItem, CatalogError> {
        debug!("Sending request");
        self.inner.create(item).await.map_err(CatalogError::from)
    }
}
