use tracing::{debug, error, info, instrument, warn};
use crate::catalog_actor::CatalogError;
use crate::clients::CatalogClient;
use crate::domain::CatalogItem;

/// Page size used when walking the catalog. Not configurable.
pub const CATALOG_PAGE_SIZE: u32 = 500;
const FIRST_PAGE: u32 = 1;

/// Materializes the whole catalog by walking its pages in order.
#[derive(Clone)]
pub struct CatalogAggregator {
    catalog_client: CatalogClient,
}

impl CatalogAggregator {
    pub fn new(catalog_client: CatalogClient) -> Self {
        Self { catalog_client }
    }

    /// Fetches pages until the accumulated item count reaches the total
    /// declared by the last page received.
    ///
    /// Failure is asymmetric: a failed fetch before any item was accumulated
    /// is returned as an error, while a failed fetch after that returns what
    /// was gathered so far. The partial result is intentional; it can cause
    /// spurious "not found" reconciliation errors but never aborts an order
    /// over a transient failure on a late page.
    #[instrument(skip(self))]
    pub async fn fetch_full_catalog(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        let mut catalog: Vec<CatalogItem> = Vec::new();
        let mut page = FIRST_PAGE;

        loop {
            let batch = match self.catalog_client.get_catalog_page(page, CATALOG_PAGE_SIZE).await {
                Ok(batch) => batch,
                Err(e) if catalog.is_empty() => {
                    error!(error = %e, page, "An error occurred while retrieving the product catalog");
                    return Err(e);
                }
                Err(e) => {
                    warn!(error = %e, page, accumulated = catalog.len(), "Catalog page failed, continuing with partial catalog");
                    break;
                }
            };

            let total_count = batch.total_count;
            let received = batch.items.len();
            catalog.extend(batch.items);
            debug!(page, received, accumulated = catalog.len(), total_count, "Catalog page accumulated");

            if (catalog.len() as u64) >= total_count {
                break;
            }
            if received == 0 && catalog.is_empty() {
                let e = CatalogError::InconsistentTotal { page, total_count };
                error!(error = %e, "An error occurred while retrieving the product catalog");
                return Err(e);
            }
            if received == 0 {
                warn!(page, accumulated = catalog.len(), total_count, "Catalog page was empty before the declared total was reached");
                break;
            }
            page += 1;
        }

        info!(items = catalog.len(), last_page = page, "Catalog retrieved");
        Ok(catalog)
    }
}
