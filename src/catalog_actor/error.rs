use thiserror::Error;
use crate::actor_framework::FrameworkError;

/// Errors that can occur while talking to the catalog service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Invalid page request: page {page}, page size {page_size}")]
    InvalidPageRequest { page: u32, page_size: u32 },
    #[error("Catalog item rejected: {0}")]
    Rejected(String),
    #[error("Catalog declared {total_count} items but page {page} was empty")]
    InconsistentTotal { page: u32, total_count: u64 },
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CatalogError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::InvalidPageRequest { page, page_size } => {
                CatalogError::InvalidPageRequest { page, page_size }
            }
            FrameworkError::Rejected(reason) => CatalogError::Rejected(reason),
            other => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}
