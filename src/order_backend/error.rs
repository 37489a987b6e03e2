use thiserror::Error;
use crate::actor_framework::FrameworkError;

/// Errors that can occur while talking to the order backend.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderBackendError {
    #[error("Invalid order payload: {0}")]
    InvalidPayload(String),
    #[error("Order rejected: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderBackendError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Rejected(reason) => OrderBackendError::Rejected(reason),
            other => OrderBackendError::ActorCommunicationError(other.to_string()),
        }
    }
}
