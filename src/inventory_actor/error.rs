use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::ProductId;

/// Errors returned by the stock oracle and product catalog.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),
    #[error("Inventory rejected the request: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl InventoryError {
    pub(crate) fn from_framework(id: ProductId, error: FrameworkError) -> Self {
        match error {
            FrameworkError::NotFound(_) => InventoryError::NotFound(id),
            FrameworkError::Rejected(reason) => InventoryError::Rejected(reason),
            other => InventoryError::ActorCommunicationError(other.to_string()),
        }
    }
}
