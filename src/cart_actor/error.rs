use thiserror::Error;

use crate::domain::ProductId;
use crate::inventory_actor::InventoryError;
use crate::persistence::PersistenceError;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Insufficient stock for product {product_id}: requested {requested}, available {available}")]
    StockExceeded {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },
    #[error("Product not in cart: {0}")]
    NotFound(ProductId),
    #[error("Duplicate cart entry: {0}")]
    DuplicateEntry(ProductId),
    #[error("Invalid amount {amount} for product {product_id}")]
    InvalidAmount { product_id: ProductId, amount: u32 },
    #[error("Inventory request failed: {0}")]
    Transport(String),
    #[error("Cart persistence error: {0}")]
    Persistence(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<InventoryError> for CartError {
    fn from(error: InventoryError) -> Self {
        CartError::Transport(error.to_string())
    }
}

impl From<PersistenceError> for CartError {
    fn from(error: PersistenceError) -> Self {
        CartError::Persistence(error.to_string())
    }
}
