use tokio::sync::oneshot;

use super::CartError;
use crate::domain::{CatalogProduct, Product, ProductId, StockLevel};

pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Messages understood by [`CartService`](super::CartService).
///
/// Mutations carry the stock level (and catalog record) observed by the
/// client; the service evaluates them against its own current cart.
#[derive(Debug)]
pub enum CartRequest {
    FindEntry {
        id: ProductId,
        respond_to: ServiceResponse<Option<Product>, CartError>,
    },
    AddProduct {
        id: ProductId,
        stock: StockLevel,
        catalog: Option<CatalogProduct>,
        respond_to: ServiceResponse<Product, CartError>,
    },
    RemoveProduct {
        id: ProductId,
        respond_to: ServiceResponse<(), CartError>,
    },
    SetAmount {
        id: ProductId,
        amount: u32,
        stock: StockLevel,
        respond_to: ServiceResponse<Product, CartError>,
    },
    Shutdown,
}
