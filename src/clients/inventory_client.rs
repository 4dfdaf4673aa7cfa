use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{CatalogProduct, ProductDetails, ProductId, StockLevel};
use crate::inventory_actor::{
    InventoryAction, InventoryActionResult, InventoryCreate, InventoryError, InventoryPatch,
    StockedProduct,
};

/// Request/response handle on the stock oracle and product catalog.
#[derive(Clone)]
pub struct InventoryClient {
    inner: ResourceClient<StockedProduct>,
}

impl InventoryClient {
    pub fn new(inner: ResourceClient<StockedProduct>) -> Self {
        Self { inner }
    }

    /// Asks the stock oracle how many units of `id` are available.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<StockLevel, InventoryError> {
        debug!("Sending request");
        match self.inner.perform_action(id, InventoryAction::CheckStock).await {
            Ok(InventoryActionResult::StockLevel(level)) => Ok(level),
            Err(e) => Err(InventoryError::from_framework(id, e)),
        }
    }

    /// Fetches the catalog record for `id`.
    #[instrument(skip(self))]
    pub async fn get_catalog_product(&self, id: ProductId) -> Result<CatalogProduct, InventoryError> {
        debug!("Sending request");
        match self.inner.get(id).await {
            Ok(Some(product)) => Ok(product.catalog_product()),
            Ok(None) => Err(InventoryError::NotFound(id)),
            Err(e) => Err(InventoryError::from_framework(id, e)),
        }
    }

    #[instrument(skip(self, details), fields(title = %details.title))]
    pub async fn register_product(&self, details: ProductDetails, stock: u32) -> Result<ProductId, InventoryError> {
        debug!("Sending request");
        self.inner
            .create(InventoryCreate { details, stock })
            .await
            .map_err(|e| InventoryError::from_framework(0, e))
    }

    /// Replaces the available stock of `id`.
    #[instrument(skip(self))]
    pub async fn restock(&self, id: ProductId, stock: u32) -> Result<StockLevel, InventoryError> {
        debug!("Sending request");
        let patch = InventoryPatch {
            stock: Some(stock),
            ..InventoryPatch::default()
        };
        self.inner
            .update(id, patch)
            .await
            .map(|product| product.stock_level())
            .map_err(|e| InventoryError::from_framework(id, e))
    }

    /// Changes the catalog price of `id`. Carts keep the price they were filled with.
    #[instrument(skip(self))]
    pub async fn reprice(&self, id: ProductId, price: f64) -> Result<CatalogProduct, InventoryError> {
        debug!("Sending request");
        let patch = InventoryPatch {
            price: Some(price),
            ..InventoryPatch::default()
        };
        self.inner
            .update(id, patch)
            .await
            .map(|product| product.catalog_product())
            .map_err(|e| InventoryError::from_framework(id, e))
    }
}
