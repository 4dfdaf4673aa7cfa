use super::actions::{InventoryAction, InventoryActionResult};
use super::dtos::{InventoryCreate, InventoryPatch};
use crate::actor_framework::Entity;
use crate::domain::{CatalogProduct, ProductDetails, ProductId, StockLevel};

/// A catalog record together with its available stock, as held by the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct StockedProduct {
    pub id: ProductId,
    pub details: ProductDetails,
    pub stock: u32,
}

impl StockedProduct {
    pub fn new(id: ProductId, details: ProductDetails, stock: u32) -> Self {
        Self { id, details, stock }
    }

    pub fn stock_level(&self) -> StockLevel {
        StockLevel::new(self.id, self.stock)
    }

    pub fn catalog_product(&self) -> CatalogProduct {
        CatalogProduct::new(self.id, self.details.clone())
    }
}

impl Entity for StockedProduct {
    type Id = ProductId;
    type CreateParams = InventoryCreate;
    type Patch = InventoryPatch;
    type Action = InventoryAction;
    type ActionResult = InventoryActionResult;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn from_create(id: ProductId, params: InventoryCreate) -> Result<Self, String> {
        if params.details.title.trim().is_empty() {
            return Err("Product title required".to_string());
        }
        Ok(Self::new(id, params.details, params.stock))
    }

    /// Applies a restock and/or reprice.
    fn on_update(&mut self, patch: InventoryPatch) -> Result<(), String> {
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(price) = patch.price {
            if price < 0.0 {
                return Err(format!("Invalid price: {}", price));
            }
            self.details.price = price;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: InventoryAction) -> Result<InventoryActionResult, String> {
        match action {
            InventoryAction::CheckStock => Ok(InventoryActionResult::StockLevel(self.stock_level())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sneaker() -> StockedProduct {
        StockedProduct::new(1, ProductDetails::new("Tênis de Caminhada", 179.9, "1.jpg"), 3)
    }

    #[test]
    fn test_check_stock_reports_level() {
        let mut product = sneaker();

        let result = product.handle_action(InventoryAction::CheckStock).unwrap();

        assert_eq!(result, InventoryActionResult::StockLevel(StockLevel::new(1, 3)));
    }

    #[test]
    fn test_patch_restocks_and_rejects_negative_price() {
        let mut product = sneaker();

        product
            .on_update(InventoryPatch { stock: Some(10), price: None })
            .unwrap();
        assert_eq!(product.stock, 10);

        let result = product.on_update(InventoryPatch { stock: None, price: Some(-1.0) });
        assert!(result.is_err());
        assert_eq!(product.details.price, 179.9);
    }

    #[test]
    fn test_create_requires_title() {
        let params = InventoryCreate {
            details: ProductDetails::new("  ", 1.0, "x.jpg"),
            stock: 1,
        };

        assert!(StockedProduct::from_create(1, params).is_err());
    }
}
