use crate::domain::ProductDetails;

/// Payload for registering a product with the inventory.
#[derive(Debug, Clone)]
pub struct InventoryCreate {
    pub details: ProductDetails,
    pub stock: u32,
}

/// Payload for restocking or repricing a product.
#[derive(Debug, Clone, Default)]
pub struct InventoryPatch {
    pub stock: Option<u32>,
    pub price: Option<f64>,
}
