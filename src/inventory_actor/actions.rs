use crate::domain::StockLevel;

/// Custom actions for stocked products.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryAction {
    /// Reports the current stock level without modifying it.
    CheckStock,
}

/// Results from [`InventoryAction`] - variants match 1:1 with the actions
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryActionResult {
    StockLevel(StockLevel),
}
