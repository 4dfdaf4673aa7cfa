use serde::{Deserialize, Serialize};

use super::ProductId;

/// Available quantity reported by the stock oracle at call time.
///
/// Never stored by the cart; fetched fresh before each mutation that needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    pub id: ProductId,
    pub amount: u32,
}

impl StockLevel {
    pub fn new(id: ProductId, amount: u32) -> Self {
        Self { id, amount }
    }

    /// Whether `requested` units fit in the observed stock.
    pub fn covers(&self, requested: u32) -> bool {
        requested <= self.amount
    }
}
