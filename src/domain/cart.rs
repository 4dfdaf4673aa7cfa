use serde::{Deserialize, Serialize};

use super::{CatalogProduct, Product, ProductId, StockLevel};
use crate::cart_actor::CartError;

/// Ordered, product-id-unique sequence of cart entries.
///
/// Insertion order is display order. Mutations never edit in place: each one
/// returns the next `Cart`, so the caller can persist it before adopting it.
///
/// Deserializing goes through [`Cart::from_entries`], so a decoded cart holds
/// the same invariants as one built by the mutations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Product>", into = "Vec<Product>")]
pub struct Cart {
    entries: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from raw entries, rejecting duplicates and zero amounts.
    pub fn from_entries(entries: Vec<Product>) -> Result<Self, CartError> {
        for (index, entry) in entries.iter().enumerate() {
            if entry.amount < 1 {
                return Err(CartError::InvalidAmount {
                    product_id: entry.id,
                    amount: entry.amount,
                });
            }
            if entries[..index].iter().any(|earlier| earlier.id == entry.id) {
                return Err(CartError::DuplicateEntry(entry.id));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Product> {
        self.entries
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds one unit of `id`, checked against `stock`.
    ///
    /// An existing entry is incremented in place. Otherwise `catalog` supplies
    /// the metadata for a new entry appended with amount 1.
    ///
    /// # Errors
    /// - `StockExceeded` when stock is empty or the increment would exceed it
    /// - `NotFound` when there is no entry and no catalog record to create one
    pub fn with_added(
        &self,
        id: ProductId,
        stock: StockLevel,
        catalog: Option<CatalogProduct>,
    ) -> Result<Cart, CartError> {
        let requested = self
            .find(id)
            .map_or(1, |entry| entry.amount.saturating_add(1));

        if stock.amount < 1 || !stock.covers(requested) {
            return Err(CartError::StockExceeded {
                product_id: id,
                requested,
                available: stock.amount,
            });
        }

        if self.find(id).is_some() {
            return Ok(self.with_entry_amount(id, requested));
        }

        let catalog = catalog.ok_or(CartError::NotFound(id))?;
        let mut entries = self.entries.clone();
        entries.push(catalog.into_entry(1));
        Ok(Self { entries })
    }

    /// Drops the entry for `id`, keeping the relative order of the rest.
    pub fn without(&self, id: ProductId) -> Result<Cart, CartError> {
        if self.find(id).is_none() {
            return Err(CartError::NotFound(id));
        }
        let entries = self
            .entries
            .iter()
            .filter(|entry| entry.id != id)
            .cloned()
            .collect();
        Ok(Self { entries })
    }

    /// Sets the entry for `id` to exactly `amount`, checked against `stock`.
    pub fn with_amount(
        &self,
        id: ProductId,
        amount: u32,
        stock: StockLevel,
    ) -> Result<Cart, CartError> {
        if amount < 1 {
            return Err(CartError::InvalidAmount {
                product_id: id,
                amount,
            });
        }
        if !stock.covers(amount) {
            return Err(CartError::StockExceeded {
                product_id: id,
                requested: amount,
                available: stock.amount,
            });
        }
        if self.find(id).is_none() {
            return Err(CartError::NotFound(id));
        }
        Ok(self.with_entry_amount(id, amount))
    }

    fn with_entry_amount(&self, id: ProductId, amount: u32) -> Cart {
        let entries = self
            .entries
            .iter()
            .map(|entry| {
                if entry.id == id {
                    Product {
                        amount,
                        ..entry.clone()
                    }
                } else {
                    entry.clone()
                }
            })
            .collect();
        Self { entries }
    }
}

impl TryFrom<Vec<Product>> for Cart {
    type Error = CartError;

    fn try_from(entries: Vec<Product>) -> Result<Self, Self::Error> {
        Cart::from_entries(entries)
    }
}

impl From<Cart> for Vec<Product> {
    fn from(cart: Cart) -> Self {
        cart.entries
    }
}
