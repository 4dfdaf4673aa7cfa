use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier shared by the catalog, the stock oracle and the cart.
pub type ProductId = u64;

/// Catalog fields carried along with a product. The cart never inspects them.
///
/// Fields beyond `title`, `price` and `image` are kept in `extra` and written
/// back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub title: String,
    pub price: f64,
    pub image: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProductDetails {
    pub fn new(title: impl Into<String>, price: f64, image: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            price,
            image: image.into(),
            extra: Map::new(),
        }
    }
}

/// A product as returned by the catalog, before it has a cart quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: ProductId,
    #[serde(flatten)]
    pub details: ProductDetails,
}

impl CatalogProduct {
    pub fn new(id: ProductId, details: ProductDetails) -> Self {
        Self { id, details }
    }

    /// Turns the catalog record into a cart entry holding `amount` units.
    pub fn into_entry(self, amount: u32) -> Product {
        Product {
            id: self.id,
            amount,
            details: self.details,
        }
    }
}

/// One cart entry: a distinct product and the quantity the user intends to buy.
///
/// Serialized flat, e.g. `{"id":1,"amount":2,"title":"..","price":179.9,"image":".."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub amount: u32,
    #[serde(flatten)]
    pub details: ProductDetails,
}

impl Product {
    pub fn new(id: ProductId, amount: u32, details: ProductDetails) -> Self {
        Self {
            id,
            amount,
            details,
        }
    }
}
