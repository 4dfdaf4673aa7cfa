use std::sync::Arc;

use tracing::{debug, instrument, warn};

use super::{KeyValueStore, PersistenceError};
use crate::domain::{Cart, Product};

/// Storage key of the cart snapshot.
pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

/// Reads and writes the full cart snapshot under one fixed key.
#[derive(Clone)]
pub struct CartPersistence {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl CartPersistence {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, CART_STORAGE_KEY)
    }

    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Restores the stored cart.
    ///
    /// Falls back to an empty cart when nothing is stored, when the stored
    /// value cannot be read or decoded, or when it breaks the cart invariants.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn load(&self) -> Cart {
        let raw = match self.store.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored cart");
                return Cart::new();
            }
            Err(e) => {
                warn!(error = %e, "Cart snapshot unreadable, starting empty");
                return Cart::new();
            }
        };

        let entries: Vec<Product> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "Corrupt cart snapshot, starting empty");
                return Cart::new();
            }
        };

        match Cart::from_entries(entries) {
            Ok(cart) => {
                debug!(entries = cart.len(), "Cart restored");
                cart
            }
            Err(e) => {
                warn!(error = %e, "Stored cart violates invariants, starting empty");
                Cart::new()
            }
        }
    }

    /// Overwrites the stored snapshot with `cart`.
    #[instrument(skip(self, cart), fields(key = %self.key, entries = cart.len()))]
    pub fn save(&self, cart: &Cart) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(cart)?;
        self.store.write(&self.key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductDetails;
    use crate::persistence::InMemoryStore;

    fn bridge() -> (CartPersistence, InMemoryStore) {
        let store = InMemoryStore::new();
        (CartPersistence::new(Arc::new(store.clone())), store)
    }

    fn sample_cart() -> Cart {
        Cart::from_entries(vec![
            Product::new(2, 3, ProductDetails::new("Tênis VR Caminhada", 139.9, "2.jpg")),
            Product::new(1, 1, ProductDetails::new("Tênis de Caminhada", 179.9, "1.jpg")),
        ])
        .unwrap()
    }

    #[test]
    fn test_load_without_stored_value_is_empty() {
        let (bridge, _) = bridge();

        assert!(bridge.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (bridge, _) = bridge();
        let cart = sample_cart();

        bridge.save(&cart).unwrap();

        assert_eq!(bridge.load(), cart);
    }

    #[test]
    fn test_snapshot_is_flat_json_array_under_fixed_key() {
        let (bridge, store) = bridge();

        bridge.save(&sample_cart()).unwrap();

        let raw = store.read(CART_STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["id"], 2);
        assert_eq!(value[0]["amount"], 3);
        assert_eq!(value[1]["title"], "Tênis de Caminhada");
    }

    #[test]
    fn test_corrupt_payload_loads_as_empty() {
        let (bridge, store) = bridge();

        store.write(CART_STORAGE_KEY, "{not json").unwrap();
        assert!(bridge.load().is_empty());

        store.write(CART_STORAGE_KEY, r#"{"id": 1}"#).unwrap();
        assert!(bridge.load().is_empty());
    }

    #[test]
    fn test_duplicate_entries_load_as_empty() {
        let (bridge, store) = bridge();
        let raw = r#"[
            {"id":1,"amount":1,"title":"a","price":1.0,"image":"a.jpg"},
            {"id":1,"amount":2,"title":"a","price":1.0,"image":"a.jpg"}
        ]"#;

        store.write(CART_STORAGE_KEY, raw).unwrap();

        assert!(bridge.load().is_empty());
    }

    #[test]
    fn test_load_then_save_keeps_unknown_catalog_fields() {
        let (bridge, store) = bridge();
        let raw = r#"[{"id":1,"amount":1,"title":"a","price":1.0,"image":"a.jpg","brand":"x"}]"#;
        store.write(CART_STORAGE_KEY, raw).unwrap();

        let cart = bridge.load();
        assert_eq!(cart.len(), 1);
        bridge.save(&cart).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&store.read(CART_STORAGE_KEY).unwrap().unwrap()).unwrap();
        let original: serde_json::Value = serde_json::from_str(raw).unwrap();
        assert_eq!(written, original);
        assert_eq!(written[0]["brand"], "x");
    }

    #[test]
    fn test_custom_key_is_isolated() {
        let store = InMemoryStore::new();
        let default = CartPersistence::new(Arc::new(store.clone()));
        let other = CartPersistence::with_key(Arc::new(store.clone()), "@Other:cart");

        other.save(&sample_cart()).unwrap();

        assert!(default.load().is_empty());
        assert_eq!(other.load().len(), 2);
    }
}
