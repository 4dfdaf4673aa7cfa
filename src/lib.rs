//! # Cart Store
//!
//! Client-side shopping cart state: an ordered list of products with
//! quantities, where every change is checked against a remote stock oracle and
//! written through to a persisted snapshot.
//!
//! ## Layout
//!
//! - **Domain** - [`Cart`], [`Product`], [`StockLevel`]; the cart rules are pure functions on [`Cart`]
//! - **Cart actor** - [`CartService`](cart_actor::CartService) owns the cart and applies each
//!   mutation against its current state, persists it, then publishes it
//! - **Clients** - [`CartClient`] for the presentation layer, [`InventoryClient`] for stock and
//!   catalog lookups
//! - **Inventory** - a [`ResourceActor`](actor_framework::ResourceActor) standing in for the remote
//!   stock oracle and product catalog
//! - **Persistence** - [`CartPersistence`](persistence::CartPersistence) over a
//!   [`KeyValueStore`](persistence::KeyValueStore)
//! - **System** - [`CartSystem`] wires it all together; [`setup_tracing`] configures logging
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cart_store::{CartConfig, CartSystem};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let system = CartSystem::new(&CartConfig::from_env()?);
//!
//! system.cart_client.add_product(1).await?;
//! system.cart_client.update_product_amount(1, 3).await?;
//! println!("{:?}", system.cart_client.cart());
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod cart_actor;
pub mod clients;
pub mod domain;
pub mod inventory_actor;
pub mod notifier;
pub mod persistence;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, CartConfig, CartSystem};
pub use cart_actor::CartError;
pub use clients::{CartClient, CartOperation, InventoryClient};
pub use domain::{Cart, CatalogProduct, Product, ProductDetails, ProductId, StockLevel};
pub use notifier::{Notice, Notifier, RecordingNotifier, TracingNotifier};
