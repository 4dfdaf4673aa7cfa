//! The stand-in remote inventory: stock oracle and product catalog served by a
//! [`ResourceActor`] over channels.

mod actions;
mod dtos;
pub mod entity;
pub mod error;

pub use actions::*;
pub use dtos::*;
pub use entity::StockedProduct;
pub use error::*;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::actor_framework::ResourceActor;
use crate::clients::InventoryClient;

/// Creates a new inventory actor and its client. Product ids start at 1.
pub fn new(buffer_size: usize) -> (ResourceActor<StockedProduct>, InventoryClient) {
    let product_id_counter = Arc::new(AtomicU64::new(1));
    let next_product_id = move || product_id_counter.fetch_add(1, Ordering::SeqCst);

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_product_id);
    (actor, InventoryClient::new(generic_client))
}
