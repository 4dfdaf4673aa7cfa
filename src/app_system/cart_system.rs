use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

use super::CartConfig;
use crate::cart_actor::{CartError, CartService};
use crate::clients::{CartClient, InventoryClient};
use crate::inventory_actor;
use crate::notifier::{Notifier, TracingNotifier};
use crate::persistence::{CartPersistence, FileStore, KeyValueStore};

/// Owns the running actors and the clients handed to the presentation layer.
///
/// The cart lives as long as the system: it is restored from storage when the
/// system starts and every client is a handle onto the same `CartService`.
pub struct CartSystem {
    pub cart_client: CartClient,
    pub inventory_client: InventoryClient,
    handles: Vec<JoinHandle<()>>,
}

impl CartSystem {
    /// Starts the in-process inventory and a cart persisted under
    /// `config.storage_dir`, reporting notices through tracing.
    #[instrument(name = "cart_system", skip(config), fields(storage_dir = %config.storage_dir.display()))]
    pub fn new(config: &CartConfig) -> Self {
        info!("Starting cart system");

        let (inventory_actor, inventory_client) = inventory_actor::new(config.buffer_size);
        let inventory_handle = tokio::spawn(inventory_actor.run());

        let mut system = Self::with_parts(
            config,
            Arc::new(FileStore::new(config.storage_dir.clone())),
            Arc::new(TracingNotifier),
            inventory_client,
        );
        system.handles.push(inventory_handle);
        system
    }

    /// Starts a cart against caller-supplied collaborators.
    ///
    /// Only the `CartService` task is owned by the returned system.
    pub fn with_parts(
        config: &CartConfig,
        store: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
        inventory_client: InventoryClient,
    ) -> Self {
        let persistence = CartPersistence::with_key(store, config.storage_key.clone());
        let cart = persistence.load();
        info!(entries = cart.len(), "Cart restored");

        let (cart_service, sender, snapshot) = CartService::new(config.buffer_size, cart, persistence);
        let cart_handle = tokio::spawn(cart_service.run());

        let cart_client = CartClient::new(sender, inventory_client.clone(), notifier, snapshot);

        Self {
            cart_client,
            inventory_client,
            handles: vec![cart_handle],
        }
    }

    /// Stops the cart first, then waits for every owned task.
    ///
    /// The inventory actor stops once the last `InventoryClient` is dropped, so
    /// callers must release their own clones before awaiting this.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), CartError> {
        info!("Shutting down cart system");

        self.cart_client.shutdown().await?;
        drop(self.cart_client);
        drop(self.inventory_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(CartError::ActorCommunicationError(e.to_string()));
            }
        }

        info!("Cart system shutdown complete");
        Ok(())
    }
}
