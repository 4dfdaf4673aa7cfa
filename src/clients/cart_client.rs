use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};

use crate::cart_actor::{CartError, CartRequest};
use crate::clients::InventoryClient;
use crate::domain::{Cart, CatalogProduct, Product, ProductId, StockLevel};
use crate::notifier::{Notice, Notifier};

/// The three cart mutations, used to pick the failure notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Remove,
    UpdateAmount,
}

impl CartOperation {
    pub fn failure_notice(&self) -> Notice {
        match self {
            CartOperation::Add => Notice::AddFailed,
            CartOperation::Remove => Notice::RemoveFailed,
            CartOperation::UpdateAmount => Notice::UpdateFailed,
        }
    }

    /// Stock problems get their own notice; everything else collapses into
    /// the operation's generic failure.
    pub fn notice_for(&self, error: &CartError) -> Notice {
        match error {
            CartError::StockExceeded { .. } => Notice::StockExceeded,
            _ => self.failure_notice(),
        }
    }
}

/// Handle given to the presentation layer.
///
/// Performs the stock and catalog lookups, then hands the observed values to
/// [`CartService`](crate::cart_actor::CartService) which applies them to the
/// latest cart. Every failure is reported to the [`Notifier`] once and
/// returned as a typed [`CartError`].
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
    inventory: InventoryClient,
    notifier: Arc<dyn Notifier>,
    snapshot: watch::Receiver<Cart>,
}

impl CartClient {
    pub fn new(
        sender: mpsc::Sender<CartRequest>,
        inventory: InventoryClient,
        notifier: Arc<dyn Notifier>,
        snapshot: watch::Receiver<Cart>,
    ) -> Self {
        Self {
            sender,
            inventory,
            notifier,
            snapshot,
        }
    }

    /// The current cart.
    pub fn cart(&self) -> Cart {
        self.snapshot.borrow().clone()
    }

    /// A receiver that is updated after every committed mutation.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.snapshot.clone()
    }

    /// Adds one unit of `product_id`, appending a new entry when the cart has none.
    #[instrument(skip(self))]
    pub async fn add_product(&self, product_id: ProductId) -> Result<Product, CartError> {
        let result = self.try_add_product(product_id).await;
        self.report(CartOperation::Add, &result);
        result
    }

    /// Removes the entry for `product_id`.
    ///
    /// Makes no stock or catalog call. It is `async` only because the change is
    /// applied by the cart actor; the await covers the mailbox round trip and
    /// the snapshot write.
    #[instrument(skip(self))]
    pub async fn remove_product(&self, product_id: ProductId) -> Result<(), CartError> {
        let result = self.apply_remove(product_id).await;
        self.report(CartOperation::Remove, &result);
        result
    }

    /// Sets the entry for `product_id` to exactly `amount` units.
    ///
    /// Amounts below 1 are ignored: `Ok(None)`, no lookup, no notice.
    #[instrument(skip(self))]
    pub async fn update_product_amount(
        &self,
        product_id: ProductId,
        amount: i64,
    ) -> Result<Option<Product>, CartError> {
        if amount < 1 {
            debug!("Ignoring non-positive amount");
            return Ok(None);
        }
        let result = self.try_update_amount(product_id, amount).await;
        self.report(CartOperation::UpdateAmount, &result);
        result.map(Some)
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), CartError> {
        debug!("Sending shutdown request");
        self.sender
            .send(CartRequest::Shutdown)
            .await
            .map_err(|e| CartError::ActorCommunicationError(e.to_string()))
    }

    async fn try_add_product(&self, id: ProductId) -> Result<Product, CartError> {
        let stock = self.inventory.check_stock(id).await?;

        // Catalog lookup only when a new entry could actually be created.
        let catalog = match self.find_entry(id).await? {
            Some(_) => None,
            None if stock.amount < 1 => None,
            None => Some(self.inventory.get_catalog_product(id).await?),
        };

        self.apply_add(id, stock, catalog).await
    }

    async fn try_update_amount(&self, id: ProductId, amount: i64) -> Result<Product, CartError> {
        let stock = self.inventory.check_stock(id).await?;
        // Anything past u32 is above every possible stock level.
        let amount = u32::try_from(amount).unwrap_or(u32::MAX);
        self.apply_amount(id, amount, stock).await
    }

    fn report<T>(&self, operation: CartOperation, result: &Result<T, CartError>) {
        match result {
            Ok(_) => info!(operation = ?operation, entries = self.snapshot.borrow().len(), "Cart updated"),
            Err(e) => {
                warn!(operation = ?operation, error = %e, "Cart operation failed");
                self.notifier.notify(operation.notice_for(e));
            }
        }
    }
}

client_method!(CartClient => fn find_entry(id: ProductId) -> Option<Product> as CartRequest::FindEntry, Error = CartError);
client_method!(CartClient => fn apply_add(id: ProductId, stock: StockLevel, catalog: Option<CatalogProduct>) -> Product as CartRequest::AddProduct, Error = CartError);
client_method!(CartClient => fn apply_remove(id: ProductId) -> () as CartRequest::RemoveProduct, Error = CartError);
client_method!(CartClient => fn apply_amount(id: ProductId, amount: u32, stock: StockLevel) -> Product as CartRequest::SetAmount, Error = CartError);
