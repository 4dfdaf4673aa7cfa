use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, instrument, warn};

use super::messages::{CartRequest, ServiceResponse};
use super::CartError;
use crate::domain::{Cart, CatalogProduct, Product, ProductId, StockLevel};
use crate::persistence::CartPersistence;

/// Owns the canonical cart.
///
/// Requests are handled one at a time, so every mutation is computed from the
/// cart as it stands when the message is processed, never from a copy taken
/// before the client's stock or catalog call. A mutation is persisted first and
/// only then adopted and published; if the write fails the cart is untouched.
pub struct CartService {
    receiver: mpsc::Receiver<CartRequest>,
    cart: Cart,
    persistence: CartPersistence,
    published: watch::Sender<Cart>,
}

impl CartService {
    /// Creates the service around an already restored cart.
    ///
    /// Returns the request sender and a receiver that always holds the latest
    /// committed cart.
    pub fn new(
        buffer_size: usize,
        cart: Cart,
        persistence: CartPersistence,
    ) -> (Self, mpsc::Sender<CartRequest>, watch::Receiver<Cart>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (published, snapshot) = watch::channel(cart.clone());
        let service = Self {
            receiver,
            cart,
            persistence,
            published,
        };
        (service, sender, snapshot)
    }

    #[instrument(name = "cart_service", skip(self))]
    pub async fn run(mut self) {
        info!(entries = self.cart.len(), "CartService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::FindEntry { id, respond_to } => {
                    self.handle_find_entry(id, respond_to);
                }
                CartRequest::AddProduct {
                    id,
                    stock,
                    catalog,
                    respond_to,
                } => {
                    self.handle_add_product(id, stock, catalog, respond_to);
                }
                CartRequest::RemoveProduct { id, respond_to } => {
                    self.handle_remove_product(id, respond_to);
                }
                CartRequest::SetAmount {
                    id,
                    amount,
                    stock,
                    respond_to,
                } => {
                    self.handle_set_amount(id, amount, stock, respond_to);
                }
                CartRequest::Shutdown => {
                    info!("CartService shutting down");
                    break;
                }
            }
        }

        info!("CartService stopped");
    }

    #[instrument(fields(product_id = id), skip(self, respond_to))]
    fn handle_find_entry(&self, id: ProductId, respond_to: ServiceResponse<Option<Product>, CartError>) {
        let entry = self.cart.find(id).cloned();
        debug!(found = entry.is_some(), "Processing find_entry request");
        let _ = respond_to.send(Ok(entry));
    }

    #[instrument(
        fields(product_id = id, stock = stock.amount, from_catalog = catalog.is_some()),
        skip(self, stock, catalog, respond_to)
    )]
    fn handle_add_product(
        &mut self,
        id: ProductId,
        stock: StockLevel,
        catalog: Option<CatalogProduct>,
        respond_to: ServiceResponse<Product, CartError>,
    ) {
        debug!("Processing add_product request");

        let result = self
            .cart
            .with_added(id, stock, catalog)
            .and_then(|next| self.commit(next))
            .and_then(|()| self.entry(id));

        match &result {
            Ok(entry) => info!(amount = entry.amount, "Product added"),
            Err(e) => warn!(error = %e, "Add rejected"),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(fields(product_id = id), skip(self, respond_to))]
    fn handle_remove_product(&mut self, id: ProductId, respond_to: ServiceResponse<(), CartError>) {
        debug!("Processing remove_product request");

        let result = self.cart.without(id).and_then(|next| self.commit(next));

        match &result {
            Ok(()) => info!(remaining = self.cart.len(), "Product removed"),
            Err(e) => warn!(error = %e, "Remove rejected"),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(fields(product_id = id, stock = stock.amount), skip(self, stock, respond_to))]
    fn handle_set_amount(
        &mut self,
        id: ProductId,
        amount: u32,
        stock: StockLevel,
        respond_to: ServiceResponse<Product, CartError>,
    ) {
        debug!("Processing set_amount request");

        let result = self
            .cart
            .with_amount(id, amount, stock)
            .and_then(|next| self.commit(next))
            .and_then(|()| self.entry(id));

        match &result {
            Ok(_) => info!("Product amount updated"),
            Err(e) => warn!(error = %e, "Amount update rejected"),
        }

        let _ = respond_to.send(result);
    }

    /// Persists `next`, then adopts and publishes it.
    fn commit(&mut self, next: Cart) -> Result<(), CartError> {
        if let Err(e) = self.persistence.save(&next) {
            error!(error = %e, "Failed to persist cart, keeping previous state");
            return Err(e.into());
        }
        self.cart = next;
        self.published.send_replace(self.cart.clone());
        Ok(())
    }

    fn entry(&self, id: ProductId) -> Result<Product, CartError> {
        self.cart.find(id).cloned().ok_or(CartError::NotFound(id))
    }
}
