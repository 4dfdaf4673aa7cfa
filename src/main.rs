use cart_store::domain::ProductDetails;
use cart_store::{setup_tracing, CartConfig, CartSystem};
use tracing::{info, warn, Instrument};

/// Demo session: seeds the in-process inventory, then drives the cart the way
/// a storefront would. Run it twice to see the cart restored from disk.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = CartConfig::from_env()?;
    info!(storage_dir = %config.storage_dir.display(), "Starting cart demo");

    let system = CartSystem::new(&config);
    info!(entries = system.cart_client.cart().len(), "Cart loaded");

    let catalog = [
        (ProductDetails::new("Tênis de Caminhada Leve Confortável", 179.9, "tenis-1.jpg"), 3),
        (ProductDetails::new("Tênis VR Caminhada Confortável", 139.9, "tenis-2.jpg"), 5),
        (ProductDetails::new("Tênis Adidas Duramo Lite 2.0", 219.9, "tenis-3.jpg"), 0),
    ];
    let mut ids = Vec::new();
    for (details, stock) in catalog {
        ids.push(system.inventory_client.register_product(details, stock).await?);
    }

    let sale = system.inventory_client.reprice(ids[1], 119.9).await?;
    info!(product_id = sale.id, price = sale.details.price, "Repriced");

    let cart = &system.cart_client;
    let span = tracing::info_span!("shopping_session");
    async {
        for id in [ids[0], ids[0], ids[1], ids[2]] {
            if let Err(e) = cart.add_product(id).await {
                warn!(product_id = id, error = %e, "Add failed");
            }
        }

        if let Err(e) = cart.update_product_amount(ids[1], 10).await {
            warn!(error = %e, "Update failed");
        }
        match cart.update_product_amount(ids[1], 4).await {
            Ok(entry) => info!(updated = ?entry, "Amount set"),
            Err(e) => warn!(error = %e, "Update failed"),
        }
        // Below 1 is ignored without a notice.
        if let Err(e) = cart.update_product_amount(ids[1], 0).await {
            warn!(error = %e, "Update failed");
        }

        if let Err(e) = cart.remove_product(999).await {
            warn!(error = %e, "Remove failed");
        }
    }
    .instrument(span)
    .await;

    for entry in system.cart_client.cart().entries() {
        info!(
            product_id = entry.id,
            title = %entry.details.title,
            amount = entry.amount,
            "Cart entry"
        );
    }

    system.shutdown().await?;

    info!("Demo completed");
    Ok(())
}
