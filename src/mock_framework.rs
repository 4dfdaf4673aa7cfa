//! # Mock Framework
//!
//! Utilities for testing clients against a scripted resource actor.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! channel, then [`expect_get`] or [`expect_action`] to take each request and
//! answer it (or drop the responder to simulate a failed call). Holding a
//! responder back simulates a slow remote.

use tokio::sync::{mpsc, oneshot};

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};

pub type Responder<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Creates a mock client and a receiver for asserting requests.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Takes the next message if it is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Takes the next message if it is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Responder<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProductDetails, StockLevel};
    use crate::inventory_actor::{InventoryAction, InventoryActionResult, StockedProduct};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<StockedProduct>(10);

        let stock_task = tokio::spawn({
            let client = client.clone();
            async move { client.perform_action(1, InventoryAction::CheckStock).await }
        });

        let (id, action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(id, 1);
        assert_eq!(action, InventoryAction::CheckStock);
        responder
            .send(Ok(InventoryActionResult::StockLevel(StockLevel::new(1, 4))))
            .unwrap();
        assert_eq!(
            stock_task.await.unwrap(),
            Ok(InventoryActionResult::StockLevel(StockLevel::new(1, 4)))
        );

        let get_task = tokio::spawn(async move { client.get(2).await });
        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, 2);
        let product = StockedProduct::new(2, ProductDetails::new("Chinelo", 30.0, "c.jpg"), 1);
        responder.send(Ok(Some(product.clone()))).unwrap();
        assert_eq!(get_task.await.unwrap(), Ok(Some(product)));
    }
}
