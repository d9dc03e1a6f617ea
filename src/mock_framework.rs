//! # Mock Framework
//!
//! Utilities for testing callers of [`CatalogClient`] without a running
//! [`crate::catalog_actor::CatalogService`].
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! channel, then [`expect_save`] to pull the next request and answer it.

use tokio::sync::{mpsc, oneshot};

use crate::catalog_actor::{CatalogError, CatalogRequest};
use crate::clients::CatalogClient;
use crate::domain::Product;

/// Creates a client whose requests land on the returned receiver.
///
/// The test plays the worker: it inspects each request and decides the reply,
/// which makes failures and slow saves deterministic.
pub fn create_mock_client(buffer_size: usize) -> (CatalogClient, mpsc::Receiver<CatalogRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogClient::new(sender), receiver)
}

/// Helper to verify that the next message is a SaveProduct request
pub async fn expect_save(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(Product, oneshot::Sender<Result<(), CatalogError>>)> {
    match receiver.recv().await {
        Some(CatalogRequest::SaveProduct { product, respond_to }) => Some((product, respond_to)),
        _ => None,
    }
}

/// Answers every SaveProduct with `reply` until the channel closes or a
/// non-save message arrives, and returns the products seen.
pub async fn answer_saves(
    mut receiver: mpsc::Receiver<CatalogRequest>,
    reply: impl Fn(&Product) -> Result<(), CatalogError>,
) -> Vec<Product> {
    let mut seen = Vec::new();
    while let Some((product, respond_to)) = expect_save(&mut receiver).await {
        let _ = respond_to.send(reply(&product));
        seen.push(product);
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let save_task = tokio::spawn(async move {
            let product = Product::new("1", "Test", "", 1.0, 1, "", "");
            client.save_product(product).await
        });

        let (product, responder) = expect_save(&mut receiver).await.expect("Expected SaveProduct");
        assert_eq!(product.barcode(), "1");
        responder.send(Ok(())).unwrap();

        let result = save_task.await.unwrap();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_dropped_responder_surfaces_as_communication_error() {
        let (client, mut receiver) = create_mock_client(10);

        let save_task = tokio::spawn(async move {
            client.save_product(Product::new("1", "", "", 1.0, 1, "", "")).await
        });

        let (_, responder) = expect_save(&mut receiver).await.unwrap();
        drop(responder);

        let err = save_task.await.unwrap().unwrap_err();
        assert!(matches!(err, CatalogError::ActorCommunicationError(ref m) if m == "Actor dropped"));
    }
}
