use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::catalog_actor::{CatalogError, CatalogRequest};
use crate::domain::Product;

/// Cloneable handle to the [`crate::catalog_actor::CatalogService`].
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), CatalogError> {
        debug!("Sending shutdown request");
        self.sender
            .send(CatalogRequest::Shutdown)
            .await
            .map_err(|e| CatalogError::ActorCommunicationError(e.to_string()))
    }
}

client_method!(CatalogClient => fn save_product(product: Product) -> () as CatalogRequest::SaveProduct, Error = CatalogError);

#[cfg(test)]
client_method!(CatalogClient => fn saved_count() -> u64 as CatalogRequest::SavedCount, Error = CatalogError);
