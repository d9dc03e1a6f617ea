use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, instrument};

use super::CatalogError;
use crate::clients::CatalogClient;
use crate::domain::Product;
use crate::store::{AppendOnlyStore, StoreError};

/// Prefix of the audit message written after each saved product.
pub const PRODUCT_ADDED: &str = "Produto adicionado";

pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

#[derive(Debug)]
pub enum CatalogRequest {
    SaveProduct {
        product: Product,
        respond_to: ServiceResponse<(), CatalogError>,
    },
    Shutdown,
    #[cfg(test)]
    SavedCount {
        respond_to: ServiceResponse<u64, CatalogError>,
    },
}

/// Worker task that owns the [`AppendOnlyStore`].
///
/// Requests are handled strictly in arrival order and each save finishes
/// before the next message is read, so two saves never interleave their
/// writes. The file I/O itself runs on tokio's blocking pool.
pub struct CatalogService {
    receiver: mpsc::Receiver<CatalogRequest>,
    store: AppendOnlyStore,
    saved: u64,
}

impl CatalogService {
    pub fn new(store: AppendOnlyStore, buffer_size: usize) -> (Self, CatalogClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            store,
            saved: 0,
        };
        let client = CatalogClient::new(sender);
        (service, client)
    }

    #[instrument(name = "catalog_service", skip(self))]
    pub async fn run(mut self) {
        info!(
            data = %self.store.data_path().display(),
            log = %self.store.log_path().display(),
            "CatalogService starting"
        );

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::SaveProduct {
                    product,
                    respond_to,
                } => {
                    self.handle_save_product(product, respond_to).await;
                }
                CatalogRequest::Shutdown => {
                    info!("CatalogService shutting down");
                    break;
                }
                #[cfg(test)]
                CatalogRequest::SavedCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.saved));
                }
            }
        }

        info!(saved = self.saved, "CatalogService stopped");
    }

    #[instrument(fields(barcode = %product.barcode()), skip(self, product, respond_to))]
    async fn handle_save_product(
        &mut self,
        product: Product,
        respond_to: ServiceResponse<(), CatalogError>,
    ) {
        debug!("Processing save_product request");

        let store = self.store.clone();
        let result = match tokio::task::spawn_blocking(move || persist(&store, &product)).await {
            Ok(outcome) => outcome.map_err(CatalogError::from),
            Err(e) => Err(CatalogError::Worker(e.to_string())),
        };

        match &result {
            Ok(()) => {
                self.saved += 1;
                info!("Product saved");
            }
            Err(e) => error!(error = %e, "Product save failed"),
        }

        let _ = respond_to.send(result);
    }
}

/// Appends the product, then its audit entry.
///
/// The log line is only written once the data line is; a failed append
/// returns before the log file is opened.
pub fn persist(store: &AppendOnlyStore, product: &Product) -> Result<(), StoreError> {
    store.append(product)?;
    store.log(&format!("{PRODUCT_ADDED}: {}", product.barcode()))
}
