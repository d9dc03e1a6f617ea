use tracing::{error, info, instrument, warn};

use crate::app_system::CatalogConfig;
use crate::catalog_actor::CatalogService;
use crate::clients::CatalogClient;
use crate::store::AppendOnlyStore;

/// Owns the running catalog worker.
///
/// Responsible for starting the service, handing out its client, and shutting
/// it down.
pub struct CatalogSystem {
    pub catalog_client: CatalogClient,
    handle: tokio::task::JoinHandle<()>,
}

impl CatalogSystem {
    /// Starts the worker. Must be called from within a tokio runtime.
    #[instrument(name = "catalog_system", skip(config))]
    pub fn new(config: &CatalogConfig) -> Self {
        info!("Starting catalog system");

        let store = AppendOnlyStore::new(config.data_path.clone(), config.log_path.clone());
        let (service, catalog_client) = CatalogService::new(store, config.mailbox_size.max(1));
        let handle = tokio::spawn(service.run());

        info!("Catalog system started successfully");

        Self {
            catalog_client,
            handle,
        }
    }

    /// Stops the worker after it finishes any save already in progress.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog system");

        if let Err(e) = self.catalog_client.shutdown().await {
            warn!(error = %e, "Shutdown request not delivered; service already stopped");
        }

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Service shutdown error");
            return Err(format!("Catalog service failed: {e}"));
        }

        info!("Catalog system shutdown complete");
        Ok(())
    }
}
