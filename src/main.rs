use tokio::io::BufReader;
use tracing::{error, info};

use product_catalog::app_system::{setup_tracing, CatalogConfig, CatalogSystem};
use product_catalog::console::Console;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = CatalogConfig::default();
    info!(
        data = %config.data_path.display(),
        log = %config.log_path.display(),
        "Starting product registration"
    );

    let system = CatalogSystem::new(&config);

    let mut console = Console::new(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        system.catalog_client.clone(),
    );
    let session = console.run().await;

    // Shut the worker down even if the console failed
    system.shutdown().await?;

    match session {
        Ok(summary) => {
            info!(saved = summary.saved, failed = summary.failed, "Application completed successfully");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Console I/O failed");
            Err(e.to_string())
        }
    }
}
