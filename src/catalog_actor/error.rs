use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced to callers of [`crate::clients::CatalogClient`].
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Save worker failed: {0}")]
    Worker(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
