use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// I/O failure while appending to one of the two files.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to append product to {}: {source}", .path.display())]
    Data {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to append audit entry to {}: {source}", .path.display())]
    Log {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub fn io(&self) -> &io::Error {
        match self {
            StoreError::Data { source, .. } | StoreError::Log { source, .. } => source,
        }
    }
}
