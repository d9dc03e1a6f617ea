//! Append-only persistence for products and their audit trail.
//!
//! Two plain-text files, each opened in append mode for a single write and
//! closed again when the handle drops. The files share no transaction and
//! there is no locking: one writer at a time is assumed.

mod audit;
mod error;

pub use audit::*;
pub use error::*;

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::{debug, instrument};

use crate::domain::Product;

/// Writer for the data file (one product per line) and the log file (one
/// [`AuditEntry`] per line).
#[derive(Debug, Clone)]
pub struct AppendOnlyStore {
    data_path: PathBuf,
    log_path: PathBuf,
}

impl AppendOnlyStore {
    pub fn new(data_path: impl Into<PathBuf>, log_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            log_path: log_path.into(),
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Appends `product` as one comma-separated line to the data file.
    #[instrument(skip(self, product), fields(barcode = %product.barcode()))]
    pub fn append(&self, product: &Product) -> Result<(), StoreError> {
        append_line(&self.data_path, &product.to_string()).map_err(|source| StoreError::Data {
            path: self.data_path.clone(),
            source,
        })?;
        debug!(path = %self.data_path.display(), "Product appended");
        Ok(())
    }

    /// Appends `message` to the log file, stamped with the current local time.
    pub fn log(&self, message: &str) -> Result<(), StoreError> {
        self.write_entry(&AuditEntry::now(message))
    }

    /// Like [`AppendOnlyStore::log`] with an explicit timestamp.
    pub fn log_at(&self, message: &str, at: NaiveDateTime) -> Result<(), StoreError> {
        self.write_entry(&AuditEntry::new(at, message))
    }

    #[instrument(skip(self, entry), fields(message = %entry.message()))]
    fn write_entry(&self, entry: &AuditEntry) -> Result<(), StoreError> {
        append_line(&self.log_path, &entry.to_string()).map_err(|source| StoreError::Log {
            path: self.log_path.clone(),
            source,
        })?;
        debug!(path = %self.log_path.display(), "Audit entry appended");
        Ok(())
    }
}

// The line and its newline go out in one write; the handle closes on return.
fn append_line(path: &Path, line: &str) -> io::Result<()> {
    let mut buf = String::with_capacity(line.len() + 1);
    buf.push_str(line);
    buf.push('\n');

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(buf.as_bytes())?;
    file.flush()
}
