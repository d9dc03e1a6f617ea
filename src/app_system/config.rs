use std::path::PathBuf;

pub const DEFAULT_DATA_PATH: &str = "produtos.csv";
pub const DEFAULT_LOG_PATH: &str = "log.txt";
pub const DEFAULT_MAILBOX_SIZE: usize = 32;

/// Where the catalog writes, and how many save requests may queue up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub data_path: PathBuf,
    pub log_path: PathBuf,
    pub mailbox_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            mailbox_size: DEFAULT_MAILBOX_SIZE,
        }
    }
}

impl CatalogConfig {
    pub fn new(data_path: impl Into<PathBuf>, log_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            log_path: log_path.into(),
            ..Self::default()
        }
    }

    /// A zero-sized mailbox is bumped to one; tokio channels need capacity.
    pub fn with_mailbox_size(mut self, mailbox_size: usize) -> Self {
        self.mailbox_size = mailbox_size.max(1);
        self
    }
}
