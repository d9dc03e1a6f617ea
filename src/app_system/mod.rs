//! System orchestration, configuration, startup, and shutdown logic.

pub mod catalog_system;
pub mod config;
pub mod tracing;

pub use catalog_system::*;
pub use config::*;
pub use self::tracing::*;
