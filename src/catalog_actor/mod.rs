//! The catalog worker: owns the store and performs saves one at a time.

mod error;
mod service;

pub use error::*;
pub use service::*;
