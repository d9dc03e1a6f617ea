#[macro_use]
mod macros;
mod catalog_client;

pub use catalog_client::*;
