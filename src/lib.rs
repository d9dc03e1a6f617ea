//! # Product catalog registration
//!
//! Validates product form input, appends each product as one line of a CSV
//! data file, and appends a timestamped audit line per save.
//!
//! - [`builder`] turns a raw [`domain::ProductForm`] into a [`domain::Product`]
//! - [`store`] owns the two append-only files
//! - [`catalog_actor`] runs saves on a dedicated worker; [`clients`] talks to it
//! - [`form`] is the Editing/Submitting state machine, [`console`] its terminal front end
//! - [`app_system`] wires everything together and sets up tracing

pub mod domain;
pub mod builder;
pub mod store;
pub mod catalog_actor;
pub mod clients;
pub mod form;
pub mod console;

pub mod app_system;

#[cfg(test)]
mod mock_framework;
