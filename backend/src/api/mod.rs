//! HTTP API module.
//!
//! HTTP server and response types for the catalog intake backend.

pub mod server;
pub mod types;

pub use server::{router, start_server, PRODUCTS_ADD_PATH};
pub use types::*;
