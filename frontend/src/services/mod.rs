//! Backend services.
//!
//! # Services
//!
//! - [`products`] - Batch submission to the products API

pub mod products;

pub use products::*;
