//! # Catalog - product batch intake
//!
//! Development receiver for the admin page's collection-creation
//! endpoint. A batch of draft products arrives as one JSON array, is
//! checked record by record and, if every record passes, echoed back in
//! normalized form. Nothing is stored.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ JSON array  │────▶│ JSON Schema │────▶│  Normalize  │────▶│  Response   │
//! │ (POST body) │     │ (per record)│     │ (prices,    │     │  (201/422)  │
//! └─────────────┘     └─────────────┘     │  lists)     │     └─────────────┘
//!                                         └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Input and normalized products
//! - [`validation`] - Product JSON schema
//! - [`batch`] - Batch intake
//! - [`api`] - HTTP API server

// Core modules
pub mod error;
pub mod models;

// Validation
pub mod validation;

// Intake
pub mod batch;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{BatchError, BatchResult, RecordErrors, ServerError, ServerResult};

pub use models::{Amount, Price, PriceInput, Product, ProductInput, StringList, MAX_DISCOUNT};

pub use validation::{is_valid, is_valid_product, validate, validate_product};

pub use batch::{load_batch_file, process_batch};

pub use api::types::{error_response, AddProductsResponse};

// Server
pub mod server {
    pub use crate::api::server::{router, start_server};
}
