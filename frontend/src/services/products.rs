//! HTTP service for submitting product batches to the backend.
//!
//! [`HttpProductsApi`] performs the actual POST with `gloo-net`.
//! [`BatchSubmitter`] wraps any [`ProductsApi`] and refuses a new
//! submission while one is still in flight.

use std::cell::Cell;

use gloo_net::http::Request;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::types::{AppError, AppResult, DraftProduct, Notice};

/// Shown after a 2xx answer.
pub const SUCCESS_MESSAGE: &str = "Products added successfully";

/// Shown for any failure; details only go to the console.
pub const FAILURE_MESSAGE: &str = "Failed to add products";

/// Something that can create a batch of products.
#[allow(async_fn_in_trait)]
pub trait ProductsApi {
    /// Send every record in one request. Returns the (unchecked) response body.
    async fn create_products(&self, records: &[DraftProduct]) -> AppResult<Value>;
}

/// Products API over HTTP.
#[derive(Clone, Debug)]
pub struct HttpProductsApi {
    config: ApiConfig,
}

impl HttpProductsApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl ProductsApi for HttpProductsApi {
    async fn create_products(&self, records: &[DraftProduct]) -> AppResult<Value> {
        let url = self.config.products_add_url();

        let request = Request::post(&url)
            .json(&records)
            .map_err(|e| AppError::Serialization(format!("Failed to encode batch: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        let text = response
            .text()
            .await
            .map_err(|e| AppError::Serialization(format!("Failed to read response: {}", e)))?;

        check_status(response.ok(), response.status(), text)
    }
}

/// Map a finished HTTP exchange to the submit result: non-2xx is a failure.
fn check_status(ok: bool, status: u16, text: String) -> AppResult<Value> {
    if !ok {
        return Err(AppError::Server { status, body: text });
    }
    Ok(parse_body(text))
}

/// The body is not schema-checked: JSON if it parses, raw text otherwise.
fn parse_body(text: String) -> Value {
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

/// Result of one submit attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Server accepted the batch.
    Created(Value),
    /// Request failed; the form keeps its data.
    Failed(AppError),
    /// Another submission is still in flight; nothing was sent.
    Busy,
}

impl SubmitOutcome {
    /// Notification to display, if any.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SubmitOutcome::Created(_) => Some(Notice::success(SUCCESS_MESSAGE)),
            SubmitOutcome::Failed(_) => Some(Notice::error(FAILURE_MESSAGE)),
            SubmitOutcome::Busy => None,
        }
    }
}

/// Submits batches, one at a time.
pub struct BatchSubmitter<A> {
    api: A,
    in_flight: Cell<bool>,
}

impl<A: ProductsApi> BatchSubmitter<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            in_flight: Cell::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Submit the whole list as one batch.
    pub async fn submit(&self, records: &[DraftProduct]) -> SubmitOutcome {
        if self.in_flight.replace(true) {
            log::warn!("Submission already in flight, ignoring");
            return SubmitOutcome::Busy;
        }
        let _guard = InFlightGuard(&self.in_flight);

        log::info!("📤 Submitting {} product(s)...", records.len());

        match self.api.create_products(records).await {
            Ok(body) => {
                log::info!("✅ Products added: {}", body);
                SubmitOutcome::Created(body)
            }
            Err(e) => {
                log::error!("❌ Failed to add products: {}", e);
                SubmitOutcome::Failed(e)
            }
        }
    }
}

/// Clears the in-flight flag even if the submit future is dropped.
struct InFlightGuard<'a>(&'a Cell<bool>);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
