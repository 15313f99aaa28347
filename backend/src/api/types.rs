//! REST API types for frontend integration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::RecordErrors;
use crate::models::Product;

/// Response sent after a batch is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProductsResponse {
    /// Unique batch identifier
    pub batch_id: String,

    /// Always "created"
    pub status: String,

    /// Number of products in the batch
    pub accepted: usize,

    pub received_at: DateTime<Utc>,

    /// Normalized products, in submission order
    pub products: Vec<Product>,
}

impl From<Vec<Product>> for AddProductsResponse {
    fn from(products: Vec<Product>) -> Self {
        AddProductsResponse {
            batch_id: Uuid::new_v4().to_string(),
            status: "created".to_string(),
            accepted: products.len(),
            received_at: Utc::now(),
            products,
        }
    }
}

/// Create an error response
pub fn error_response(error: &str, errors: &[RecordErrors]) -> Value {
    json!({
        "status": "error",
        "error": error,
        "errors": errors,
        "accepted": 0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Price;

    #[test]
    fn test_response_is_camel_case() {
        let product = Product {
            title: "T1".into(),
            name: "N1".into(),
            desc: "D1".into(),
            img: "http://x/img.png".into(),
            price: Price { org: 100.0, mrp: 120.0, off: 10.0 },
            sizes: vec!["S".into()],
            category: vec![],
        };

        let value = serde_json::to_value(AddProductsResponse::from(vec![product])).unwrap();

        assert_eq!(value["status"], "created");
        assert_eq!(value["accepted"], 1);
        assert!(value["batchId"].is_string());
        assert!(value["receivedAt"].is_string());
        assert_eq!(value["products"][0]["price"]["mrp"], 120.0);
    }

    #[test]
    fn test_error_response_lists_records() {
        let value = error_response(
            "1 record(s) failed validation",
            &[RecordErrors { record_index: 3, errors: vec!["bad".into()] }],
        );
        assert_eq!(value["status"], "error");
        assert_eq!(value["errors"][0]["recordIndex"], 3);
    }
}
