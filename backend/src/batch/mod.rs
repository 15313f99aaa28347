//! Batch intake: turn a submitted JSON body into normalized products.
//!
//! A batch is atomic. Every record is checked (schema first, then price
//! rules) and either all records are returned or a
//! [`BatchError::InvalidRecords`] lists the problems of each failing one.

use std::path::Path;

use serde_json::Value;

use crate::error::{BatchError, BatchResult, RecordErrors};
use crate::models::{Product, ProductInput};
use crate::validation::validate_product;

/// Validate and normalize a batch body.
pub fn process_batch(body: &Value) -> BatchResult<Vec<Product>> {
    let records = body.as_array().ok_or(BatchError::NotAnArray)?;
    if records.is_empty() {
        return Err(BatchError::EmptyBatch);
    }

    let mut products = Vec::with_capacity(records.len());
    let mut failures = Vec::new();

    for (record_index, record) in records.iter().enumerate() {
        match check_record(record) {
            Ok(product) => products.push(product),
            Err(errors) => failures.push(RecordErrors { record_index, errors }),
        }
    }

    if failures.is_empty() {
        Ok(products)
    } else {
        Err(BatchError::InvalidRecords(failures))
    }
}

fn check_record(record: &Value) -> Result<Product, Vec<String>> {
    validate_product(record)?;

    let input: ProductInput =
        serde_json::from_value(record.clone()).map_err(|e| vec![e.to_string()])?;
    input.normalize()
}

/// Read a batch body from a JSON file.
pub fn load_batch_file(path: &Path) -> BatchResult<Value> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn record(title: &str, off: &str) -> Value {
        json!({
            "title": title, "name": "N", "desc": "D", "img": "http://x/img.png",
            "price": { "org": "100", "mrp": "120", "off": off },
            "sizes": "", "category": ["shirts"]
        })
    }

    #[test]
    fn test_valid_batch_keeps_order() {
        let body = json!([record("first", "10"), record("second", "0")]);
        let products = process_batch(&body).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "first");
        assert_eq!(products[1].title, "second");
        assert!(products[0].sizes.is_empty());
        assert_eq!(products[0].price.off, 10.0);
    }

    #[test]
    fn test_rejects_non_array_and_empty() {
        assert!(matches!(process_batch(&json!({})), Err(BatchError::NotAnArray)));
        assert!(matches!(process_batch(&json!([])), Err(BatchError::EmptyBatch)));
    }

    #[test]
    fn test_one_bad_record_rejects_batch() {
        let body = json!([record("ok", "10"), record("", "10"), record("bad", "250")]);
        match process_batch(&body) {
            Err(BatchError::InvalidRecords(failures)) => {
                let indexes: Vec<usize> = failures.iter().map(|f| f.record_index).collect();
                assert_eq!(indexes, vec![1, 2]);
                assert!(failures[1].errors[0].contains("price.off"));
            }
            other => panic!("expected InvalidRecords, got {:?}", other),
        }
    }

    #[test]
    fn test_load_batch_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", json!([record("T1", "5")])).unwrap();

        let body = load_batch_file(file.path()).unwrap();
        assert_eq!(process_batch(&body).unwrap().len(), 1);
    }

    #[test]
    fn test_load_batch_file_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(load_batch_file(file.path()), Err(BatchError::JsonError(_))));
    }
}
