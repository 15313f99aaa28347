//! JSON Schema validation for product records.
//!
//! The product schema is embedded at compile time from
//! `schemas/product.json` (Draft 7). It checks the shape of a record:
//! required non-empty strings, a `price` object, list fields given as a
//! string or an array of strings. Numeric price rules live in
//! [`crate::models::ProductInput::normalize`].
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use catalog::validate_product;
//!
//! let product = json!({
//!     "title": "T1", "name": "N1", "desc": "D1", "img": "http://x/img.png",
//!     "price": { "org": "100", "mrp": "120", "off": "10" },
//!     "sizes": ["S", "M"], "category": ""
//! });
//! assert!(validate_product(&product).is_ok());
//! ```

use once_cell::sync::Lazy;
use serde_json::Value;

static PRODUCT_SCHEMA: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../schemas/product.json"))
        .expect("Invalid embedded schema")
});

/// Compiled once, shared by every record of every batch.
static PRODUCT_VALIDATOR: Lazy<jsonschema::Validator> = Lazy::new(|| {
    jsonschema::draft7::new(&PRODUCT_SCHEMA).expect("Invalid embedded schema")
});

/// Validate a JSON value against a JSON schema.
///
/// # Returns
/// * `Ok(())` when valid
/// * `Err(Vec<String>)` with one message per violation
pub fn validate(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let validator = jsonschema::draft7::new(schema)
        .map_err(|e| vec![format!("Invalid schema: {}", e)])?;

    collect_errors(&validator, data)
}

fn collect_errors(validator: &jsonschema::Validator, data: &Value) -> Result<(), Vec<String>> {
    let errors: Vec<String> = validator
        .iter_errors(data)
        .map(|e| e.to_string())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Quick true/false check.
pub fn is_valid(schema: &Value, data: &Value) -> bool {
    jsonschema::draft7::is_valid(schema, data)
}

/// Validate one record against the product schema.
pub fn validate_product(data: &Value) -> Result<(), Vec<String>> {
    collect_errors(&PRODUCT_VALIDATOR, data)
}

/// Quick check against the product schema.
pub fn is_valid_product(data: &Value) -> bool {
    PRODUCT_VALIDATOR.is_valid(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product() -> Value {
        json!({
            "title": "T1", "name": "N1", "desc": "D1", "img": "http://x/img.png",
            "price": { "org": "100", "mrp": "120", "off": "10" },
            "sizes": ["S", "M", "L"],
            "category": []
        })
    }

    #[test]
    fn test_shared_validator_matches_fresh_compile() {
        let mut bad = product();
        bad["price"] = json!({ "org": "", "mrp": "120", "off": "10" });

        for record in [product(), bad] {
            assert_eq!(
                validate_product(&record),
                validate(&PRODUCT_SCHEMA, &record),
            );
            assert_eq!(is_valid_product(&record), is_valid(&PRODUCT_SCHEMA, &record));
        }
    }

    #[test]
    fn test_valid_product() {
        assert!(is_valid_product(&product()));
    }

    #[test]
    fn test_legacy_string_lists_are_valid() {
        let mut p = product();
        p["sizes"] = json!("");
        p["category"] = json!("shirts,summer");
        assert!(validate_product(&p).is_ok());
    }

    #[test]
    fn test_lists_are_optional() {
        let mut p = product();
        p.as_object_mut().unwrap().remove("sizes");
        assert!(is_valid_product(&p));
    }

    #[test]
    fn test_empty_title_is_invalid() {
        let mut p = product();
        p["title"] = json!("");
        let errors = validate_product(&p).unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_missing_price_field() {
        let mut p = product();
        p["price"] = json!({ "org": "100", "mrp": "120" });
        let errors = validate_product(&p).unwrap_err();
        assert!(!errors.is_empty());
        assert!(errors.iter().any(|e| e.contains("off")));
    }

    #[test]
    fn test_non_string_list_item() {
        let mut p = product();
        p["sizes"] = json!(["S", 42]);
        assert!(!is_valid_product(&p));
    }
}
