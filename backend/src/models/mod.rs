//! Domain models for product batches.
//!
//! Two shapes exist:
//!
//! - [`ProductInput`] - what a client sends. Prices may be strings or
//!   numbers; `sizes`/`category` may be a list or a comma-joined string
//!   (older clients send `""` for an untouched field).
//! - [`Product`] - the normalized record: numeric prices and trimmed lists.

use serde::{Deserialize, Serialize};

/// Highest accepted discount, in percent.
pub const MAX_DISCOUNT: f64 = 100.0;

// =============================================================================
// Input
// =============================================================================

/// A price amount as sent by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    /// Parse to a finite, non-negative number.
    pub fn to_number(&self) -> Result<f64, String> {
        let value = match self {
            Amount::Number(n) => *n,
            Amount::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("'{}' is not a number", s))?,
        };

        if !value.is_finite() {
            return Err(format!("{} is not a finite number", value));
        }
        if value < 0.0 {
            return Err(format!("{} must not be negative", value));
        }
        Ok(value)
    }
}

/// A list field: either a proper list or a comma-joined string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringList {
    Many(Vec<String>),
    Joined(String),
}

impl Default for StringList {
    fn default() -> Self {
        StringList::Many(Vec::new())
    }
}

impl StringList {
    /// Trimmed, non-empty items.
    pub fn into_items(self) -> Vec<String> {
        let raw: Vec<String> = match self {
            StringList::Many(items) => items,
            StringList::Joined(s) => s.split(',').map(str::to_string).collect(),
        };
        raw.into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceInput {
    pub org: Amount,
    pub mrp: Amount,
    pub off: Amount,
}

/// A product record as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub title: String,
    pub name: String,
    pub desc: String,
    pub img: String,
    pub price: PriceInput,
    #[serde(default)]
    pub sizes: StringList,
    #[serde(default)]
    pub category: StringList,
}

// =============================================================================
// Normalized
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Original price
    pub org: f64,
    /// Maximum retail price
    pub mrp: f64,
    /// Discount percentage
    pub off: f64,
}

/// A normalized product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub name: String,
    pub desc: String,
    pub img: String,
    pub price: Price,
    pub sizes: Vec<String>,
    pub category: Vec<String>,
}

impl ProductInput {
    /// Coerce prices and lists. Returns every problem found, not just the first.
    pub fn normalize(self) -> Result<Product, Vec<String>> {
        let mut errors = Vec::new();

        let mut amount = |field: &str, value: &Amount| match value.to_number() {
            Ok(n) => n,
            Err(e) => {
                errors.push(format!("price.{}: {}", field, e));
                0.0
            }
        };

        let price = Price {
            org: amount("org", &self.price.org),
            mrp: amount("mrp", &self.price.mrp),
            off: amount("off", &self.price.off),
        };

        if price.off > MAX_DISCOUNT {
            errors.push(format!("price.off: {} must be at most {}", price.off, MAX_DISCOUNT));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Product {
            title: self.title,
            name: self.name,
            desc: self.desc,
            img: self.img,
            price,
            sizes: self.sizes.into_items(),
            category: self.category.into_items(),
        })
    }
}
