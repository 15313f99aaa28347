//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Product Types** - Draft records edited by the form
//! - **Field Types** - Addressing a single input of a record
//! - **Notice Types** - User-visible notifications
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// =============================================================================
// Product Types
// =============================================================================

/// Price block of a draft product.
///
/// Values are kept exactly as typed in the number inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftPrice {
    /// Original price
    pub org: String,
    /// Maximum retail price
    pub mrp: String,
    /// Discount percentage
    pub off: String,
}

/// A product entry held by the form until it is submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftProduct {
    pub title: String,
    pub name: String,
    pub desc: String,
    /// Image URL (not validated)
    pub img: String,
    pub price: DraftPrice,
    pub sizes: Vec<String>,
    pub category: Vec<String>,
}

impl DraftProduct {
    /// Blank record, as shown when the page loads.
    pub fn blank() -> Self {
        Self::default()
    }
}

// =============================================================================
// Field Types
// =============================================================================

/// Top-level field of a [`DraftProduct`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProductField {
    Title,
    Name,
    Desc,
    Img,
    /// Comma-separated list input
    Sizes,
    /// Comma-separated list input
    Category,
}

impl ProductField {
    /// Key used in the JSON body.
    pub fn key(&self) -> &'static str {
        match self {
            ProductField::Title => "title",
            ProductField::Name => "name",
            ProductField::Desc => "desc",
            ProductField::Img => "img",
            ProductField::Sizes => "sizes",
            ProductField::Category => "category",
        }
    }

    /// Whether the stored value is a list edited through a comma-joined string.
    pub fn is_list(&self) -> bool {
        matches!(self, ProductField::Sizes | ProductField::Category)
    }
}

/// Field of the nested `price` object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PriceField {
    Org,
    Mrp,
    Off,
}

impl PriceField {
    pub fn key(&self) -> &'static str {
        match self {
            PriceField::Org => "org",
            PriceField::Mrp => "mrp",
            PriceField::Off => "off",
        }
    }
}

// =============================================================================
// Notice Types
// =============================================================================

/// Notification severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

impl NoticeLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "notice notice-success",
            NoticeLevel::Error => "notice notice-error",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "✅",
            NoticeLevel::Error => "❌",
        }
    }
}

static NEXT_NOTICE_ID: AtomicU64 = AtomicU64::new(1);

/// A user-visible notification.
///
/// Every notice gets its own `id`, so two notices with the same text are
/// still distinct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            id: NEXT_NOTICE_ID.fetch_add(1, Ordering::Relaxed),
            level,
            message: message.into(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// Request could not be built or sent (DNS, refused connection, CORS...).
    Network(String),
    /// Server answered with a non-2xx status.
    Server { status: u16, body: String },
    /// Body could not be encoded or the response could not be read.
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Server { status, body } => write!(f, "Server error ({}): {}", status, body),
            AppError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
