//! UI Components for the catalog admin application.
//!
//! # Layout Components
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`ProductBatchForm`] - Batch product entry form
//! - [`ProductCard`] - Inputs of a single draft product
//! - [`NoticeBanner`] - Submission outcome notification

mod footer;
mod notice;
mod product_card;
mod product_form;

pub use footer::*;
pub use notice::*;
pub use product_card::*;
pub use product_form::*;
