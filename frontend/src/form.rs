//! In-memory state of the batch form.
//!
//! [`ProductBatch`] owns the ordered list of draft records. It is never
//! empty: it starts with one blank record and only grows.
//!
//! List fields (`sizes`, `category`) are stored as `Vec<String>` and edited
//! through a comma-joined string, see [`split_list`] and [`join_list`].

use crate::types::{DraftProduct, PriceField, ProductField};

/// Ordered draft records. Display order is submission order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductBatch {
    records: Vec<DraftProduct>,
}

impl ProductBatch {
    /// A batch holding a single blank record.
    pub fn new() -> Self {
        Self {
            records: vec![DraftProduct::blank()],
        }
    }

    pub fn records(&self) -> &[DraftProduct] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Never true: a batch starts with one record and only grows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Set a top-level field from the raw input text.
    ///
    /// List fields are split on `,` on every call. Out-of-range indexes are
    /// ignored.
    pub fn set_field(&mut self, index: usize, field: ProductField, value: &str) {
        let Some(record) = self.records.get_mut(index) else {
            log::warn!("Ignoring edit of missing record #{}", index);
            return;
        };

        match field {
            ProductField::Title => record.title = value.to_string(),
            ProductField::Name => record.name = value.to_string(),
            ProductField::Desc => record.desc = value.to_string(),
            ProductField::Img => record.img = value.to_string(),
            ProductField::Sizes => record.sizes = split_list(value),
            ProductField::Category => record.category = split_list(value),
        }
    }

    /// Set one field of the nested `price` object.
    pub fn set_price_field(&mut self, index: usize, field: PriceField, value: &str) {
        let Some(record) = self.records.get_mut(index) else {
            log::warn!("Ignoring price edit of missing record #{}", index);
            return;
        };

        let slot = match field {
            PriceField::Org => &mut record.price.org,
            PriceField::Mrp => &mut record.price.mrp,
            PriceField::Off => &mut record.price.off,
        };
        *slot = value.to_string();
    }

    /// Append a blank record at the end.
    pub fn append_blank(&mut self) {
        self.records.push(DraftProduct::blank());
    }

    /// Text shown in the input for `field` of record `index`.
    pub fn display_value(&self, index: usize, field: ProductField) -> String {
        let Some(record) = self.records.get(index) else {
            return String::new();
        };

        match field {
            ProductField::Title => record.title.clone(),
            ProductField::Name => record.name.clone(),
            ProductField::Desc => record.desc.clone(),
            ProductField::Img => record.img.clone(),
            ProductField::Sizes => join_list(&record.sizes),
            ProductField::Category => join_list(&record.category),
        }
    }

    /// Text shown in the input for a price field of record `index`.
    pub fn price_value(&self, index: usize, field: PriceField) -> String {
        self.records
            .get(index)
            .map(|record| match field {
                PriceField::Org => record.price.org.clone(),
                PriceField::Mrp => record.price.mrp.clone(),
                PriceField::Off => record.price.off.clone(),
            })
            .unwrap_or_default()
    }
}

impl Default for ProductBatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Split raw input on `,`. Empty input gives an empty list.
///
/// Pieces are not trimmed so that `join_list(split_list(s)) == s` while the
/// user is typing (e.g. `"S, "`).
pub fn split_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(str::to_string).collect()
}

/// Inverse of [`split_list`].
pub fn join_list(items: &[String]) -> String {
    items.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DraftPrice;

    fn filled(title: &str) -> DraftProduct {
        DraftProduct {
            title: title.into(),
            name: "N".into(),
            desc: "D".into(),
            img: "http://x/img.png".into(),
            price: DraftPrice { org: "100".into(), mrp: "120".into(), off: "10".into() },
            sizes: vec!["S".into()],
            category: vec!["shirts".into()],
        }
    }

    #[test]
    fn test_starts_with_one_blank_record() {
        let batch = ProductBatch::new();
        assert_eq!(batch.len(), 1);
        assert!(!batch.is_empty());
        assert_eq!(batch.records()[0], DraftProduct::blank());
    }

    #[test]
    fn test_set_field_only_touches_target() {
        let mut batch = ProductBatch::new();
        batch.append_blank();
        batch.set_field(1, ProductField::Title, "T2");
        batch.set_field(1, ProductField::Img, "http://x/2.png");

        assert_eq!(batch.records()[0], DraftProduct::blank());
        let second = &batch.records()[1];
        assert_eq!(second.title, "T2");
        assert_eq!(second.img, "http://x/2.png");
        assert_eq!(second.name, "");
        assert_eq!(second.price, DraftPrice::default());
    }

    #[test]
    fn test_sizes_are_split_on_comma() {
        let mut batch = ProductBatch::new();
        batch.set_field(0, ProductField::Sizes, "S,M,L");
        assert_eq!(batch.records()[0].sizes, vec!["S", "M", "L"]);
        assert!(batch.records()[0].category.is_empty());
    }

    #[test]
    fn test_list_display_round_trips_partial_input() {
        let mut batch = ProductBatch::new();
        for typed in ["S", "S,", "S, M", ""] {
            batch.set_field(0, ProductField::Category, typed);
            assert_eq!(batch.display_value(0, ProductField::Category), typed);
        }
        assert!(batch.records()[0].category.is_empty());
    }

    #[test]
    fn test_set_price_field() {
        let mut batch = ProductBatch::new();
        batch.set_price_field(0, PriceField::Mrp, "120");
        assert_eq!(batch.records()[0].price.mrp, "120");
        assert_eq!(batch.records()[0].price.org, "");
        assert_eq!(batch.price_value(0, PriceField::Mrp), "120");
    }

    #[test]
    fn test_append_keeps_existing_records() {
        let mut batch = ProductBatch::new();
        batch.set_field(0, ProductField::Title, "T1");
        let before = batch.records()[0].clone();

        batch.append_blank();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.records()[0], before);
        assert_eq!(batch.records()[1], DraftProduct::blank());
    }

    #[test]
    fn test_out_of_range_edit_is_ignored() {
        let mut batch = ProductBatch::new();
        let snapshot = batch.clone();
        batch.set_field(3, ProductField::Name, "ghost");
        batch.set_price_field(3, PriceField::Org, "1");
        assert_eq!(batch, snapshot);
        assert_eq!(batch.display_value(3, ProductField::Name), "");
    }

    #[test]
    fn test_serializes_in_display_order() {
        let mut batch = ProductBatch::new();
        batch.records[0] = filled("first");
        batch.append_blank();
        batch.set_field(1, ProductField::Title, "second");

        let body = serde_json::to_value(batch.records()).unwrap();
        assert_eq!(body[0]["title"], "first");
        assert_eq!(body[0]["price"]["mrp"], "120");
        assert_eq!(body[1]["title"], "second");
    }
}
