//! FILENAME: core/engine/src/filter.rs
//! Product filter shared by summaries and drill-downs.

use serde::{Deserialize, Serialize};

use crate::record::SaleRecord;

/// Picker value that stands for "all products".
pub const ALL_PRODUCTS: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProductFilter {
    #[default]
    All,
    Only(String),
}

impl ProductFilter {
    pub fn only(product_id: impl Into<String>) -> Self {
        ProductFilter::Only(product_id.into())
    }

    /// Maps a product picker value to a filter. `"All"` is the sentinel.
    pub fn from_selection(selection: &str) -> Self {
        if selection == ALL_PRODUCTS {
            ProductFilter::All
        } else {
            ProductFilter::Only(selection.to_string())
        }
    }

    /// Inverse of `from_selection`.
    pub fn as_selection(&self) -> &str {
        match self {
            ProductFilter::All => ALL_PRODUCTS,
            ProductFilter::Only(id) => id,
        }
    }

    /// Exact comparison against the record's product id label.
    pub fn accepts(&self, record: &SaleRecord) -> bool {
        match self {
            ProductFilter::All => true,
            ProductFilter::Only(id) => record
                .product_id()
                .map_or(false, |value| value.label() == id.as_str()),
        }
    }
}
