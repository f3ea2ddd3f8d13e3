//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the sales engine.
//! CONTEXT: Pure, synchronous functions over an in-memory record slice.
//! Nothing here performs I/O or holds state between calls.
//!
//! Layers:
//! - `record` / `dataset`: the flat sale records (WHAT we compute over)
//! - `dimension` / `filter`: user selections (HOW records are grouped)
//! - `summary` / `drilldown`: chart series and bucket expansion
//! - `csv`: export encoding of drill-down records

pub mod csv;
pub mod dataset;
pub mod dimension;
pub mod drilldown;
pub mod error;
pub mod filter;
pub mod record;
pub mod summary;

// Re-export commonly used types at the crate root
pub use csv::encode_csv;
pub use dataset::Dataset;
pub use dimension::{day_rank, Dimension, DAY_ORDER};
pub use drilldown::{drill_down, matches_bucket};
pub use error::{EngineError, EngineResult};
pub use filter::{ProductFilter, ALL_PRODUCTS};
pub use record::{
    format_decimal, FieldValue, SaleRecord, FIELD_AMOUNT, FIELD_DAY, FIELD_DAY_OF_WEEK,
    FIELD_MONTH, FIELD_PRODUCT_ID, FIELD_SALE_ID, FIELD_WEEK, UNDEFINED_LABEL,
};
pub use summary::{filtered_total, round_total, summarize, SummaryBucket};

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn sales() -> Vec<SaleRecord> {
        let rows = [
            (1, "A", "12.40", "Jan", "Monday"),
            (2, "B", "3.15", "Feb", "Sunday"),
            (3, "A", "7.00", "Jan", "Sunday"),
            (4, "A", "1.99", "Feb", "Monday"),
            (5, "B", "20.00", "Jan", "Monday"),
        ];
        rows.iter()
            .map(|(id, product, amount, month, weekday)| {
                SaleRecord::new()
                    .with(FIELD_SALE_ID, *id as i64)
                    .with(FIELD_PRODUCT_ID, *product)
                    .with(FIELD_AMOUNT, Decimal::from_str(amount).unwrap())
                    .with(FIELD_MONTH, *month)
                    .with(FIELD_DAY_OF_WEEK, *weekday)
            })
            .collect()
    }

    #[test]
    fn integration_test_click_then_export() {
        let records = sales();
        let filter = ProductFilter::only("A");

        let buckets = summarize(&records, Dimension::DayOfWeek, &filter);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].label, "Monday");

        // The chart hands back the clicked label verbatim
        let drilled = drill_down(&records, Dimension::DayOfWeek, &buckets[0].label, &filter);
        let csv = encode_csv(&drilled).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Sale ID,Product ID,Total Sale Amount,Month,Day of Week");
        assert_eq!(&lines[1..], &["1,A,12.4,Jan,Monday", "4,A,1.99,Feb,Monday"]);
    }

    #[test]
    fn integration_test_drilled_totals_match_bucket_totals() {
        let records = sales();

        for dimension in [Dimension::Month, Dimension::DayOfWeek] {
            for bucket in summarize(&records, dimension, &ProductFilter::All) {
                let drilled = drill_down(&records, dimension, &bucket.label, &ProductFilter::All);
                assert_eq!(filtered_total(&drilled, &ProductFilter::All), bucket.total);
            }
        }
    }

    #[test]
    fn integration_test_export_of_empty_drill_down_fails() {
        let drilled = drill_down(&sales(), Dimension::Month, "Dec", &ProductFilter::All);
        assert!(drilled.is_empty());
        assert!(matches!(encode_csv(&drilled), Err(EngineError::InvalidArgument(_))));
    }
}
