//! FILENAME: core/engine/src/drilldown.rs
//! Drill-down: expands a clicked summary bucket back into its raw records.

use crate::dimension::Dimension;
use crate::filter::ProductFilter;
use crate::record::SaleRecord;

/// Whether `record` belongs to the bucket labelled `clicked_label`.
pub fn matches_bucket(
    record: &SaleRecord,
    dimension: Dimension,
    clicked_label: &str,
    filter: &ProductFilter,
) -> bool {
    record.dimension_label(dimension) == clicked_label && filter.accepts(record)
}

/// Returns the records behind a clicked bucket, in input order.
/// A label with no remaining match yields an empty set.
pub fn drill_down(
    records: &[SaleRecord],
    dimension: Dimension,
    clicked_label: &str,
    filter: &ProductFilter,
) -> Vec<SaleRecord> {
    records
        .iter()
        .filter(|record| matches_bucket(record, dimension, clicked_label, filter))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FIELD_DAY_OF_WEEK, FIELD_MONTH, FIELD_PRODUCT_ID, FIELD_SALE_ID};

    fn records() -> Vec<SaleRecord> {
        vec![
            SaleRecord::new()
                .with(FIELD_SALE_ID, 1i64)
                .with(FIELD_PRODUCT_ID, "A")
                .with(FIELD_MONTH, "Jan")
                .with(FIELD_DAY_OF_WEEK, "Monday"),
            SaleRecord::new()
                .with(FIELD_SALE_ID, 2i64)
                .with(FIELD_PRODUCT_ID, "B")
                .with(FIELD_MONTH, "Jan")
                .with(FIELD_DAY_OF_WEEK, "Friday"),
            SaleRecord::new()
                .with(FIELD_SALE_ID, 3i64)
                .with(FIELD_PRODUCT_ID, "A")
                .with(FIELD_MONTH, "Feb")
                .with(FIELD_DAY_OF_WEEK, "Monday"),
            SaleRecord::new()
                .with(FIELD_SALE_ID, 4i64)
                .with(FIELD_PRODUCT_ID, "A")
                .with(FIELD_MONTH, "Jan"),
        ]
    }

    fn sale_ids(records: &[SaleRecord]) -> Vec<String> {
        records
            .iter()
            .map(|r| r.sale_id().map(|v| v.to_string()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_preserves_input_order() {
        let result = drill_down(&records(), Dimension::Month, "Jan", &ProductFilter::All);
        assert_eq!(sale_ids(&result), vec!["1", "2", "4"]);
    }

    #[test]
    fn test_applies_product_filter() {
        let result = drill_down(&records(), Dimension::Month, "Jan", &ProductFilter::only("A"));
        assert_eq!(sale_ids(&result), vec!["1", "4"]);
    }

    #[test]
    fn test_unmatched_label_is_empty_not_error() {
        assert!(drill_down(&records(), Dimension::Month, "Dec", &ProductFilter::All).is_empty());
        assert!(drill_down(&records(), Dimension::Month, "jan", &ProductFilter::All).is_empty());
        assert!(drill_down(&[], Dimension::Month, "Jan", &ProductFilter::All).is_empty());
    }

    #[test]
    fn test_undefined_bucket_drills_into_records_missing_the_field() {
        let result = drill_down(&records(), Dimension::DayOfWeek, "undefined", &ProductFilter::All);
        assert_eq!(sale_ids(&result), vec!["4"]);
    }

    #[test]
    fn test_every_drilled_record_matches_bucket() {
        let all = records();
        let filter = ProductFilter::only("A");
        let result = drill_down(&all, Dimension::DayOfWeek, "Monday", &filter);

        assert_eq!(result.len(), 2);
        assert!(result
            .iter()
            .all(|r| matches_bucket(r, Dimension::DayOfWeek, "Monday", &filter)));
    }
}
