//! FILENAME: core/engine/src/csv.rs
//! PURPOSE: Delimited-text encoding of drill-down records for export.
//! CONTEXT: The layout is consumed by spreadsheet tools as-is. Values are
//! written verbatim: a comma inside a value is NOT quoted or escaped, so such
//! a value shifts the columns of its line.

use crate::error::{EngineError, EngineResult};
use crate::record::SaleRecord;

pub const CSV_DELIMITER: &str = ",";
pub const CSV_LINE_BREAK: &str = "\n";

/// Encodes records as CSV text.
///
/// The header is the first record's field names. Each body line holds that
/// line's own record values in its own key order. Lines are joined by `\n`
/// with no trailing line break.
pub fn encode_csv(records: &[SaleRecord]) -> EngineResult<String> {
    let first = records.first().ok_or_else(|| {
        EngineError::InvalidArgument("cannot encode an empty record set".to_string())
    })?;

    let mut out = first.field_names().collect::<Vec<_>>().join(CSV_DELIMITER);

    for record in records {
        out.push_str(CSV_LINE_BREAK);
        let line = record
            .values()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(CSV_DELIMITER);
        out.push_str(&line);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FieldValue, FIELD_AMOUNT, FIELD_MONTH, FIELD_PRODUCT_ID, FIELD_SALE_ID};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn record(id: i64, product: &str, amount: &str) -> SaleRecord {
        SaleRecord::new()
            .with(FIELD_SALE_ID, id)
            .with(FIELD_PRODUCT_ID, product)
            .with(FIELD_AMOUNT, Decimal::from_str(amount).unwrap())
            .with(FIELD_MONTH, "Jan")
    }

    #[test]
    fn test_empty_set_is_invalid_argument() {
        let err = encode_csv(&[]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }

    #[test]
    fn test_exact_layout() {
        let csv = encode_csv(&[record(1, "A", "10.50"), record(2, "B", "1200")]).unwrap();
        assert_eq!(
            csv,
            "Sale ID,Product ID,Total Sale Amount,Month\n1,A,10.5,Jan\n2,B,1200,Jan"
        );
    }

    #[test]
    fn test_single_record_has_no_trailing_newline() {
        let csv = encode_csv(&[record(7, "A", "3")]).unwrap();
        assert_eq!(csv.lines().count(), 2);
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_embedded_commas_are_not_escaped() {
        let row = SaleRecord::new()
            .with(FIELD_SALE_ID, 1i64)
            .with(FIELD_PRODUCT_ID, "Widget, large");
        let csv = encode_csv(&[row]).unwrap();
        assert_eq!(csv, "Sale ID,Product ID\n1,Widget, large");
    }

    #[test]
    fn test_body_lines_use_each_records_own_key_order() {
        let first = SaleRecord::new().with("a", "1").with("b", "2");
        let second = SaleRecord::new().with("b", "3").with("a", "4").with("c", FieldValue::Null);
        let csv = encode_csv(&[first, second]).unwrap();
        assert_eq!(csv, "a,b\n1,2\n3,4,");
    }
}
