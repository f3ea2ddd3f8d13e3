//! FILENAME: core/persistence/src/dataset.rs
//! PURPOSE: Reads the bundled sales asset into an immutable `Dataset`.
//! CONTEXT: The asset is a JSON array of flat objects. Key order is kept as
//! written, and numbers become exact decimals through their JSON text.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use sales_engine::{Dataset, FieldValue, SaleRecord, FIELD_AMOUNT, FIELD_PRODUCT_ID};
use serde_json::{Number, Value};

use crate::PersistenceError;

/// Loads a dataset file from disk.
pub fn load_dataset(path: &Path) -> Result<Dataset, PersistenceError> {
    log::debug!("loading sales dataset from {:?}", path);
    let text = fs::read_to_string(path)?;
    parse_dataset(&text)
}

/// Parses dataset JSON text.
pub fn parse_dataset(json: &str) -> Result<Dataset, PersistenceError> {
    let root: Value = serde_json::from_str(json)?;

    let items = match root {
        Value::Array(items) => items,
        other => {
            return Err(PersistenceError::InvalidFormat(format!(
                "expected a JSON array of records, found {}",
                value_kind(&other)
            )))
        }
    };

    // Amounts are non-negative, so a grand total that fits means every
    // bucket total fits as well.
    let mut grand_total = Decimal::ZERO;
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let record = parse_record(index, item)?;
        grand_total = grand_total.checked_add(record.amount()).ok_or_else(|| {
            invalid(
                index,
                format!("'{}' overflows the dataset total", FIELD_AMOUNT),
            )
        })?;
        records.push(record);
    }

    log::debug!("parsed {} sales records", records.len());
    Ok(Dataset::new(records))
}

fn parse_record(index: usize, item: Value) -> Result<SaleRecord, PersistenceError> {
    let fields = match item {
        Value::Object(fields) => fields,
        other => {
            return Err(invalid(
                index,
                format!("expected an object, found {}", value_kind(&other)),
            ))
        }
    };

    let mut record = SaleRecord::new();
    for (name, value) in fields {
        let value = to_field_value(value)
            .map_err(|reason| invalid(index, format!("field '{}': {}", name, reason)))?;
        record.set(name, value);
    }

    validate_record(index, &record)?;
    Ok(record)
}

fn to_field_value(value: Value) -> Result<FieldValue, String> {
    match value {
        Value::Null => Ok(FieldValue::Null),
        Value::Bool(b) => Ok(FieldValue::Bool(b)),
        Value::Number(n) => parse_number(&n)
            .map(FieldValue::Number)
            .ok_or_else(|| format!("number {} is out of range", n)),
        Value::String(s) => Ok(FieldValue::Text(s)),
        other => Err(format!("expected a scalar, found {}", value_kind(&other))),
    }
}

/// `10.005` must stay `10.005`, so go through the shortest text form rather
/// than through `f64` arithmetic.
fn parse_number(n: &Number) -> Option<Decimal> {
    let text = n.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

fn validate_record(index: usize, record: &SaleRecord) -> Result<(), PersistenceError> {
    match record.product_id() {
        None => return Err(invalid(index, format!("missing '{}'", FIELD_PRODUCT_ID))),
        Some(value) if value.is_null() => {
            return Err(invalid(index, format!("'{}' is null", FIELD_PRODUCT_ID)))
        }
        Some(_) => {}
    }

    match record.get(FIELD_AMOUNT) {
        None => Err(invalid(index, format!("missing '{}'", FIELD_AMOUNT))),
        Some(FieldValue::Number(amount)) if amount.is_sign_negative() && !amount.is_zero() => {
            Err(invalid(index, format!("'{}' is negative", FIELD_AMOUNT)))
        }
        Some(FieldValue::Number(_)) => Ok(()),
        Some(_) => Err(invalid(index, format!("'{}' is not a number", FIELD_AMOUNT))),
    }
}

fn invalid(index: usize, reason: String) -> PersistenceError {
    PersistenceError::InvalidRecord { index, reason }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
