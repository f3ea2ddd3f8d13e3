//! FILENAME: core/engine/src/record.rs
//! PURPOSE: Flat sale records and the values they carry.
//! CONTEXT: A record keeps its fields in source key order so that exports
//! reproduce the columns of the bundled asset exactly.

use std::borrow::Cow;
use std::fmt;

use rust_decimal::Decimal;
use smallvec::SmallVec;

use crate::dimension::Dimension;

// ============================================================================
// WELL-KNOWN FIELDS
// ============================================================================

pub const FIELD_SALE_ID: &str = "Sale ID";
pub const FIELD_PRODUCT_ID: &str = "Product ID";
pub const FIELD_AMOUNT: &str = "Total Sale Amount";
pub const FIELD_MONTH: &str = "Month";
pub const FIELD_WEEK: &str = "Week";
pub const FIELD_DAY: &str = "Day";
pub const FIELD_DAY_OF_WEEK: &str = "Day of Week";

/// Bucket label for records that do not carry the grouping field.
pub const UNDEFINED_LABEL: &str = "undefined";

// ============================================================================
// FIELD VALUE
// ============================================================================

/// A single scalar value of a flat record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(Decimal),
    Text(String),
}

impl FieldValue {
    /// Text used when this value acts as a bucket label.
    /// Labels are compared verbatim: no trimming, no case folding.
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Null => Cow::Borrowed("null"),
            FieldValue::Bool(true) => Cow::Borrowed("true"),
            FieldValue::Bool(false) => Cow::Borrowed("false"),
            FieldValue::Number(n) => Cow::Owned(format_decimal(n)),
            FieldValue::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

/// Export text. Same as `label()` except that null renders as nothing.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            other => f.write_str(&other.label()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(Decimal::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// Plain decimal rendering: no exponent, no thousands separators, no
/// trailing fractional zeros (`5.00` renders as `5`).
pub fn format_decimal(value: &Decimal) -> String {
    value.normalize().to_string()
}

// ============================================================================
// SALE RECORD
// ============================================================================

pub type FieldEntry = (String, FieldValue);

/// One row of the sales dataset.
/// Most assets carry seven fields, so they stay inline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SaleRecord {
    fields: SmallVec<[FieldEntry; 8]>,
}

impl SaleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of `set`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets a field. An existing field keeps its position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();
        let existing = self.fields.iter().position(|(n, _)| *n == name);
        match existing {
            Some(i) => self.fields[i].1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
        self.fields.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn sale_id(&self) -> Option<&FieldValue> {
        self.get(FIELD_SALE_ID)
    }

    pub fn product_id(&self) -> Option<&FieldValue> {
        self.get(FIELD_PRODUCT_ID)
    }

    /// Sale amount. Missing or non-numeric amounts count as zero; the
    /// dataset loader rejects such records up front.
    pub fn amount(&self) -> Decimal {
        self.get(FIELD_AMOUNT)
            .and_then(FieldValue::as_decimal)
            .unwrap_or(Decimal::ZERO)
    }

    /// Bucket label of this record for `dimension`.
    pub fn dimension_label(&self, dimension: Dimension) -> Cow<'_, str> {
        self.get(dimension.field_name())
            .map(FieldValue::label)
            .unwrap_or(Cow::Borrowed(UNDEFINED_LABEL))
    }
}
