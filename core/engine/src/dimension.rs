//! FILENAME: core/engine/src/dimension.rs
//! PURPOSE: The grouping dimensions a sales summary can be built on.
//! CONTEXT: Each dimension maps to one pre-computed time-bucket field of a
//! sale record. Labels are trusted as given; nothing here parses dates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::record::{FIELD_DAY, FIELD_DAY_OF_WEEK, FIELD_MONTH, FIELD_WEEK};

/// Canonical display order for `Dimension::DayOfWeek` buckets.
pub const DAY_ORDER: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Field used to group records into summary buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dimension {
    #[default]
    #[serde(rename = "Month")]
    Month,
    #[serde(rename = "Week")]
    Week,
    #[serde(rename = "Day")]
    Day,
    #[serde(rename = "Day of Week")]
    DayOfWeek,
}

impl Dimension {
    /// Every selectable dimension, in picker order.
    pub const ALL: [Dimension; 4] = [
        Dimension::Month,
        Dimension::Week,
        Dimension::Day,
        Dimension::DayOfWeek,
    ];

    /// Name of the record field this dimension reads.
    pub fn field_name(self) -> &'static str {
        match self {
            Dimension::Month => FIELD_MONTH,
            Dimension::Week => FIELD_WEEK,
            Dimension::Day => FIELD_DAY,
            Dimension::DayOfWeek => FIELD_DAY_OF_WEEK,
        }
    }

    /// Whether buckets of this dimension are re-sorted into a fixed order.
    /// All other dimensions keep first-appearance order.
    pub fn has_canonical_order(self) -> bool {
        matches!(self, Dimension::DayOfWeek)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for Dimension {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.field_name() == s)
            .ok_or_else(|| EngineError::InvalidArgument(format!("unknown dimension '{}'", s)))
    }
}

/// Position of a weekday label in `DAY_ORDER`.
/// Labels outside the canonical set rank after Sunday.
pub fn day_rank(label: &str) -> usize {
    DAY_ORDER
        .iter()
        .position(|day| *day == label)
        .unwrap_or(DAY_ORDER.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip_through_from_str() {
        for dimension in Dimension::ALL {
            assert_eq!(dimension.field_name().parse::<Dimension>(), Ok(dimension));
        }
    }

    #[test]
    fn test_unknown_dimension_is_invalid_argument() {
        let err = "Quarter".parse::<Dimension>().unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));

        // No case folding or trimming
        assert!("month".parse::<Dimension>().is_err());
        assert!(" Month".parse::<Dimension>().is_err());
    }

    #[test]
    fn test_day_rank() {
        assert_eq!(day_rank("Monday"), 0);
        assert_eq!(day_rank("Sunday"), 6);
        assert_eq!(day_rank("Funday"), 7);
        assert_eq!(day_rank("monday"), 7);
    }

    #[test]
    fn test_serde_uses_field_names() {
        let json = serde_json::to_string(&Dimension::DayOfWeek).unwrap();
        assert_eq!(json, "\"Day of Week\"");
        let parsed: Dimension = serde_json::from_str("\"Week\"").unwrap();
        assert_eq!(parsed, Dimension::Week);
    }
}
