//! FILENAME: core/engine/src/summary.rs
//! Sales summary - groups records by a dimension and totals their amounts.
//!
//! Algorithm:
//! 1. Skip records rejected by the product filter
//! 2. Group the rest by the text label of the dimension field
//! 3. Accumulate amounts exactly, round each group total once (2 dp, half-up)
//! 4. Order buckets: weekdays canonically, everything else by first appearance

use std::borrow::Cow;

use rust_decimal::{Decimal, RoundingStrategy};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::dimension::{day_rank, Dimension};
use crate::filter::ProductFilter;
use crate::record::SaleRecord;

/// Decimal places kept in bucket totals.
pub const TOTAL_DECIMAL_PLACES: u32 = 2;

/// One chart point: a distinct dimension label and its total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SummaryBucket {
    pub label: String,
    pub total: Decimal,
}

impl SummaryBucket {
    pub fn new(label: impl Into<String>, total: Decimal) -> Self {
        SummaryBucket {
            label: label.into(),
            total,
        }
    }
}

/// Builds the summary series for a dimension and product filter.
///
/// Month, Week and Day buckets come out in first-appearance order, not in
/// calendar order. Day of Week buckets follow Monday..Sunday; labels outside
/// that set trail, in first-appearance order.
pub fn summarize(
    records: &[SaleRecord],
    dimension: Dimension,
    filter: &ProductFilter,
) -> Vec<SummaryBucket> {
    let mut slots: FxHashMap<Cow<'_, str>, usize> = FxHashMap::default();
    let mut sums: Vec<(Cow<'_, str>, Decimal)> = Vec::new();

    for record in records.iter().filter(|r| filter.accepts(r)) {
        let label = record.dimension_label(dimension);
        match slots.get(&*label) {
            Some(&slot) => sums[slot].1 += record.amount(),
            None => {
                slots.insert(label.clone(), sums.len());
                sums.push((label, record.amount()));
            }
        }
    }

    let mut buckets: Vec<SummaryBucket> = sums
        .into_iter()
        .map(|(label, sum)| SummaryBucket::new(label.into_owned(), round_total(sum)))
        .collect();

    if dimension.has_canonical_order() {
        // sort_by_key is stable, so unknown labels keep their relative order
        buckets.sort_by_key(|bucket| day_rank(&bucket.label));
    }

    buckets
}

/// Rounded sum of every amount accepted by `filter`.
pub fn filtered_total(records: &[SaleRecord], filter: &ProductFilter) -> Decimal {
    let sum: Decimal = records
        .iter()
        .filter(|r| filter.accepts(r))
        .map(SaleRecord::amount)
        .sum();
    round_total(sum)
}

/// Half-up rounding to `TOTAL_DECIMAL_PLACES`. Amounts are never negative,
/// so midpoint-away-from-zero is half-up.
pub fn round_total(sum: Decimal) -> Decimal {
    sum.round_dp_with_strategy(TOTAL_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
