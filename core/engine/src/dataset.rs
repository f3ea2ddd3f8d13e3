//! FILENAME: core/engine/src/dataset.rs
//! PURPOSE: Immutable, ordered collection of sale records.
//! CONTEXT: Loaded once at startup and shared by handle; nothing mutates it.

use rustc_hash::FxHashSet;

use crate::record::SaleRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<SaleRecord>,
}

impl Dataset {
    pub fn new(records: Vec<SaleRecord>) -> Self {
        Dataset { records }
    }

    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct product ids in first-appearance order.
    /// Records without a product id are skipped.
    pub fn product_ids(&self) -> Vec<String> {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut ids = Vec::new();
        for record in &self.records {
            if let Some(value) = record.product_id() {
                let label = value.label();
                if !seen.contains(&*label) {
                    seen.insert(label.to_string());
                    ids.push(label.into_owned());
                }
            }
        }
        ids
    }
}
