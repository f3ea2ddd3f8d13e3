//! FILENAME: core/persistence/tests/load_and_export.rs
//! End-to-end: dataset file on disk -> summary -> drill-down -> export file.

use std::fs;

use sales_engine::{drill_down, summarize, Dimension, ProductFilter};
use sales_persistence::{load_dataset, save_export, PersistenceError, DEFAULT_EXPORT_FILE_NAME};
use tempfile::tempdir;

const DATASET: &str = r#"[
  {"Sale ID": 1, "Product ID": 101, "Total Sale Amount": 10.005, "Month": "February", "Week": 6, "Day": "2024-02-05", "Day of Week": "Monday"},
  {"Sale ID": 2, "Product ID": 102, "Total Sale Amount": 5.00, "Month": "January", "Week": 2, "Day": "2024-01-09", "Day of Week": "Tuesday"},
  {"Sale ID": 3, "Product ID": 101, "Total Sale Amount": 7.25, "Month": "February", "Week": 6, "Day": "2024-02-06", "Day of Week": "Tuesday"},
  {"Sale ID": 4, "Product ID": 101, "Total Sale Amount": 2.5, "Month": "January", "Week": 1, "Day": "2024-01-01", "Day of Week": "Monday"}
]"#;

#[test]
fn test_load_summarize_drill_and_export() {
    let dir = tempdir().unwrap();
    let dataset_path = dir.path().join("sales_data.json");
    fs::write(&dataset_path, DATASET).unwrap();

    let dataset = load_dataset(&dataset_path).unwrap();
    assert_eq!(dataset.product_ids(), vec!["101", "102"]);

    let filter = ProductFilter::only("101");
    let summary = summarize(dataset.records(), Dimension::Month, &filter);
    let labels: Vec<&str> = summary.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["February", "January"]);
    assert_eq!(summary[0].total.to_string(), "17.26");

    // Numeric week labels are matched by their text form
    let drilled = drill_down(dataset.records(), Dimension::Week, "6", &filter);
    assert_eq!(drilled.len(), 2);

    let export_dir = dir.path().join("exports");
    let path = save_export(&export_dir, DEFAULT_EXPORT_FILE_NAME, &drilled).unwrap();
    let csv = fs::read_to_string(path).unwrap();

    assert_eq!(
        csv,
        "Sale ID,Product ID,Total Sale Amount,Month,Week,Day,Day of Week\n\
         1,101,10.005,February,6,2024-02-05,Monday\n\
         3,101,7.25,February,6,2024-02-06,Tuesday"
    );
}

#[test]
fn test_missing_dataset_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = load_dataset(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, PersistenceError::Io(_)));
}
