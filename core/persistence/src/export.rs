//! FILENAME: core/persistence/src/export.rs
//! Writes drill-down exports as the transient CSV file handed to the share sheet.

use std::fs;
use std::path::{Path, PathBuf};

use sales_engine::{encode_csv, SaleRecord};

use crate::PersistenceError;

/// File name used when the caller does not configure one.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "sales_data.csv";

/// Encodes `records` and writes them to `dir/file_name`, replacing any
/// earlier export. Returns the written path.
pub fn save_export(
    dir: &Path,
    file_name: &str,
    records: &[SaleRecord],
) -> Result<PathBuf, PersistenceError> {
    let csv = encode_csv(records)?;
    write_export(dir, file_name, &csv)
}

/// Writes already-encoded export text as UTF-8.
pub fn write_export(dir: &Path, file_name: &str, csv: &str) -> Result<PathBuf, PersistenceError> {
    validate_file_name(file_name)?;

    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let path = dir.join(file_name);
    fs::write(&path, csv)?;

    log::info!("wrote export {:?} ({} bytes)", path, csv.len());
    Ok(path)
}

fn validate_file_name(file_name: &str) -> Result<(), PersistenceError> {
    let is_plain = !file_name.is_empty()
        && file_name != "."
        && file_name != ".."
        && !file_name.contains(['/', '\\']);

    if is_plain {
        Ok(())
    } else {
        Err(PersistenceError::InvalidExportName(file_name.to_string()))
    }
}
