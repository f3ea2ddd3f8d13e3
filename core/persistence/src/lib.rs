//! FILENAME: core/persistence/src/lib.rs
//! Sales Persistence Module
//!
//! Reads the bundled sales dataset and writes drill-down exports. This is
//! the only crate of the core that touches the filesystem.

mod dataset;
mod error;
mod export;

pub use dataset::{load_dataset, parse_dataset};
pub use error::PersistenceError;
pub use export::{save_export, write_export, DEFAULT_EXPORT_FILE_NAME};
