//! FILENAME: app/src/lib.rs
// PURPOSE: Main library entry point for the sales chart screen backend.
// CONTEXT: Wires the bundled dataset, config and logging to the headless
// screen. Chart drawing and the OS share sheet stay outside this crate.

use std::sync::Arc;

use sales_engine::Dataset;
use sales_persistence::{load_dataset as load_dataset_file, parse_dataset};

pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod screen;

pub use chart::{build_chart_option, ChartType};
pub use config::AppConfig;
pub use error::AppError;
pub use logging::{init_logging, next_seq, write_log};
pub use screen::{ProductOption, SalesScreen, ALL_PRODUCTS_LABEL};

/// Sales records shipped with the app.
pub const BUNDLED_DATASET: &str = include_str!("../assets/sales_data.json");

pub fn load_bundled_dataset() -> Result<Dataset, AppError> {
    Ok(parse_dataset(BUNDLED_DATASET)?)
}

/// Loads the configured dataset file, or the bundled asset when none is set.
pub fn load_dataset(config: &AppConfig) -> Result<Dataset, AppError> {
    match &config.dataset_path {
        Some(path) => Ok(load_dataset_file(path)?),
        None => load_bundled_dataset(),
    }
}

/// Opens the screen over the configured dataset.
pub fn open_screen(config: &AppConfig) -> Result<SalesScreen, AppError> {
    let dataset = Arc::new(load_dataset(config)?);
    log_info!("APP", "loaded {} sales records", dataset.len());
    Ok(SalesScreen::new(dataset, config))
}
