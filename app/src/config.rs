//! FILENAME: app/src/config.rs
// PURPOSE: Screen backend configuration, read from an optional JSON file.
// CONTEXT: Every field has a default, so an empty object is a valid config.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use sales_engine::Dimension;
use sales_persistence::DEFAULT_EXPORT_FILE_NAME;
use serde::{Deserialize, Serialize};

use crate::chart::ChartType;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Dataset file. `None` uses the bundled asset.
    pub dataset_path: Option<PathBuf>,

    /// Directory the transient export file is written to.
    pub export_dir: PathBuf,

    pub export_file_name: String,

    /// Dimension selected when the screen opens.
    pub default_dimension: Dimension,

    pub default_chart_type: ChartType,

    /// One of off, error, warn, info, debug, trace.
    pub log_level: String,

    /// Log file. `None` logs to stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            dataset_path: None,
            export_dir: std::env::temp_dir(),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            default_dimension: Dimension::Month,
            default_chart_type: ChartType::Bar,
            log_level: "warn".to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Reads a JSON config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.log_level_filter()?;
        Ok(config)
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter, AppError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| AppError::Config(format!("unknown log level '{}'", self.log_level)))
    }
}
