//! FILENAME: app/src/error.rs

use sales_engine::EngineError;
use sales_persistence::PersistenceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// True for caller contract violations (bad dimension, empty export).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            AppError::Engine(EngineError::InvalidArgument(_))
                | AppError::Persistence(PersistenceError::Engine(EngineError::InvalidArgument(_)))
        )
    }
}
