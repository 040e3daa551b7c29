//! Error types for the core library

use thiserror::Error;

use crate::task::ValidationError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}
